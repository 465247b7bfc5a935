// crates/mpf-core/src/decoder.rs

use std::io::Read;

use crate::error::Result;
use crate::header::{ElementType, HeaderInfo};
use crate::options::DecodeOptions;
use crate::reader::ByteReader;
use crate::record::{Record, RecordLayout, RecordStream};

/// A decoding session over one MPF byte source.
///
/// `new` reads and validates the header; `records` runs the data-type gate and
/// hands the rest of the source to a `RecordStream`. The source is owned by
/// the session and dropped with it.
pub struct Decoder<R> {
    reader: ByteReader<R>,
    header: HeaderInfo,
    options: DecodeOptions,
}

impl<R: Read> Decoder<R> {
    pub fn new(src: R, options: DecodeOptions) -> Result<Self> {
        let mut reader = ByteReader::new(src);
        let header = HeaderInfo::read_from(&mut reader)?;
        Ok(Self { reader, header, options })
    }

    pub fn header(&self) -> &HeaderInfo {
        &self.header
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Record layout implied by the header and the dimension policy.
    /// Fails if the declared data type is unsupported.
    pub fn layout(&self) -> Result<RecordLayout> {
        match self.header.element_type()? {
            ElementType::UnsignedChar => {}
        }
        let dimensionality = self
            .options
            .dimension
            .resolve(self.header.declared_dimensionality)?;
        Ok(RecordLayout {
            label_width: self.header.label_byte_width as usize,
            dimensionality: dimensionality as usize,
        })
    }

    pub fn records(self) -> Result<RecordStream<R>> {
        let layout = self.layout()?;
        tracing::debug!(
            label_width = layout.label_width,
            dimensionality = layout.dimensionality,
            record_len = layout.record_len(),
            "record layout"
        );
        Ok(RecordStream::new(self.reader, layout).with_declared_count(self.header.sample_count))
    }
}

/// Decode a whole stream into memory. Meant for small inputs and tests; the
/// CLI streams instead.
pub fn decode_all<R: Read>(src: R, options: DecodeOptions) -> Result<(HeaderInfo, Vec<Record>)> {
    let decoder = Decoder::new(src, options)?;
    let header = decoder.header().clone();
    let records = decoder.records()?.collect::<Result<Vec<_>>>()?;
    Ok((header, records))
}
