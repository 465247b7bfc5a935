// crates/mpf-core/src/record.rs

use std::io::Read;

use crate::error::{MpfError, RecordPart, Result};
use crate::reader::ByteReader;
use crate::text::hex_bytes;

/// Upper bound on the vector bytes read per call into the source.
const READ_CHUNK: usize = 64 * 1024;

/// One labeled feature vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub label: Vec<u8>,
    pub vector: Vec<u16>,
}

impl Record {
    pub fn label_hex(&self) -> String {
        hex_bytes(&self.label)
    }
}

/// Byte widths of one record on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    pub label_width: usize,
    pub dimensionality: usize,
}

impl RecordLayout {
    /// A record always carries at least one label byte.
    pub fn effective_label_width(&self) -> usize {
        self.label_width.max(1)
    }

    pub fn record_len(&self) -> usize {
        self.effective_label_width() + self.dimensionality
    }
}

/// Lazy decoder over the record region of an MPF stream.
///
/// Yields `Ok(Record)` until the source is exhausted exactly on a record
/// boundary. A short label or vector yields one `TruncatedRecord` error; after
/// that, or after a clean end, the stream yields `None` forever.
pub struct RecordStream<R> {
    reader: ByteReader<R>,
    layout: RecordLayout,
    declared_count: Option<u32>,
    scratch: Vec<u8>,
    index: u64,
    done: bool,
}

impl<R: Read> RecordStream<R> {
    pub fn new(reader: ByteReader<R>, layout: RecordLayout) -> Self {
        Self {
            reader,
            layout,
            declared_count: None,
            scratch: vec![0u8; layout.dimensionality.min(READ_CHUNK)],
            index: 0,
            done: false,
        }
    }

    /// Compare against this count when the stream ends cleanly.
    pub fn with_declared_count(mut self, count: u32) -> Self {
        self.declared_count = Some(count);
        self
    }

    /// Records successfully decoded so far.
    pub fn records_read(&self) -> u64 {
        self.index
    }

    fn truncated(&self, part: RecordPart, expected: usize, got: usize) -> MpfError {
        MpfError::TruncatedRecord { index: self.index, part, expected, got }
    }

    fn finish(&mut self) {
        self.done = true;
        tracing::debug!(
            records = self.index,
            bytes = self.reader.position(),
            "record stream finished"
        );
        if let Some(declared) = self.declared_count {
            if u64::from(declared) != self.index {
                tracing::warn!(declared, decoded = self.index, "sample count mismatch");
            }
        }
    }

    fn read_record(&mut self) -> Result<Option<Record>> {
        let first = match self.reader.next_u8()? {
            Some(b) => b,
            None => return Ok(None),
        };

        // the first byte is always part of the label, even for a zero width
        let mut label = vec![0u8; self.layout.effective_label_width()];
        label[0] = first;
        let got = 1 + self.reader.fill(&mut label[1..])?;
        if got != label.len() {
            return Err(self.truncated(RecordPart::Label, label.len(), got));
        }

        // grow with the bytes actually present; the width may come from the header
        let dim = self.layout.dimensionality;
        let mut vector = Vec::with_capacity(dim.min(READ_CHUNK));
        while vector.len() < dim {
            let want = (dim - vector.len()).min(self.scratch.len());
            let got = self.reader.fill(&mut self.scratch[..want])?;
            vector.extend(self.scratch[..got].iter().copied().map(u16::from));
            if got < want {
                return Err(self.truncated(RecordPart::Vector, dim, vector.len()));
            }
        }

        self.index += 1;
        Ok(Some(Record { label, vector }))
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.finish();
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for RecordStream<R> {}
