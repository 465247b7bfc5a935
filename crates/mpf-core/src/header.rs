// crates/mpf-core/src/header.rs

use std::borrow::Cow;
use std::io::Read;

use crate::error::{MpfError, Result};
use crate::format::{
    CODE_TYPE_LEN, DATA_TYPE_LEN, FORMAT_CODE_LEN, HEADER_FIXED_LEN, HEADER_SIZE_PAD_LEN, LABEL_WIDTH_PAD_LEN,
    UNSIGNED_CHAR,
};
use crate::options::TextPolicy;
use crate::reader::ByteReader;
use crate::text::{decode_field, trim_nul};

/// Decoded MPF header. Text fields keep their raw bytes; see the `*_text`
/// accessors for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderInfo {
    pub header_size: u8,
    pub format_code: [u8; FORMAT_CODE_LEN],
    pub illustration: Vec<u8>,
    pub code_type: [u8; CODE_TYPE_LEN],
    pub label_byte_width: u8,
    pub data_type: [u8; DATA_TYPE_LEN],
    pub sample_count: u32,
    pub declared_dimensionality: u32,
}

/// Element encodings a record vector can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    UnsignedChar,
}

impl HeaderInfo {
    /// Consume exactly `header_size` bytes from `r`.
    pub fn read_from<R: Read>(r: &mut ByteReader<R>) -> Result<Self> {
        let header_size = r.take_u8("header_size")?;
        let pad = r.take_array::<HEADER_SIZE_PAD_LEN>("header_size")?;
        if pad.iter().any(|&b| b != 0) {
            return Err(MpfError::MalformedHeader("non-zero header-size padding".into()));
        }

        let format_code = r.take_array::<FORMAT_CODE_LEN>("format_code")?;

        let illustration_len = (header_size as usize)
            .checked_sub(HEADER_FIXED_LEN)
            .ok_or_else(|| {
                MpfError::MalformedHeader(format!(
                    "header size {header_size} is below the {HEADER_FIXED_LEN}-byte minimum"
                ))
            })?;
        let illustration = r.take_exact(illustration_len, "illustration")?;

        let code_type = r.take_array::<CODE_TYPE_LEN>("code_type")?;

        let label_byte_width = r.take_u8("code_length")?;
        let pad = r.take_array::<LABEL_WIDTH_PAD_LEN>("code_length")?;
        if pad.iter().any(|&b| b != 0) {
            return Err(MpfError::MalformedHeader("non-zero code-length padding".into()));
        }

        let data_type = r.take_array::<DATA_TYPE_LEN>("data_type")?;
        let sample_count = r.take_u32_le("sample_number")?;
        let declared_dimensionality = r.take_u32_le("dimensionality")?;

        let header = HeaderInfo {
            header_size,
            format_code,
            illustration,
            code_type,
            label_byte_width,
            data_type,
            sample_count,
            declared_dimensionality,
        };
        tracing::debug!(
            header_size,
            label_byte_width,
            sample_count,
            declared_dimensionality,
            "mpf header decoded"
        );
        Ok(header)
    }

    /// Serialize back to the on-disk layout. `header_size` is recomputed from
    /// the illustration length.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let size = HEADER_FIXED_LEN + self.illustration.len();
        let size = u8::try_from(size).map_err(|_| {
            MpfError::MalformedHeader(format!("illustration too long: header would be {size} bytes"))
        })?;

        let mut b = Vec::with_capacity(size as usize);
        b.push(size);
        b.extend_from_slice(&[0u8; HEADER_SIZE_PAD_LEN]);
        b.extend_from_slice(&self.format_code);
        b.extend_from_slice(&self.illustration);
        b.extend_from_slice(&self.code_type);
        b.push(self.label_byte_width);
        b.extend_from_slice(&[0u8; LABEL_WIDTH_PAD_LEN]);
        b.extend_from_slice(&self.data_type);
        b.extend_from_slice(&self.sample_count.to_le_bytes());
        b.extend_from_slice(&self.declared_dimensionality.to_le_bytes());
        Ok(b)
    }

    /// The gate in front of record decoding.
    pub fn element_type(&self) -> Result<ElementType> {
        match trim_nul(&self.data_type) {
            UNSIGNED_CHAR => Ok(ElementType::UnsignedChar),
            other => Err(MpfError::UnsupportedDataType(String::from_utf8_lossy(other).into_owned())),
        }
    }

    pub fn format_code_text(&self, policy: TextPolicy) -> Result<Cow<'_, str>> {
        decode_field(&self.format_code, "format_code", policy)
    }

    pub fn illustration_text(&self, policy: TextPolicy) -> Result<Cow<'_, str>> {
        decode_field(&self.illustration, "illustration", policy)
    }

    pub fn code_type_text(&self, policy: TextPolicy) -> Result<Cow<'_, str>> {
        decode_field(&self.code_type, "code_type", policy)
    }

    pub fn data_type_text(&self, policy: TextPolicy) -> Result<Cow<'_, str>> {
        decode_field(&self.data_type, "data_type", policy)
    }
}

/// Copy `s` into a zero-filled fixed-width field, truncating if it is too long.
pub fn fixed_field<const N: usize>(s: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let n = s.len().min(N);
    out[..n].copy_from_slice(&s[..n]);
    out
}
