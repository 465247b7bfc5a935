// crates/mpf-core/src/format.rs

/// MPF header layout (multi-byte integers little-endian):
/// header_size:u8 + reserved[3]   (reserved must be zero)
/// format_code[8]                 ("MPF\0" family, not checked)
/// illustration[header_size - 62]
/// code_type[20]                  ("ASCII", "GB", ...)
/// code_length:u8 + reserved[1]   (reserved must be zero)
/// data_type[20]                  ("unsigned char" is the only supported type)
/// sample_number:u32
/// dimensionality:u32
///
/// Followed by concatenated records: label[code_length] vector[dimensionality].
pub const HEADER_FIXED_LEN: usize = 62;

pub const HEADER_SIZE_PAD_LEN: usize = 3;
pub const FORMAT_CODE_LEN: usize = 8;
pub const CODE_TYPE_LEN: usize = 20;
pub const LABEL_WIDTH_PAD_LEN: usize = 1;
pub const DATA_TYPE_LEN: usize = 20;

/// Vector width used when the declared dimensionality is not trusted.
pub const DEFAULT_DIMENSIONALITY: u32 = 512;

/// The one element encoding the record decoder understands.
pub const UNSIGNED_CHAR: &[u8] = b"unsigned char";
