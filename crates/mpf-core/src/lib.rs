pub mod error;
pub mod format;
pub mod reader;

pub mod decoder;
pub mod header;
pub mod options;
pub mod record;
pub mod render;
pub mod text;

pub use crate::decoder::{decode_all, Decoder};
pub use crate::error::{MpfError, Result};
pub use crate::header::HeaderInfo;
pub use crate::options::{DecodeOptions, DimensionPolicy, TextPolicy};
pub use crate::record::{Record, RecordLayout, RecordStream};
