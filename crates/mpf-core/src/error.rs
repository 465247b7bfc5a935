use thiserror::Error;

pub type Result<T> = std::result::Result<T, MpfError>;

/// Which part of a record was being read when the stream ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPart {
    Label,
    Vector,
}

impl std::fmt::Display for RecordPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordPart::Label => f.write_str("label"),
            RecordPart::Vector => f.write_str("vector"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MpfError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected eof reading header field {field}")]
    UnexpectedEof { field: &'static str },

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("unsupported data type '{0}'")]
    UnsupportedDataType(String),

    #[error("truncated record {index}: {part} needs {expected} bytes, got {got}")]
    TruncatedRecord {
        index: u64,
        part: RecordPart,
        expected: usize,
        got: usize,
    },

    #[error("header field {field} is not valid utf-8")]
    InvalidText { field: &'static str },
}
