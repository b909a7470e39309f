use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThorError>;

#[derive(Debug, Error)]
pub enum ThorError {
    #[error("invalid header: {0}")]
    HeaderInvalid(String),

    #[error("record count mismatch: header declares {declared}, decoded {decoded}")]
    CountMismatch { declared: usize, decoded: usize },

    #[error("record {record}: move byte {byte} in slot {slot} is not a board square")]
    BadMove { record: usize, slot: usize, byte: u8 },

    #[error("unexpected eof: {0}")]
    Truncated(String),

    #[error("unknown archive kind: {0}")]
    UnknownKind(String),

    #[error("notation error: {0}")]
    Notation(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
