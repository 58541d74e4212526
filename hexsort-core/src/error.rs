use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexsortError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Color entry must start with '#'")]
    MissingPrefix,

    #[error("Color entry too short: {len} bytes, need at least 7")]
    LineTooShort { len: usize },
}

pub type Result<T> = std::result::Result<T, HexsortError>;
