use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("{0}")]
    InvalidFileName(String),

    #[error("{0}")]
    InsufficientInputs(String),

    #[error("{0}")]
    InvalidName(String),

    #[error("{0}")]
    InvalidNumber(String),

    #[error("Malformed record (missing ':'): {0}")]
    MalformedRecord(String),

    #[error("Duplicate Numbers Found in the Contact List.! : {0}")]
    DuplicateStoredNumber(String),

    #[error("The Number is Already Available in the Contact List : {0}")]
    DuplicateInputNumber(String),

    #[error("Contact list not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    ImportFormatError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
