use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("Invalid phone number format: '{0}' (expected exactly 10 digits)")]
    InvalidPhone(String),

    #[error("Invalid date format: '{0}'. Use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
