use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordforgeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl From<dialoguer::Error> for WordforgeError {
    fn from(error: dialoguer::Error) -> Self {
        match error {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                WordforgeError::Cancelled
            }
            dialoguer::Error::IO(e) => WordforgeError::InputError(e.to_string()),
        }
    }
}

pub type WordforgeResult<T> = std::result::Result<T, WordforgeError>;
