//! Error types for image I/O.

use thiserror::Error;

/// Error type for image decode/encode operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The image could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// The file extension or pixel layout is not supported.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for image I/O operations.
pub type IoResult<T> = Result<T, IoError>;
