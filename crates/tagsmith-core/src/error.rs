use thiserror::Error;

/// Core error type shared across tagsmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A type description could not be decoded.
    #[error("invalid type description: {0}")]
    InvalidDescription(String),
}

/// Convenience alias for results returned by tagsmith crates.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidDescription(err.to_string())
    }
}
