//! Error types for the contact directory library.
//!
//! Only `update` on an unknown id produces a domain error; every other
//! variant wraps a failure from the storage, encoding or filesystem layer and
//! is passed through to the caller unchanged.

use thiserror::Error;

/// Errors that can occur in the contact directory.
#[derive(Error, Debug)]
pub enum ContactError {
    /// No contact with the given id exists
    #[error("No contact found for {0}")]
    NotFound(String),

    /// Embedded key-value store errors
    #[error("Storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Binary encoding of the stored collection failed
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// General error with context
    #[error("{0}")]
    Other(String),
}

impl ContactError {
    /// True when the error signals a missing contact rather than a storage failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Convenience type alias for Result with `ContactError`
pub type Result<T> = std::result::Result<T, ContactError>;

impl From<anyhow::Error> for ContactError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ContactError::NotFound("abc1234".to_string());
        assert_eq!(err.to_string(), "No contact found for abc1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: ContactError = anyhow::anyhow!("disk full").into();
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "disk full");
    }
}
