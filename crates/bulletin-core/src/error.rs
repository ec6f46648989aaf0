//! Error types for Bulletin core operations.
//!
//! Absence is not an error here: lookups return `Option`, deletions return
//! `bool`, and malformed stored data reads as an empty collection. The
//! variants below cover genuine failures (I/O, invalid arguments) that the
//! CLI layer maps to user-facing messages.

use thiserror::Error;

/// Result type alias for Bulletin operations.
pub type Result<T> = std::result::Result<T, BulletinError>;

/// Core error type for Bulletin operations.
#[derive(Debug, Error)]
pub enum BulletinError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid caller input (page number, page size, sort mode)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for BulletinError {
    fn from(err: std::io::Error) -> Self {
        BulletinError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BulletinError {
    fn from(err: serde_json::Error) -> Self {
        BulletinError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: BulletinError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, BulletinError::Storage(_)));
        assert!(err.to_string().starts_with("Storage error:"));
    }

    #[test]
    fn test_json_error_maps_to_validation() {
        let err: BulletinError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, BulletinError::Validation(_)));
    }
}
