//! Custom error types for movedit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for movedit operations
#[derive(Error, Debug)]
pub enum MovError {
    /// A line or field is malformed (length, tag, non-digit numeric content)
    #[error("Format error: {0}")]
    Format(String),

    /// A cross-record invariant or batch input is invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// A movement index outside the current range
    #[error("Movement index {index} out of range (file has {len} movements)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MovError {
    /// Create a format error for a field that does not hold the expected content
    pub fn field(field: &str, message: impl std::fmt::Display) -> Self {
        Self::Format(format!("{}: {}", field, message))
    }

    /// Prefix a format or validation error with the 1-based line it came from
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Format(msg) => Self::Format(format!("line {}: {}", line, msg)),
            Self::Validation(msg) => Self::Validation(format!("line {}: {}", line, msg)),
            other => other,
        }
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range index error
    pub fn is_index(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl From<std::io::Error> for MovError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MovError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for movedit operations
pub type MovResult<T> = Result<T, MovError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MovError::Validation("trailer count mismatch".into());
        assert_eq!(err.to_string(), "Validation error: trailer count mismatch");
    }

    #[test]
    fn test_index_error() {
        let err = MovError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Movement index 7 out of range (file has 3 movements)"
        );
        assert!(err.is_index());
    }

    #[test]
    fn test_at_line() {
        let err = MovError::field("installments", "expected digits").at_line(4);
        assert_eq!(
            err.to_string(),
            "Format error: line 4: installments: expected digits"
        );
        assert!(err.is_format());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MovError = io_err.into();
        assert!(matches!(err, MovError::Io(_)));
    }
}
