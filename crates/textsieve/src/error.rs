//! Error types for textsieve.
//!
//! The extraction core has a single failure mode, [`Error::MalformedInput`],
//! which signals that a matcher handed a masker something it can never
//! produce. Everything else here belongs to the configuration and CLI layers.

use std::path::PathBuf;
use thiserror::Error;

use crate::extract::Category;

/// The main error type for textsieve operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Core Errors ===
    /// A masker received a value its matcher cannot produce.
    #[error("malformed {category} candidate '{value}': {reason}")]
    MalformedInput {
        /// Category of the offending candidate.
        category: Category,
        /// The raw candidate value.
        value: String,
        /// What made the value unmaskable.
        reason: &'static str,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Failed to read the input text.
    #[error("failed to read input {path}: {source}")]
    ReadInput {
        /// Path of the input (`-` for stdin).
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the extraction output.
    #[error("failed to write output {path}: {source}")]
    WriteOutput {
        /// Path of the output file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for textsieve operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a malformed input error for a candidate of `category`.
    #[must_use]
    pub fn malformed_input(category: Category, value: &str, reason: &'static str) -> Self {
        Self::MalformedInput {
            category,
            value: value.to_string(),
            reason,
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is a masking invariant violation.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_display() {
        let err = Error::malformed_input(Category::Email, "nobody", "missing '@'");
        assert_eq!(
            err.to_string(),
            "malformed email candidate 'nobody': missing '@'"
        );
    }

    #[test]
    fn test_is_malformed_input() {
        let err = Error::malformed_input(Category::CreditCard, "12", "fewer than 4 digits");
        assert!(err.is_malformed_input());
        assert!(!Error::config_validation("bad").is_malformed_input());
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("indent too large");
        assert_eq!(err.to_string(), "invalid configuration: indent too large");
    }

    #[test]
    fn test_read_input_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::ReadInput {
            path: PathBuf::from("/tmp/missing.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_write_output_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::WriteOutput {
            path: PathBuf::from("/root/out.json"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/out.json"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
