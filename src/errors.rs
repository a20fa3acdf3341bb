//! Error handling for the churnsight scoring core
//!
//! All failure modes in this crate are programmer or configuration errors:
//! they are surfaced immediately to the caller, never retried or silently
//! recovered from.

use thiserror::Error;

/// Main error type for the churnsight crate
#[derive(Error, Debug)]
pub enum ChurnError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Label length mismatch: {actual} actual vs {predicted} predicted")]
    LengthMismatch { actual: usize, predicted: usize },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV operation failed: {context}")]
    Csv {
        context: String,
        #[source]
        source: csv::Error,
    },
}

/// Type alias for Result with ChurnError
pub type ChurnResult<T> = Result<T, ChurnError>;

impl ChurnError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with operation context
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(context: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ChurnError::config("missing weight for feature 'tenure'");
        assert!(config_err.to_string().contains("Configuration error"));

        let mismatch = ChurnError::LengthMismatch {
            actual: 3,
            predicted: 5,
        };
        assert!(mismatch.to_string().contains("3 actual vs 5 predicted"));
    }

    #[test]
    fn test_error_chaining() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let churn_err = ChurnError::io("reading customer csv", io_err);

        assert!(churn_err.source().is_some());
        assert!(churn_err.to_string().contains("I/O operation failed"));
    }
}
