//! Error types for the loan servicing domain

use thiserror::Error;

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Domain errors
#[derive(Error, Debug)]
pub enum Error {
    /// A field failed validation at construction
    #[error("Validation failed for {field}: {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },

    /// Invariant violation (negative outstanding reaching the engine, etc.)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Validation error for a named field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }
}
