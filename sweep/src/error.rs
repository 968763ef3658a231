//! Error types for the sweep engine

use thiserror::Error;

/// Result type for sweep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sweep errors
#[derive(Error, Debug)]
pub enum Error {
    /// Domain error (validation, invariant violation)
    #[error("Domain error: {0}")]
    Domain(#[from] loan_core::Error),

    /// Ledger collaborator failure
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// Loan configuration lookup failure
    #[error("Loan lookup error: {0}")]
    LoanLookup(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
