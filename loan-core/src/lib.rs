//! Loan Servicing Core
//!
//! Domain types for loan interest servicing on partially retained loans.
//!
//! # Architecture
//!
//! - **Immutable values**: every type is constructed fresh per request
//! - **Validated construction**: no partially-valid value ever exists
//! - **Exact arithmetic**: Decimal for money, 2 dp away-from-zero rounding
//!
//! # Invariants
//!
//! - Outstanding interest is never negative (clamped at aggregation)
//! - Every emitted instruction carries a strictly positive amount
//! - Instructions are ordered retained-then-serviced

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod command;
pub mod error;
pub mod types;

// Re-exports
pub use command::InterestRepaymentDueCommand;
pub use error::{Error, Result};
pub use types::{
    round_amount, AccountId, AccountTransaction, InterestSweepResult, LoanDetails,
    LoanInterestSnapshot, TransactionCategory, TransactionDirection, TransactionInstruction,
};
