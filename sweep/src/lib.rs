//! Interest Sweep Engine
//!
//! Computes how a loan's monthly interest obligation is satisfied from the
//! settlement account and allocated between the retained and serviced
//! components, producing the accounting instructions needed to move money
//! and the residual arrears, if any.
//!
//! # Architecture
//!
//! One repayment-due event flows through three steps:
//!
//! 1. **Snapshot**: aggregate the settlement balance and outstanding
//!    interest from the ledger collaborator
//! 2. **Allocation**: sweep available funds against amounts due,
//!    retained leg before serviced leg
//! 3. **Result**: swept/outstanding amounts, arrears flag, and the
//!    ordered money-movement instructions
//!
//! The engine is stateless: each request builds its command, snapshot and
//! result fresh, so requests are safely processed on separate tasks
//! without coordination.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use loan_core::{AccountId, InterestRepaymentDueCommand};
//! use rust_decimal::Decimal;
//! use sweep::{Config, MockLedger, MockLoanSource, SweepEngine};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> sweep::Result<()> {
//!     let engine = SweepEngine::new(
//!         Config::default(),
//!         Arc::new(MockLedger::new()),
//!         Arc::new(MockLoanSource::new()),
//!     );
//!
//!     let command = InterestRepaymentDueCommand::new(
//!         Uuid::new_v4(),
//!         AccountId::new("SET-001"),
//!         AccountId::new("PRN-001"),
//!         NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
//!         Decimal::new(35000, 2), // 350.00 due
//!         Decimal::new(7, 2),     // 7% rate
//!         Decimal::new(2, 2),     // 2% retained
//!         Decimal::new(5, 2),     // 5% serviced
//!         "INTEREST REPAYMENT",
//!     )?;
//!
//!     let result = engine.calculate_sweep(&command).await?;
//!     println!(
//!         "Swept retained {} serviced {}, arrears: {}",
//!         result.retained_interest_swept,
//!         result.serviced_interest_swept,
//!         result.is_in_arrears
//!     );
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod clients;
pub mod config;
pub mod engine;
pub mod error;
pub mod mock;
pub mod snapshot;
pub mod waterfall;

// Re-exports
pub use clients::{LoanSource, TransactionLedger};
pub use config::Config;
pub use engine::{RepaymentDueNotice, SweepEngine};
pub use error::{Error, Result};
pub use mock::{MockLedger, MockLoanSource};
pub use snapshot::SnapshotProvider;
