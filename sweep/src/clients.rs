//! Collaborator interfaces
//!
//! The engine reads from two external systems: the transaction ledger
//! (account history) and the core banking system (loan rate
//! configuration). Both are injected as trait objects; retry and backoff,
//! if any, live behind these seams.

use crate::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use loan_core::{AccountId, AccountTransaction, LoanDetails};
use uuid::Uuid;

/// Read-only transaction history lookup
///
/// Implementations must filter to transactions booked at or before
/// `up_to_period` on a case-insensitively matching channel. An empty
/// result is not an error.
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    /// Fetch transactions for an account up to and including a period
    async fn transactions(
        &self,
        account_id: &AccountId,
        up_to_period: NaiveDate,
        transaction_channel: &str,
    ) -> Result<Vec<AccountTransaction>>;
}

/// Loan interest configuration lookup
#[async_trait]
pub trait LoanSource: Send + Sync {
    /// Fetch the rate split for a loan
    async fn loan_details(&self, loan_id: Uuid) -> Result<LoanDetails>;
}
