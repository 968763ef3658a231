//! In-memory collaborator implementations
//!
//! Back the engine with fixed data for tests and local runs. Production
//! deployments replace these with real ledger and core banking clients.

use crate::clients::{LoanSource, TransactionLedger};
use crate::{Error, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use loan_core::{AccountId, AccountTransaction, LoanDetails};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// In-memory transaction ledger
#[derive(Debug, Default)]
pub struct MockLedger {
    transactions: HashMap<AccountId, Vec<AccountTransaction>>,
}

impl MockLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger seeded with transactions, keyed by account
    pub fn with_transactions(transactions: Vec<AccountTransaction>) -> Self {
        let mut ledger = Self::new();
        for tx in transactions {
            ledger.book(tx);
        }
        ledger
    }

    /// Book a transaction
    pub fn book(&mut self, transaction: AccountTransaction) {
        self.transactions
            .entry(transaction.account_id.clone())
            .or_default()
            .push(transaction);
    }
}

#[async_trait]
impl TransactionLedger for MockLedger {
    async fn transactions(
        &self,
        account_id: &AccountId,
        up_to_period: NaiveDate,
        transaction_channel: &str,
    ) -> Result<Vec<AccountTransaction>> {
        let matches: Vec<AccountTransaction> = self
            .transactions
            .get(account_id)
            .map(|txs| {
                txs.iter()
                    .filter(|tx| {
                        tx.booking_date <= up_to_period
                            && tx
                                .transaction_channel
                                .eq_ignore_ascii_case(transaction_channel)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        debug!(
            account = %account_id,
            channel = transaction_channel,
            count = matches.len(),
            "mock ledger query"
        );

        Ok(matches)
    }
}

/// In-memory loan configuration source
#[derive(Debug, Default)]
pub struct MockLoanSource {
    loans: HashMap<Uuid, LoanDetails>,
}

impl MockLoanSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loan's rate split
    pub fn insert(&mut self, loan_id: Uuid, details: LoanDetails) {
        self.loans.insert(loan_id, details);
    }
}

#[async_trait]
impl LoanSource for MockLoanSource {
    async fn loan_details(&self, loan_id: Uuid) -> Result<LoanDetails> {
        self.loans
            .get(&loan_id)
            .copied()
            .ok_or_else(|| Error::LoanLookup(format!("Loan not found: {}", loan_id)))
    }
}
