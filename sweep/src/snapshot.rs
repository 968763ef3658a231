//! Snapshot aggregation
//!
//! Projects raw account history into the compact financial snapshot the
//! sweep needs: the available settlement balance and the interest billed
//! but not yet collected on each component. Read-only; performs no writes.

use crate::clients::TransactionLedger;
use crate::Result;
use loan_core::{
    round_amount, AccountTransaction, InterestRepaymentDueCommand, LoanInterestSnapshot,
    TransactionCategory,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// Builds a [`LoanInterestSnapshot`] from the ledger collaborator
pub struct SnapshotProvider {
    ledger: Arc<dyn TransactionLedger>,
}

impl SnapshotProvider {
    /// Create a provider over a ledger client
    pub fn new(ledger: Arc<dyn TransactionLedger>) -> Self {
        Self { ledger }
    }

    /// Aggregate the snapshot for a command
    ///
    /// The settlement-account and principal-account queries carry no
    /// ordering dependency, so they are issued concurrently; either
    /// failure aborts the aggregation. An account with no matching
    /// transactions contributes zero sums.
    pub async fn snapshot(
        &self,
        command: &InterestRepaymentDueCommand,
    ) -> Result<LoanInterestSnapshot> {
        let (settlement_transactions, principal_transactions) = tokio::try_join!(
            self.ledger.transactions(
                command.settlement_account_id(),
                command.period(),
                command.transaction_channel(),
            ),
            self.ledger.transactions(
                command.principal_account_id(),
                command.period(),
                command.transaction_channel(),
            ),
        )?;

        let settlement_balance = sum_signed(&settlement_transactions);

        let retained_accrued = sum_by_category(
            &principal_transactions,
            TransactionCategory::RetainedInterestAccrual,
        );
        let retained_swept = sum_by_category(
            &principal_transactions,
            TransactionCategory::RetainedInterest,
        );
        let retained_outstanding = Decimal::ZERO.max(retained_accrued - retained_swept);

        let serviced_accrued = sum_by_category(
            &principal_transactions,
            TransactionCategory::ServicedInterestAccrual,
        );
        let serviced_swept = sum_by_category(
            &principal_transactions,
            TransactionCategory::ServicedInterest,
        );
        let serviced_outstanding = Decimal::ZERO.max(serviced_accrued - serviced_swept);

        debug!(
            loan = %command.loan_id(),
            settlement_balance = %settlement_balance,
            retained_outstanding = %retained_outstanding,
            serviced_outstanding = %serviced_outstanding,
            "aggregated snapshot"
        );

        Ok(LoanInterestSnapshot {
            settlement_balance: round_amount(settlement_balance),
            serviced_interest_outstanding: round_amount(serviced_outstanding),
            retained_interest_outstanding: round_amount(retained_outstanding),
        })
    }
}

/// Sum of signed amounts, each rounded to currency precision first
fn sum_signed(transactions: &[AccountTransaction]) -> Decimal {
    transactions
        .iter()
        .map(|tx| round_amount(tx.signed_amount()))
        .sum()
}

/// Category-filtered sum of signed amounts, rounded per transaction
fn sum_by_category(transactions: &[AccountTransaction], category: TransactionCategory) -> Decimal {
    transactions
        .iter()
        .filter(|tx| tx.category == category)
        .map(|tx| round_amount(tx.signed_amount()))
        .sum()
}
