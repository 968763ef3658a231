//! Main sweep engine
//!
//! Orchestrates loan configuration lookup, snapshot aggregation, and the
//! waterfall allocation.

use crate::{
    clients::{LoanSource, TransactionLedger},
    config::Config,
    snapshot::SnapshotProvider,
    waterfall, Result,
};
use chrono::NaiveDate;
use loan_core::{AccountId, InterestRepaymentDueCommand, InterestSweepResult, LoanDetails};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Raw interest-repayment-due event as delivered by the transport
///
/// Carries no rate split; the loan's configuration is looked up before
/// the validated command is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentDueNotice {
    /// Loan the repayment fell due on
    pub loan_id: Uuid,

    /// Settlement (collection) account
    pub settlement_account_id: String,

    /// Principal ledger account
    pub principal_account_id: String,

    /// Billing period
    pub period: NaiveDate,

    /// Total interest due for the period
    pub total_interest_due: Decimal,

    /// Channel override; the configured default applies when absent
    #[serde(default)]
    pub transaction_channel: Option<String>,
}

impl RepaymentDueNotice {
    /// Assemble the validated command from this notice and a loan's rate split
    pub fn into_command(
        self,
        loan: &LoanDetails,
        default_channel: &str,
    ) -> loan_core::Result<InterestRepaymentDueCommand> {
        let channel = self
            .transaction_channel
            .unwrap_or_else(|| default_channel.to_string());

        InterestRepaymentDueCommand::new(
            self.loan_id,
            AccountId::new(self.settlement_account_id),
            AccountId::new(self.principal_account_id),
            self.period,
            self.total_interest_due,
            loan.interest_rate,
            loan.retained_rate_portion,
            loan.serviced_rate_portion,
            channel,
        )
    }
}

/// Sweep engine
pub struct SweepEngine {
    /// Snapshot aggregator over the ledger collaborator
    snapshots: SnapshotProvider,

    /// Loan configuration lookup
    loans: Arc<dyn LoanSource>,

    /// Configuration
    config: Config,
}

impl SweepEngine {
    /// Create new sweep engine
    pub fn new(
        config: Config,
        ledger: Arc<dyn TransactionLedger>,
        loans: Arc<dyn LoanSource>,
    ) -> Self {
        Self {
            snapshots: SnapshotProvider::new(ledger),
            loans,
            config,
        }
    }

    /// Compute the sweep for a validated command
    ///
    /// Fails only with validation errors carried by instruction
    /// construction or whatever the ledger collaborator raises; never
    /// silently.
    pub async fn calculate_sweep(
        &self,
        command: &InterestRepaymentDueCommand,
    ) -> Result<InterestSweepResult> {
        let snapshot = self.snapshots.snapshot(command).await?;
        let result = waterfall::allocate(command, &snapshot)?;

        tracing::info!(
            loan = %result.loan_id,
            period = %result.period.format("%Y-%m"),
            retained_swept = %result.retained_interest_swept,
            serviced_swept = %result.serviced_interest_swept,
            remaining_balance = %result.remaining_settlement_balance,
            in_arrears = result.is_in_arrears,
            "computed interest sweep"
        );

        Ok(result)
    }

    /// Process a raw repayment-due notice end to end
    ///
    /// Looks up the loan's rate split, assembles the validated command,
    /// and computes the sweep.
    pub async fn handle_repayment_due(
        &self,
        notice: RepaymentDueNotice,
    ) -> Result<InterestSweepResult> {
        let loan = self.loans.loan_details(notice.loan_id).await?;
        let command = notice.into_command(&loan, &self.config.default_transaction_channel)?;
        self.calculate_sweep(&command).await
    }
}
