//! Interest repayment due command
//!
//! The validated, immutable representation of an interest-repayment-due
//! event. Construction fails on the first invalid field; downstream code
//! never defends against malformed input.

use crate::types::AccountId;
use crate::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Tolerance for the rate-portion sum invariant
const RATE_SPLIT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 7);

/// A monthly interest repayment falling due on a partially retained loan
///
/// Carries the rate split looked up from the core banking system; the
/// due amounts per component are derived by the sweep engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestRepaymentDueCommand {
    loan_id: Uuid,
    settlement_account_id: AccountId,
    principal_account_id: AccountId,
    period: NaiveDate,
    total_interest_due: Decimal,
    interest_rate: Decimal,
    retained_rate_portion: Decimal,
    serviced_rate_portion: Decimal,
    transaction_channel: String,
}

impl InterestRepaymentDueCommand {
    /// Create a validated command
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        loan_id: Uuid,
        settlement_account_id: AccountId,
        principal_account_id: AccountId,
        period: NaiveDate,
        total_interest_due: Decimal,
        interest_rate: Decimal,
        retained_rate_portion: Decimal,
        serviced_rate_portion: Decimal,
        transaction_channel: impl Into<String>,
    ) -> Result<Self> {
        if loan_id.is_nil() {
            return Err(Error::validation(
                "loan_id",
                "Loan identifier must be provided.",
            ));
        }

        if settlement_account_id.is_blank() {
            return Err(Error::validation(
                "settlement_account_id",
                "Settlement account identifier must be provided.",
            ));
        }

        if principal_account_id.is_blank() {
            return Err(Error::validation(
                "principal_account_id",
                "Principal account identifier must be provided.",
            ));
        }

        if total_interest_due < Decimal::ZERO {
            return Err(Error::validation(
                "total_interest_due",
                format!(
                    "Total interest due cannot be negative, got {}.",
                    total_interest_due
                ),
            ));
        }

        if interest_rate <= Decimal::ZERO {
            return Err(Error::validation(
                "interest_rate",
                format!("Interest rate must be positive, got {}.", interest_rate),
            ));
        }

        if retained_rate_portion < Decimal::ZERO {
            return Err(Error::validation(
                "retained_rate_portion",
                format!(
                    "Retained rate portion cannot be negative, got {}.",
                    retained_rate_portion
                ),
            ));
        }

        if serviced_rate_portion < Decimal::ZERO {
            return Err(Error::validation(
                "serviced_rate_portion",
                format!(
                    "Serviced rate portion cannot be negative, got {}.",
                    serviced_rate_portion
                ),
            ));
        }

        if retained_rate_portion + serviced_rate_portion - interest_rate > RATE_SPLIT_TOLERANCE {
            return Err(Error::validation(
                "serviced_rate_portion",
                format!(
                    "Rate portions {} + {} exceed the interest rate {}.",
                    retained_rate_portion, serviced_rate_portion, interest_rate
                ),
            ));
        }

        let transaction_channel = transaction_channel.into();
        if transaction_channel.trim().is_empty() {
            return Err(Error::validation(
                "transaction_channel",
                "Transaction channel must be provided.",
            ));
        }

        Ok(Self {
            loan_id,
            settlement_account_id,
            principal_account_id,
            period,
            total_interest_due,
            interest_rate,
            retained_rate_portion,
            serviced_rate_portion,
            transaction_channel,
        })
    }

    /// Loan identifier
    pub fn loan_id(&self) -> Uuid {
        self.loan_id
    }

    /// Settlement (collection) account
    pub fn settlement_account_id(&self) -> &AccountId {
        &self.settlement_account_id
    }

    /// Principal ledger account
    pub fn principal_account_id(&self) -> &AccountId {
        &self.principal_account_id
    }

    /// Billing period (month-granular)
    pub fn period(&self) -> NaiveDate {
        self.period
    }

    /// Total interest falling due for the period
    pub fn total_interest_due(&self) -> Decimal {
        self.total_interest_due
    }

    /// Full interest rate charged to the borrower
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Rate portion kept by the servicer
    pub fn retained_rate_portion(&self) -> Decimal {
        self.retained_rate_portion
    }

    /// Rate portion passed through to the investor
    pub fn serviced_rate_portion(&self) -> Decimal {
        self.serviced_rate_portion
    }

    /// Channel to filter and tag ledger entries with
    pub fn transaction_channel(&self) -> &str {
        &self.transaction_channel
    }
}
