//! Core types for loan interest servicing
//!
//! All types are designed for:
//! - Immutability (constructed fresh per request, never mutated)
//! - Memory safety (no unsafe code)
//! - Exact arithmetic (Decimal for money)

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Round a monetary amount to currency precision (2 dp, midpoint away from zero)
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Account identifier (settlement or principal ledger account)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create new account ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check for a blank identifier
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a booked ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionDirection {
    /// Funds into the account
    Credit,
    /// Funds out of the account
    Debit,
}

/// Category tag carried by every interest-servicing ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionCategory {
    /// Retained interest swept to the principal account
    RetainedInterest,
    /// Serviced interest swept to the principal account
    ServicedInterest,
    /// Borrower payment into the settlement account
    ServicedInterestPayment,
    /// Retained interest billed for a period
    RetainedInterestAccrual,
    /// Serviced interest billed for a period
    ServicedInterestAccrual,
}

/// A booked transaction as returned by the ledger collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTransaction {
    /// Account the transaction was booked on
    pub account_id: AccountId,

    /// Booking date
    pub booking_date: NaiveDate,

    /// Unsigned amount
    pub amount: Decimal,

    /// Credit or debit
    pub direction: TransactionDirection,

    /// Interest-servicing category
    pub category: TransactionCategory,

    /// Channel the transaction was booked through
    pub transaction_channel: String,

    /// Free-text narrative, if any
    pub narrative: Option<String>,
}

impl AccountTransaction {
    /// Signed amount: credits positive, debits negative
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            TransactionDirection::Credit => self.amount,
            TransactionDirection::Debit => -self.amount,
        }
    }
}

/// Interest rate configuration for a loan, from the core banking lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanDetails {
    /// Full annual interest rate charged to the borrower
    pub interest_rate: Decimal,

    /// Portion of the rate kept by the servicer
    pub retained_rate_portion: Decimal,

    /// Portion of the rate passed through to the investor
    pub serviced_rate_portion: Decimal,
}

/// Point-in-time financial snapshot used as sweep input
///
/// Outstanding fields hold prior-period arrears not yet swept and are
/// clamped at zero; a surplus is never carried as negative debt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInterestSnapshot {
    /// Signed balance available for sweeping
    pub settlement_balance: Decimal,

    /// Serviced interest billed but not yet collected
    pub serviced_interest_outstanding: Decimal,

    /// Retained interest billed but not yet collected
    pub retained_interest_outstanding: Decimal,
}

/// A single accounting instruction produced by the sweep
///
/// Validated at construction; the amount is stored rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionInstruction {
    debit_account_id: AccountId,
    credit_account_id: AccountId,
    amount: Decimal,
    transaction_channel: String,
    category: TransactionCategory,
    narrative: String,
}

impl TransactionInstruction {
    /// Create a validated instruction
    pub fn new(
        debit_account_id: AccountId,
        credit_account_id: AccountId,
        amount: Decimal,
        transaction_channel: impl Into<String>,
        category: TransactionCategory,
        narrative: impl Into<String>,
    ) -> crate::Result<Self> {
        if debit_account_id.is_blank() {
            return Err(crate::Error::validation(
                "debit_account_id",
                "Debit account identifier must be provided.",
            ));
        }

        if credit_account_id.is_blank() {
            return Err(crate::Error::validation(
                "credit_account_id",
                "Credit account identifier must be provided.",
            ));
        }

        if amount <= Decimal::ZERO {
            return Err(crate::Error::validation(
                "amount",
                format!("Sweep amount must be greater than zero, got {}.", amount),
            ));
        }

        let transaction_channel = transaction_channel.into();
        if transaction_channel.trim().is_empty() {
            return Err(crate::Error::validation(
                "transaction_channel",
                "Transaction channel must be provided.",
            ));
        }

        let narrative = narrative.into();
        if narrative.trim().is_empty() {
            return Err(crate::Error::validation(
                "narrative",
                "Narrative must be provided.",
            ));
        }

        Ok(Self {
            debit_account_id,
            credit_account_id,
            amount: round_amount(amount),
            transaction_channel,
            category,
            narrative,
        })
    }

    /// Account debited (sweep source)
    pub fn debit_account_id(&self) -> &AccountId {
        &self.debit_account_id
    }

    /// Account credited (sweep destination)
    pub fn credit_account_id(&self) -> &AccountId {
        &self.credit_account_id
    }

    /// Amount to move, rounded to 2 dp
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Channel the movement should be booked through
    pub fn transaction_channel(&self) -> &str {
        &self.transaction_channel
    }

    /// Interest-servicing category
    pub fn category(&self) -> TransactionCategory {
        self.category
    }

    /// Human-readable narrative
    pub fn narrative(&self) -> &str {
        &self.narrative
    }
}

/// Outcome of attempting to sweep interest from the settlement account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestSweepResult {
    /// Loan the sweep was computed for
    pub loan_id: Uuid,

    /// Billing period
    pub period: NaiveDate,

    /// Serviced interest collected this sweep
    pub serviced_interest_swept: Decimal,

    /// Serviced interest still owed after the sweep
    pub serviced_interest_outstanding: Decimal,

    /// Retained interest collected this sweep
    pub retained_interest_swept: Decimal,

    /// Retained interest still owed after the sweep
    pub retained_interest_outstanding: Decimal,

    /// Settlement balance left after both legs
    pub remaining_settlement_balance: Decimal,

    /// True iff any outstanding amount is positive after the sweep
    pub is_in_arrears: bool,

    /// Money-movement instructions, retained leg first
    pub transactions: Vec<TransactionInstruction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_amount_midpoint_away_from_zero() {
        assert_eq!(round_amount(dec!(1.005)), dec!(1.01));
        assert_eq!(round_amount(dec!(-1.005)), dec!(-1.01));
        assert_eq!(round_amount(dec!(2.444)), dec!(2.44));
        assert_eq!(round_amount(dec!(2.50)), dec!(2.50));
    }

    #[test]
    fn test_signed_amount() {
        let tx = AccountTransaction {
            account_id: AccountId::new("SET-001"),
            booking_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            amount: dec!(400),
            direction: TransactionDirection::Credit,
            category: TransactionCategory::ServicedInterestPayment,
            transaction_channel: "INTEREST REPAYMENT".to_string(),
            narrative: Some("Borrower payment".to_string()),
        };
        assert_eq!(tx.signed_amount(), dec!(400));

        let tx = AccountTransaction {
            direction: TransactionDirection::Debit,
            ..tx
        };
        assert_eq!(tx.signed_amount(), dec!(-400));
    }

    #[test]
    fn test_instruction_rounds_amount() {
        let instruction = TransactionInstruction::new(
            AccountId::new("SET-001"),
            AccountId::new("PRN-001"),
            dec!(100.005),
            "INTEREST REPAYMENT",
            TransactionCategory::RetainedInterest,
            "Retained interest sweep for 2025-01",
        )
        .unwrap();

        assert_eq!(instruction.amount(), dec!(100.01));
    }

    #[test]
    fn test_instruction_rejects_non_positive_amount() {
        let result = TransactionInstruction::new(
            AccountId::new("SET-001"),
            AccountId::new("PRN-001"),
            Decimal::ZERO,
            "INTEREST REPAYMENT",
            TransactionCategory::ServicedInterest,
            "Serviced interest sweep for 2025-01",
        );

        assert!(matches!(
            result,
            Err(crate::Error::Validation { field: "amount", .. })
        ));
    }

    #[test]
    fn test_instruction_rejects_blank_accounts() {
        let result = TransactionInstruction::new(
            AccountId::new("   "),
            AccountId::new("PRN-001"),
            dec!(10),
            "INTEREST REPAYMENT",
            TransactionCategory::RetainedInterest,
            "Retained interest sweep for 2025-01",
        );

        assert!(matches!(
            result,
            Err(crate::Error::Validation {
                field: "debit_account_id",
                ..
            })
        ));
    }
}
