//! Waterfall allocation algorithm
//!
//! Sweeps the available settlement balance against interest due, retained
//! leg before serviced leg. The ordering is a policy choice: the
//! lender-retained share is collected before the pass-through share, so
//! the investor bears shortfall risk when funds run short.
//!
//! # Algorithm
//!
//! 1. Split the period's total due across the rate portions
//! 2. Retained leg: sweep `min(owed, balance)`, deduct from the balance
//! 3. Serviced leg: same against the remaining balance
//! 4. Arrears iff either component still has outstanding interest
//!
//! Every accumulation step re-rounds to currency precision so booked and
//! displayed amounts never drift.
//!
//! # Example
//!
//! ```text
//! Balance 500, total due 350 at 7% (2% retained / 5% serviced):
//!
//!   base         = 350 / 0.07 = 5000
//!   retained due = 5000 * 0.02 = 100
//!   serviced due = 5000 * 0.05 = 250
//!
//!   retained leg: sweep 100, balance 500 -> 400
//!   serviced leg: sweep 250, balance 400 -> 150
//!
//! Result: no arrears, two instructions (retained 100, then serviced 250)
//! ```

use crate::Result;
use loan_core::{
    round_amount, InterestRepaymentDueCommand, InterestSweepResult, LoanInterestSnapshot,
    TransactionCategory, TransactionInstruction,
};
use rust_decimal::Decimal;

/// Split the period's total interest due into retained and serviced components
///
/// A zero total yields zero components regardless of the rate split.
/// Rounding drift between the components and the total is reconciled by
/// adding the entire remainder to the serviced side; retained never
/// absorbs slack.
pub fn due_components(command: &InterestRepaymentDueCommand) -> (Decimal, Decimal) {
    if command.total_interest_due().is_zero() {
        return (Decimal::ZERO, Decimal::ZERO);
    }

    let base = command.total_interest_due() / command.interest_rate();

    let retained_due = round_amount(base * command.retained_rate_portion());
    let mut serviced_due = round_amount(base * command.serviced_rate_portion());

    let total_computed = round_amount(retained_due + serviced_due);
    let remainder = round_amount(command.total_interest_due() - total_computed);

    if !remainder.is_zero() {
        serviced_due = round_amount(serviced_due + remainder);
    }

    (retained_due, serviced_due)
}

/// Allocate the settlement balance across both interest legs
///
/// Pure function of the command and snapshot: calling it twice with the
/// same inputs yields identical results.
pub fn allocate(
    command: &InterestRepaymentDueCommand,
    snapshot: &LoanInterestSnapshot,
) -> Result<InterestSweepResult> {
    // Aggregation clamps outstanding at zero; a negative value here is a
    // programming defect, not bad input
    if snapshot.retained_interest_outstanding < Decimal::ZERO
        || snapshot.serviced_interest_outstanding < Decimal::ZERO
    {
        return Err(loan_core::Error::InvariantViolation(format!(
            "Negative outstanding interest in snapshot for loan {}",
            command.loan_id()
        ))
        .into());
    }

    let (retained_due, serviced_due) = due_components(command);

    let mut transactions = Vec::new();
    let mut settlement_balance = snapshot.settlement_balance;

    let total_retained_owed = round_amount(retained_due + snapshot.retained_interest_outstanding);
    let retained_sweep = total_retained_owed.min(settlement_balance);
    settlement_balance = round_amount(settlement_balance - retained_sweep);
    let retained_outstanding = round_amount(total_retained_owed - retained_sweep);

    if retained_sweep > Decimal::ZERO {
        transactions.push(TransactionInstruction::new(
            command.settlement_account_id().clone(),
            command.principal_account_id().clone(),
            retained_sweep,
            command.transaction_channel(),
            TransactionCategory::RetainedInterest,
            format!(
                "Retained interest sweep for {}",
                command.period().format("%Y-%m")
            ),
        )?);
    }

    let total_serviced_owed = round_amount(serviced_due + snapshot.serviced_interest_outstanding);
    let serviced_sweep = total_serviced_owed.min(settlement_balance);
    settlement_balance = round_amount(settlement_balance - serviced_sweep);
    let serviced_outstanding = round_amount(total_serviced_owed - serviced_sweep);

    if serviced_sweep > Decimal::ZERO {
        transactions.push(TransactionInstruction::new(
            command.settlement_account_id().clone(),
            command.principal_account_id().clone(),
            serviced_sweep,
            command.transaction_channel(),
            TransactionCategory::ServicedInterest,
            format!(
                "Serviced interest sweep for {}",
                command.period().format("%Y-%m")
            ),
        )?);
    }

    Ok(InterestSweepResult {
        loan_id: command.loan_id(),
        period: command.period(),
        serviced_interest_swept: serviced_sweep,
        serviced_interest_outstanding: serviced_outstanding,
        retained_interest_swept: retained_sweep,
        retained_interest_outstanding: retained_outstanding,
        remaining_settlement_balance: settlement_balance,
        is_in_arrears: serviced_outstanding > Decimal::ZERO
            || retained_outstanding > Decimal::ZERO,
        transactions,
    })
}
