//! Property-based tests for sweep invariants
//!
//! These tests use proptest to verify critical invariants:
//! - A sweep never exceeds what is owed or what is available
//! - Outstanding amounts are never negative
//! - Arrears flag agrees with the outstanding amounts
//! - Due components reconcile exactly against the period total
//! - Allocation is deterministic

use chrono::NaiveDate;
use loan_core::{
    round_amount, AccountId, InterestRepaymentDueCommand, LoanInterestSnapshot,
    TransactionCategory,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use sweep::waterfall;
use uuid::Uuid;

/// Strategy for generating non-negative cent amounts
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000_00u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Strategy for generating a rate and a split that never exceeds it
///
/// Rates in basis points (0.01% .. 20%); the retained share is a cut of
/// the full rate and the serviced share is the exact remainder.
fn rate_split_strategy() -> impl Strategy<Value = (Decimal, Decimal, Decimal)> {
    (1i64..=2000i64)
        .prop_flat_map(|rate_bp| (Just(rate_bp), 0i64..=rate_bp))
        .prop_map(|(rate_bp, retained_bp)| {
            let rate = Decimal::new(rate_bp, 4);
            let retained = Decimal::new(retained_bp, 4);
            (rate, retained, rate - retained)
        })
}

/// Strategy for generating valid commands
fn command_strategy() -> impl Strategy<Value = InterestRepaymentDueCommand> {
    (amount_strategy(), rate_split_strategy()).prop_map(|(total, (rate, retained, serviced))| {
        InterestRepaymentDueCommand::new(
            Uuid::new_v4(),
            AccountId::new("SET-PROP"),
            AccountId::new("PRN-PROP"),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            total,
            rate,
            retained,
            serviced,
            "INTEREST REPAYMENT",
        )
        .expect("strategy only produces valid commands")
    })
}

/// Strategy for generating snapshots with non-negative balances
fn snapshot_strategy() -> impl Strategy<Value = LoanInterestSnapshot> {
    (amount_strategy(), amount_strategy(), amount_strategy()).prop_map(
        |(balance, serviced, retained)| LoanInterestSnapshot {
            settlement_balance: balance,
            serviced_interest_outstanding: serviced,
            retained_interest_outstanding: retained,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: due components reconcile against the period total
    #[test]
    fn prop_due_components_reconcile(command in command_strategy()) {
        let (retained_due, serviced_due) = waterfall::due_components(&command);

        prop_assert!(retained_due >= Decimal::ZERO);
        prop_assert!(serviced_due >= Decimal::ZERO);
        prop_assert_eq!(
            round_amount(retained_due + serviced_due),
            round_amount(command.total_interest_due())
        );
    }

    /// Property: zero total due yields zero components regardless of rates
    #[test]
    fn prop_zero_total_zero_components(split in rate_split_strategy()) {
        let (rate, retained, serviced) = split;
        let command = InterestRepaymentDueCommand::new(
            Uuid::new_v4(),
            AccountId::new("SET-PROP"),
            AccountId::new("PRN-PROP"),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            Decimal::ZERO,
            rate,
            retained,
            serviced,
            "INTEREST REPAYMENT",
        ).unwrap();

        prop_assert_eq!(
            waterfall::due_components(&command),
            (Decimal::ZERO, Decimal::ZERO)
        );
    }

    /// Property: each sweep is bounded by what is owed and what is available
    #[test]
    fn prop_sweeps_bounded(
        command in command_strategy(),
        snapshot in snapshot_strategy(),
    ) {
        let (retained_due, serviced_due) = waterfall::due_components(&command);
        let result = waterfall::allocate(&command, &snapshot).unwrap();

        let retained_owed =
            round_amount(retained_due + snapshot.retained_interest_outstanding);
        let serviced_owed =
            round_amount(serviced_due + snapshot.serviced_interest_outstanding);

        prop_assert!(result.retained_interest_swept <= retained_owed);
        prop_assert!(result.retained_interest_swept <= snapshot.settlement_balance);
        prop_assert!(result.serviced_interest_swept <= serviced_owed);
        prop_assert!(
            result.serviced_interest_swept
                <= snapshot.settlement_balance - result.retained_interest_swept
        );

        prop_assert_eq!(
            result.retained_interest_outstanding,
            round_amount(retained_owed - result.retained_interest_swept)
        );
        prop_assert_eq!(
            result.serviced_interest_outstanding,
            round_amount(serviced_owed - result.serviced_interest_swept)
        );
        prop_assert!(result.retained_interest_outstanding >= Decimal::ZERO);
        prop_assert!(result.serviced_interest_outstanding >= Decimal::ZERO);
        prop_assert!(result.remaining_settlement_balance >= Decimal::ZERO);
    }

    /// Property: arrears flag agrees with the outstanding amounts
    #[test]
    fn prop_arrears_iff_outstanding(
        command in command_strategy(),
        snapshot in snapshot_strategy(),
    ) {
        let result = waterfall::allocate(&command, &snapshot).unwrap();

        let expected = result.retained_interest_outstanding > Decimal::ZERO
            || result.serviced_interest_outstanding > Decimal::ZERO;
        prop_assert_eq!(result.is_in_arrears, expected);
    }

    /// Property: every instruction is positive and retained comes first
    #[test]
    fn prop_instructions_positive_and_ordered(
        command in command_strategy(),
        snapshot in snapshot_strategy(),
    ) {
        let result = waterfall::allocate(&command, &snapshot).unwrap();

        let mut expected = Vec::new();
        if result.retained_interest_swept > Decimal::ZERO {
            expected.push(TransactionCategory::RetainedInterest);
        }
        if result.serviced_interest_swept > Decimal::ZERO {
            expected.push(TransactionCategory::ServicedInterest);
        }

        let categories: Vec<TransactionCategory> = result
            .transactions
            .iter()
            .map(|instruction| instruction.category())
            .collect();
        prop_assert_eq!(categories, expected);

        for instruction in &result.transactions {
            prop_assert!(instruction.amount() > Decimal::ZERO);
        }
    }

    /// Property: allocation is deterministic
    #[test]
    fn prop_allocation_idempotent(
        command in command_strategy(),
        snapshot in snapshot_strategy(),
    ) {
        let first = waterfall::allocate(&command, &snapshot).unwrap();
        let second = waterfall::allocate(&command, &snapshot).unwrap();
        prop_assert_eq!(first, second);
    }
}
