//! One-pass aggregation of flat transaction and balance data.

use serde::{Deserialize, Serialize};

use crate::types::TxKind;

/// Aggregate totals for reporting. Transfer legs count as deposits and
/// withdrawals respectively.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_deposits_cents: i64,
    pub total_withdrawals_cents: i64,
    pub total_fees_cents: i64,
    pub total_interest_cents: i64,
    /// Sum of all current balances.
    pub net_exposure_cents: i64,
}

/// Aggregate parallel transaction slices (kinds, amounts) and a balance
/// slice in a single pass. Pure; mutates nothing.
pub fn summarize(kinds: &[TxKind], amounts_cents: &[i64], balances_cents: &[i64]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();

    for (kind, amount) in kinds.iter().zip(amounts_cents) {
        match kind {
            TxKind::Deposit | TxKind::TransferIn => summary.total_deposits_cents += amount,
            TxKind::Withdrawal | TxKind::TransferOut => summary.total_withdrawals_cents += amount,
            TxKind::Fee => summary.total_fees_cents += amount,
            TxKind::Interest => summary.total_interest_cents += amount,
        }
    }
    summary.net_exposure_cents = balances_cents.iter().sum();

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_zero_totals() {
        assert_eq!(summarize(&[], &[], &[]), LedgerSummary::default());
    }

    #[test]
    fn aggregates_by_kind_in_one_pass() {
        let kinds = [
            TxKind::Deposit,
            TxKind::TransferIn,
            TxKind::Withdrawal,
            TxKind::TransferOut,
            TxKind::Fee,
            TxKind::Interest,
        ];
        let amounts = [100_000, 30_000, 25_000, 30_000, 1_500, 2_123];
        let balances = [73_500, 470_000];

        let summary = summarize(&kinds, &amounts, &balances);
        assert_eq!(summary.total_deposits_cents, 130_000);
        assert_eq!(summary.total_withdrawals_cents, 55_000);
        assert_eq!(summary.total_fees_cents, 1_500);
        assert_eq!(summary.total_interest_cents, 2_123);
        assert_eq!(summary.net_exposure_cents, 543_500);
    }

    #[test]
    fn extra_amounts_past_shortest_slice_are_ignored() {
        let summary = summarize(&[TxKind::Deposit], &[500, 900], &[]);
        assert_eq!(summary.total_deposits_cents, 500);
    }
}
