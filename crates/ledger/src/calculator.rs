//! Pure balance arithmetic over integer cents.
//!
//! No side effects and no error returns; inputs are trusted.

pub fn deposit(balance_cents: i64, amount_cents: i64) -> i64 {
    balance_cents + amount_cents
}

pub fn withdrawal(balance_cents: i64, amount_cents: i64) -> i64 {
    balance_cents - amount_cents
}

pub fn fee(balance_cents: i64, fee_cents: i64) -> i64 {
    balance_cents - fee_cents
}

/// Balance after simple interest: `balance + balance * apr * days / basis`.
///
/// Rounding is add-0.5-then-truncate-toward-zero (round half up for
/// non-negative products). `basis` is caller-supplied (360 or 365 in
/// practice) and must be non-zero.
pub fn interest(balance_cents: i64, apr: f64, days: i32, basis: i32) -> i64 {
    debug_assert!(basis != 0, "interest basis must be non-zero");
    let accrued = balance_cents as f64 * apr * f64::from(days) / f64::from(basis);
    balance_cents + (accrued + 0.5) as i64
}
