//! Month-over-month deltas and money rounding.

use rust_decimal::{Decimal, RoundingStrategy};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Percent change between a current and previous value.
///
/// Both zero yields 0. A previous of zero with a nonzero current is treated
/// as a full positive swing (100), never a division by zero. Otherwise
/// `(current - previous) / |previous| * 100`.
#[must_use]
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        if current.is_zero() {
            Decimal::ZERO
        } else {
            HUNDRED
        }
    } else {
        (current - previous) / previous.abs() * HUNDRED
    }
}

/// Half-up rounding to `decimals` places.
///
/// Midpoints round away from zero, so `1.005` becomes `1.01`. `Decimal`
/// carries exact scale, which is the whole reason money never touches a
/// binary float in this codebase.
#[must_use]
pub fn round_dp(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount to 2 decimal places, half-up.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_dp(value, 2)
}
