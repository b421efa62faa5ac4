//! Property-based tests for delta and rounding utilities.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::delta::{percent_change, round_money};

proptest! {
    /// Rounding is idempotent and never produces more than two decimals.
    #[test]
    fn test_round_money_scale_and_idempotence(cents in -1_000_000_000i64..1_000_000_000i64) {
        let value = Decimal::new(cents, 4);
        let rounded = round_money(value);

        prop_assert!(rounded.scale() <= 2);
        prop_assert_eq!(round_money(rounded), rounded);
    }

    /// The rounded value is never more than half a cent away from the input.
    #[test]
    fn test_round_money_error_bound(cents in -1_000_000_000i64..1_000_000_000i64) {
        let value = Decimal::new(cents, 4);
        let rounded = round_money(value);
        let half_cent = Decimal::new(5, 3);

        prop_assert!((rounded - value).abs() <= half_cent);
    }

    /// Equal current and previous always yields a zero change.
    #[test]
    fn test_percent_change_identity(units in -1_000_000i64..1_000_000i64) {
        let v = Decimal::new(units, 2);
        prop_assert_eq!(percent_change(v, v), Decimal::ZERO);
    }

    /// A nonzero current against a zero previous is always the full swing.
    #[test]
    fn test_percent_change_from_zero_is_full_swing(units in 1i64..1_000_000i64) {
        let v = Decimal::new(units, 2);
        prop_assert_eq!(percent_change(v, Decimal::ZERO), Decimal::ONE_HUNDRED);
        prop_assert_eq!(percent_change(-v, Decimal::ZERO), Decimal::ONE_HUNDRED);
    }
}
