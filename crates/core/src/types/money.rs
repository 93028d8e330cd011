//! Monetary rounding.
//!
//! All amounts are `Decimal` in the currency's standard unit (dollars, not
//! cents). Intermediate results keep full precision; only values handed back
//! to callers are rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on monetary results.
pub const MONEY_SCALE: u32 = 2;

/// Round a monetary value to two decimal places, half away from zero.
///
/// ```
/// use discount_engine_core::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2)); // 1.005 -> 1.01
/// assert_eq!(round_money(Decimal::new(-1005, 3)), Decimal::new(-101, 2));
/// ```
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_midpoint_away_from_zero() {
        assert_eq!(round_money(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_money(Decimal::new(-12345, 3)), Decimal::new(-1235, 2));
    }

    #[test]
    fn test_rounds_below_midpoint_down() {
        assert_eq!(round_money(Decimal::new(12344, 3)), Decimal::new(1234, 2));
    }

    #[test]
    fn test_keeps_short_values_unchanged() {
        assert_eq!(round_money(Decimal::TEN), Decimal::TEN);
        assert_eq!(round_money(Decimal::new(15, 1)), Decimal::new(15, 1));
    }
}
