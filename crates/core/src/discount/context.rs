//! The purchase line a discount is evaluated against.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::PurchaseContextError;

/// Unit price and quantity of one order line.
///
/// Quantity is a decimal because weight-based items are sold in fractional
/// amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseContext {
    unit_price: Decimal,
    quantity: Decimal,
    #[serde(skip)]
    line_total: Decimal,
}

impl PurchaseContext {
    /// Create a purchase context.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit_price` or `quantity` is negative, or if their
    /// product does not fit in a `Decimal`.
    pub fn new(unit_price: Decimal, quantity: Decimal) -> Result<Self, PurchaseContextError> {
        if unit_price < Decimal::ZERO {
            return Err(PurchaseContextError::NegativeUnitPrice(unit_price));
        }
        if quantity < Decimal::ZERO {
            return Err(PurchaseContextError::NegativeQuantity(quantity));
        }
        let line_total = unit_price
            .checked_mul(quantity)
            .ok_or(PurchaseContextError::LineTotalOverflow {
                unit_price,
                quantity,
            })?;
        Ok(Self {
            unit_price,
            quantity,
            line_total,
        })
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Pre-discount line total, unrounded.
    #[must_use]
    pub const fn line_total(&self) -> Decimal {
        self.line_total
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let ctx = PurchaseContext::new(Decimal::new(1999, 2), Decimal::new(3, 0)).unwrap();
        assert_eq!(ctx.line_total(), Decimal::new(5997, 2));
    }

    #[test]
    fn test_fractional_quantity() {
        let ctx = PurchaseContext::new(Decimal::new(800, 2), Decimal::new(125, 2)).unwrap();
        assert_eq!(ctx.line_total(), Decimal::new(10, 0));
    }

    #[test]
    fn test_zero_values_allowed() {
        assert!(PurchaseContext::new(Decimal::ZERO, Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(matches!(
            PurchaseContext::new(Decimal::NEGATIVE_ONE, Decimal::ONE),
            Err(PurchaseContextError::NegativeUnitPrice(_))
        ));
        assert!(matches!(
            PurchaseContext::new(Decimal::ONE, Decimal::NEGATIVE_ONE),
            Err(PurchaseContextError::NegativeQuantity(_))
        ));
    }

    #[test]
    fn test_line_total_overflow_rejected() {
        assert!(matches!(
            PurchaseContext::new(Decimal::MAX, Decimal::TWO),
            Err(PurchaseContextError::LineTotalOverflow { .. })
        ));
        assert!(PurchaseContext::new(Decimal::MAX, Decimal::ONE).is_ok());
        assert!(PurchaseContext::new(Decimal::MAX, Decimal::ZERO).is_ok());
    }
}
