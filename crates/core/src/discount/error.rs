//! Construction errors for rules and purchase contexts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Errors that can occur when constructing a [`DiscountRule`](super::DiscountRule).
///
/// These are raised once, when the rule is built from its stored record.
/// Evaluation itself never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountRuleError {
    /// The end date is not strictly after the start date.
    #[error("end date {end_date} must be after start date {start_date}")]
    InvalidWindow {
        /// Start of the eligibility window.
        start_date: DateTime<Utc>,
        /// End of the eligibility window.
        end_date: DateTime<Utc>,
    },
    /// The discount amount is negative.
    #[error("discount amount cannot be negative (got {amount})")]
    NegativeAmount {
        /// Offending amount.
        amount: Decimal,
    },
    /// A percent discount is above 100 percentage points.
    #[error("percent discount must be between 0 and 100 (got {amount})")]
    PercentOutOfRange {
        /// Offending amount.
        amount: Decimal,
    },
    /// A quantity bound is zero.
    #[error("{field} must be at least 1")]
    InvalidQuantityBound {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The minimum quantity is above the maximum quantity.
    #[error("minimum quantity {minimum} exceeds maximum quantity {maximum}")]
    QuantityBoundsInverted {
        /// Minimum quantity.
        minimum: u32,
        /// Maximum quantity.
        maximum: u32,
    },
    /// The minimum line amount is negative.
    #[error("minimum amount cannot be negative (got {amount})")]
    NegativeMinimumAmount {
        /// Offending amount.
        amount: Decimal,
    },
    /// The discount cap is negative.
    #[error("maximum discount cannot be negative (got {amount})")]
    NegativeMaximumDiscount {
        /// Offending amount.
        amount: Decimal,
    },
    /// The usage limit is zero.
    #[error("usage limit must be at least 1")]
    InvalidUsageLimit,
    /// The priority is outside 1-100.
    #[error("priority must be between {min} and {max} (got {priority})")]
    PriorityOutOfRange {
        /// Offending priority.
        priority: u8,
        /// Lowest allowed priority.
        min: u8,
        /// Highest allowed priority.
        max: u8,
    },
}

/// Errors that can occur when constructing a [`PurchaseContext`](super::PurchaseContext).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseContextError {
    /// The unit price is negative.
    #[error("unit price cannot be negative (got {0})")]
    NegativeUnitPrice(Decimal),
    /// The quantity is negative.
    #[error("quantity cannot be negative (got {0})")]
    NegativeQuantity(Decimal),
    /// `unit_price * quantity` does not fit in a `Decimal`.
    #[error("line total of {unit_price} x {quantity} is too large")]
    LineTotalOverflow {
        /// Unit price.
        unit_price: Decimal,
        /// Quantity.
        quantity: Decimal,
    },
}
