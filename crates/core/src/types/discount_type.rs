//! How a discount's `amount` is interpreted.

use serde::{Deserialize, Serialize};

/// Discount calculation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Percentage points off the unit price (0-100).
    Percent,
    /// Absolute currency amount off each unit.
    Fixed,
}

/// Error returned when a string is not a known [`DiscountType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid discount type: {0} (expected `percent` or `fixed`)")]
pub struct ParseDiscountTypeError(String);

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent => write!(f, "percent"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for DiscountType {
    type Err = ParseDiscountTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percent" => Ok(Self::Percent),
            "fixed" => Ok(Self::Fixed),
            _ => Err(ParseDiscountTypeError(s.to_owned())),
        }
    }
}
