//! Stored shape of a discount.
//!
//! A [`DiscountRecord`] is what the catalog persists and what arrives over
//! the wire. It carries no guarantees; converting it into a
//! [`DiscountRule`](super::DiscountRule) runs every construction check.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{DiscountType, ProductId};

/// Opaque extension data attached to a discount.
///
/// The evaluator never inspects it.
pub type Conditions = serde_json::Map<String, serde_json::Value>;

/// Raw discount record as stored by the catalog.
///
/// Unknown keys are rejected, so a misspelled bound fails to load instead of
/// silently leaving the discount unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscountRecord {
    /// Product the discount targets.
    pub product_id: ProductId,
    /// How `amount` is interpreted.
    pub discount_type: DiscountType,
    /// Percentage points or currency amount per unit.
    pub amount: Decimal,
    /// Start of the eligibility window (exclusive).
    pub start_date: DateTime<Utc>,
    /// End of the eligibility window (exclusive).
    pub end_date: DateTime<Utc>,
    /// Administrative on/off switch.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// Inclusive lower bound on purchased quantity.
    #[serde(default)]
    pub minimum_quantity: Option<u32>,
    /// Inclusive upper bound on purchased quantity.
    #[serde(default)]
    pub maximum_quantity: Option<u32>,
    /// Minimum pre-discount line total.
    #[serde(default)]
    pub minimum_amount: Option<Decimal>,
    /// Cap on the computed discount.
    #[serde(default)]
    pub maximum_discount: Option<Decimal>,
    /// Lifetime redemption cap.
    #[serde(default)]
    pub usage_limit: Option<u32>,
    /// Redemptions so far.
    #[serde(default)]
    pub used_count: u32,
    /// Restrict to a customer's first order.
    #[serde(default)]
    pub is_first_time_only: bool,
    /// Whether the discount may combine with others.
    #[serde(default)]
    pub is_cumulative: bool,
    /// Ordering hint for multi-discount resolution (1-100).
    #[serde(default = "default_priority")]
    pub priority: u8,
    /// Opaque extension data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
}

const fn default_is_active() -> bool {
    true
}

const fn default_priority() -> u8 {
    1
}
