//! Validated discount rule.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DiscountRuleError;
use super::record::{Conditions, DiscountRecord};
use crate::types::{DiscountType, ProductId};

/// Lowest allowed rule priority.
pub const MIN_PRIORITY: u8 = 1;

/// Highest allowed rule priority.
pub const MAX_PRIORITY: u8 = 100;

/// The terms of one product discount and its current usage counter.
///
/// A `DiscountRule` can only be obtained through [`DiscountRule::builder`] or
/// by converting a [`DiscountRecord`], both of which enforce:
///
/// - `end_date` is strictly after `start_date`
/// - `amount` is non-negative, and at most 100 for [`DiscountType::Percent`]
/// - quantity bounds and the usage limit are at least 1
/// - `minimum_quantity <= maximum_quantity` when both are set
/// - `minimum_amount` and `maximum_discount` are non-negative
/// - `priority` is within 1-100
///
/// `used_count` may exceed `usage_limit`; that only makes the rule
/// ineligible.
///
/// ## Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use discount_engine_core::{DiscountRule, DiscountType, ProductId};
/// use rust_decimal::Decimal;
///
/// let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
///
/// let rule = DiscountRule::builder(ProductId::new(1), DiscountType::Percent, Decimal::TEN, start, end)
///     .maximum_discount(Decimal::new(2500, 2))
///     .build();
/// assert!(rule.is_ok());
///
/// // An empty window is rejected.
/// let rule = DiscountRule::builder(ProductId::new(1), DiscountType::Fixed, Decimal::ONE, end, end).build();
/// assert!(rule.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DiscountRecord", into = "DiscountRecord")]
pub struct DiscountRule(DiscountRecord);

impl DiscountRule {
    /// Start building a rule from its required terms.
    ///
    /// Optional terms default to: active, no quantity or amount bounds, no
    /// cap, unlimited usage, priority 1.
    #[must_use]
    pub fn builder(
        product_id: ProductId,
        discount_type: DiscountType,
        amount: Decimal,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> DiscountRuleBuilder {
        DiscountRuleBuilder {
            record: DiscountRecord {
                product_id,
                discount_type,
                amount,
                start_date,
                end_date,
                is_active: true,
                minimum_quantity: None,
                maximum_quantity: None,
                minimum_amount: None,
                maximum_discount: None,
                usage_limit: None,
                used_count: 0,
                is_first_time_only: false,
                is_cumulative: false,
                priority: MIN_PRIORITY,
                conditions: None,
            },
        }
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.0.product_id
    }

    #[must_use]
    pub const fn discount_type(&self) -> DiscountType {
        self.0.discount_type
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0.amount
    }

    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.0.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.0.end_date
    }

    /// The administrative on/off switch, independent of the time window.
    #[must_use]
    pub const fn is_active_flag(&self) -> bool {
        self.0.is_active
    }

    #[must_use]
    pub const fn minimum_quantity(&self) -> Option<u32> {
        self.0.minimum_quantity
    }

    #[must_use]
    pub const fn maximum_quantity(&self) -> Option<u32> {
        self.0.maximum_quantity
    }

    #[must_use]
    pub const fn minimum_amount(&self) -> Option<Decimal> {
        self.0.minimum_amount
    }

    #[must_use]
    pub const fn maximum_discount(&self) -> Option<Decimal> {
        self.0.maximum_discount
    }

    #[must_use]
    pub const fn usage_limit(&self) -> Option<u32> {
        self.0.usage_limit
    }

    #[must_use]
    pub const fn used_count(&self) -> u32 {
        self.0.used_count
    }

    #[must_use]
    pub const fn is_first_time_only(&self) -> bool {
        self.0.is_first_time_only
    }

    #[must_use]
    pub const fn is_cumulative(&self) -> bool {
        self.0.is_cumulative
    }

    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.0.priority
    }

    #[must_use]
    pub const fn conditions(&self) -> Option<&Conditions> {
        self.0.conditions.as_ref()
    }

    /// Whether `now` falls inside the open window `(start_date, end_date)`.
    ///
    /// Ignores the administrative flag; see
    /// [`is_within_window`](crate::is_within_window) for the
    /// combined check. Both ends are exclusive.
    #[must_use]
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        now > self.0.start_date && now < self.0.end_date
    }

    /// Redemptions left before the usage limit, or `None` when unlimited.
    #[must_use]
    pub fn remaining_uses(&self) -> Option<u32> {
        self.0
            .usage_limit
            .map(|limit| limit.saturating_sub(self.0.used_count))
    }

    /// Returns a copy of this rule with one more recorded redemption.
    ///
    /// The caller owns the counter and must persist the increment atomically
    /// with the order that consumed it.
    #[must_use]
    pub fn with_recorded_usage(&self) -> Self {
        let mut record = self.0.clone();
        record.used_count = record.used_count.saturating_add(1);
        Self(record)
    }

    /// Returns the underlying record.
    #[must_use]
    pub const fn as_record(&self) -> &DiscountRecord {
        &self.0
    }

    /// Consumes the rule and returns its record.
    #[must_use]
    pub fn into_record(self) -> DiscountRecord {
        self.0
    }
}

impl TryFrom<DiscountRecord> for DiscountRule {
    type Error = DiscountRuleError;

    fn try_from(record: DiscountRecord) -> Result<Self, Self::Error> {
        validate(&record)?;
        Ok(Self(record))
    }
}

impl From<DiscountRule> for DiscountRecord {
    fn from(rule: DiscountRule) -> Self {
        rule.0
    }
}

/// Builder for [`DiscountRule`]. Created by [`DiscountRule::builder`].
#[derive(Debug, Clone)]
#[must_use]
pub struct DiscountRuleBuilder {
    record: DiscountRecord,
}

impl DiscountRuleBuilder {
    pub fn active(mut self, is_active: bool) -> Self {
        self.record.is_active = is_active;
        self
    }

    pub fn minimum_quantity(mut self, quantity: u32) -> Self {
        self.record.minimum_quantity = Some(quantity);
        self
    }

    pub fn maximum_quantity(mut self, quantity: u32) -> Self {
        self.record.maximum_quantity = Some(quantity);
        self
    }

    pub fn minimum_amount(mut self, amount: Decimal) -> Self {
        self.record.minimum_amount = Some(amount);
        self
    }

    pub fn maximum_discount(mut self, amount: Decimal) -> Self {
        self.record.maximum_discount = Some(amount);
        self
    }

    pub fn usage_limit(mut self, limit: u32) -> Self {
        self.record.usage_limit = Some(limit);
        self
    }

    pub fn used_count(mut self, count: u32) -> Self {
        self.record.used_count = count;
        self
    }

    pub fn first_time_only(mut self, first_time_only: bool) -> Self {
        self.record.is_first_time_only = first_time_only;
        self
    }

    pub fn cumulative(mut self, cumulative: bool) -> Self {
        self.record.is_cumulative = cumulative;
        self
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.record.priority = priority;
        self
    }

    pub fn conditions(mut self, conditions: Conditions) -> Self {
        self.record.conditions = Some(conditions);
        self
    }

    /// Validate the terms and build the rule.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountRuleError`] naming the first violated bound.
    pub fn build(self) -> Result<DiscountRule, DiscountRuleError> {
        DiscountRule::try_from(self.record)
    }
}

fn validate(record: &DiscountRecord) -> Result<(), DiscountRuleError> {
    if record.end_date <= record.start_date {
        return Err(DiscountRuleError::InvalidWindow {
            start_date: record.start_date,
            end_date: record.end_date,
        });
    }

    if record.amount < Decimal::ZERO {
        return Err(DiscountRuleError::NegativeAmount {
            amount: record.amount,
        });
    }

    if record.discount_type == DiscountType::Percent && record.amount > Decimal::ONE_HUNDRED {
        return Err(DiscountRuleError::PercentOutOfRange {
            amount: record.amount,
        });
    }

    if record.minimum_quantity == Some(0) {
        return Err(DiscountRuleError::InvalidQuantityBound {
            field: "minimum_quantity",
        });
    }

    if record.maximum_quantity == Some(0) {
        return Err(DiscountRuleError::InvalidQuantityBound {
            field: "maximum_quantity",
        });
    }

    if let (Some(minimum), Some(maximum)) = (record.minimum_quantity, record.maximum_quantity)
        && minimum > maximum
    {
        return Err(DiscountRuleError::QuantityBoundsInverted { minimum, maximum });
    }

    if let Some(amount) = record.minimum_amount
        && amount < Decimal::ZERO
    {
        return Err(DiscountRuleError::NegativeMinimumAmount { amount });
    }

    if let Some(amount) = record.maximum_discount
        && amount < Decimal::ZERO
    {
        return Err(DiscountRuleError::NegativeMaximumDiscount { amount });
    }

    if record.usage_limit == Some(0) {
        return Err(DiscountRuleError::InvalidUsageLimit);
    }

    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&record.priority) {
        return Err(DiscountRuleError::PriorityOutOfRange {
            priority: record.priority,
            min: MIN_PRIORITY,
            max: MAX_PRIORITY,
        });
    }

    Ok(())
}
