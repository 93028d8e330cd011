//! Discount eligibility and calculation.
//!
//! Every function here is pure: the rule is borrowed read-only, `now` is
//! supplied by the caller, and nothing is mutated. An inapplicable discount
//! is not an error; it simply yields a zero discount.
//!
//! # Eligibility window
//!
//! The window is the OPEN interval `(start_date, end_date)`. A discount is
//! not yet active at exactly `start_date` and no longer active at exactly
//! `end_date`.
//!
//! # Check order
//!
//! [`check_eligibility`] reports the first failing check, in this order:
//! administrative flag, window, usage limit, minimum quantity, maximum
//! quantity, minimum amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::context::PurchaseContext;
use super::rule::DiscountRule;
use crate::types::{DiscountType, round_money};

/// Why a discount does not apply to a purchase.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Ineligibility {
    /// The administrative flag is off.
    #[error("discount is switched off")]
    Inactive,
    /// `now` is at or before the start of the window.
    #[error("discount starts after {starts_at}")]
    NotStarted {
        /// Start of the window.
        starts_at: DateTime<Utc>,
    },
    /// `now` is at or after the end of the window.
    #[error("discount ended at {ended_at}")]
    Expired {
        /// End of the window.
        ended_at: DateTime<Utc>,
    },
    /// The rule has been redeemed `usage_limit` times.
    #[error("usage limit of {limit} reached")]
    UsageLimitReached {
        /// Lifetime redemption cap.
        limit: u32,
    },
    /// Fewer units than the minimum quantity.
    #[error("quantity {quantity} is below the minimum of {minimum}")]
    BelowMinimumQuantity {
        /// Required minimum.
        minimum: u32,
        /// Purchased quantity.
        quantity: Decimal,
    },
    /// More units than the maximum quantity.
    #[error("quantity {quantity} is above the maximum of {maximum}")]
    AboveMaximumQuantity {
        /// Allowed maximum.
        maximum: u32,
        /// Purchased quantity.
        quantity: Decimal,
    },
    /// Line total below the minimum amount.
    #[error("line total {line_total} is below the minimum of {minimum}")]
    BelowMinimumAmount {
        /// Required minimum line total.
        minimum: Decimal,
        /// Pre-discount line total.
        line_total: Decimal,
    },
}

/// Result of evaluating one rule against one purchase line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountOutcome {
    /// Pre-discount line total, rounded to cents.
    pub line_total: Decimal,
    /// Discount taken off the line, rounded to cents.
    pub discount: Decimal,
    /// Line total after the discount, rounded to cents.
    pub final_price: Decimal,
    /// Why the discount did not apply, if it did not.
    pub ineligibility: Option<Ineligibility>,
}

impl DiscountOutcome {
    /// Whether the discount applied.
    #[must_use]
    pub const fn applied(&self) -> bool {
        self.ineligibility.is_none()
    }
}

/// Whether the rule is switched on AND `now` is strictly inside its window.
///
/// This is the narrower predicate; [`DiscountRule::is_current`] checks the
/// window alone.
#[must_use]
pub fn is_within_window(rule: &DiscountRule, now: DateTime<Utc>) -> bool {
    rule.is_active_flag() && rule.is_current(now)
}

/// Whether the rule has been redeemed as many times as its usage limit allows.
#[must_use]
pub fn has_reached_usage_limit(rule: &DiscountRule) -> bool {
    rule.usage_limit()
        .is_some_and(|limit| rule.used_count() >= limit)
}

/// Check every eligibility condition and report the first that fails.
///
/// # Errors
///
/// Returns the [`Ineligibility`] reason when the discount does not apply.
/// This is ordinary control flow, not a failure.
pub fn check_eligibility(
    rule: &DiscountRule,
    now: DateTime<Utc>,
    ctx: &PurchaseContext,
) -> Result<(), Ineligibility> {
    if !rule.is_active_flag() {
        return Err(Ineligibility::Inactive);
    }
    if now <= rule.start_date() {
        return Err(Ineligibility::NotStarted {
            starts_at: rule.start_date(),
        });
    }
    if now >= rule.end_date() {
        return Err(Ineligibility::Expired {
            ended_at: rule.end_date(),
        });
    }

    if let Some(limit) = rule.usage_limit()
        && rule.used_count() >= limit
    {
        return Err(Ineligibility::UsageLimitReached { limit });
    }

    let quantity = ctx.quantity();
    if let Some(minimum) = rule.minimum_quantity()
        && quantity < Decimal::from(minimum)
    {
        return Err(Ineligibility::BelowMinimumQuantity { minimum, quantity });
    }
    if let Some(maximum) = rule.maximum_quantity()
        && quantity > Decimal::from(maximum)
    {
        return Err(Ineligibility::AboveMaximumQuantity { maximum, quantity });
    }

    if let Some(minimum) = rule.minimum_amount() {
        let line_total = ctx.line_total();
        if line_total < minimum {
            return Err(Ineligibility::BelowMinimumAmount {
                minimum,
                line_total,
            });
        }
    }

    Ok(())
}

/// Whether the discount applies to this purchase at `now`.
#[must_use]
pub fn can_apply(rule: &DiscountRule, now: DateTime<Utc>, ctx: &PurchaseContext) -> bool {
    check_eligibility(rule, now, ctx).is_ok()
}

/// Discount amount for this purchase, rounded to cents.
///
/// Zero when the rule does not apply. Otherwise:
/// - percent: `unit_price * (amount / 100) * quantity`
/// - fixed: `amount * quantity`
///
/// then capped at `maximum_discount` when one is set.
#[must_use]
pub fn calculate_discount(
    rule: &DiscountRule,
    now: DateTime<Utc>,
    ctx: &PurchaseContext,
) -> Decimal {
    match check_eligibility(rule, now, ctx) {
        Ok(()) => applied_discount(rule, ctx),
        Err(reason) => {
            tracing::trace!(product_id = %rule.product_id(), %reason, "discount not applicable");
            Decimal::ZERO
        }
    }
}

/// Line total after the discount, rounded to cents.
#[must_use]
pub fn final_price(rule: &DiscountRule, now: DateTime<Utc>, ctx: &PurchaseContext) -> Decimal {
    round_money(ctx.line_total() - calculate_discount(rule, now, ctx))
}

/// Evaluate the rule once and return totals together with the eligibility
/// result.
#[must_use]
pub fn evaluate(rule: &DiscountRule, now: DateTime<Utc>, ctx: &PurchaseContext) -> DiscountOutcome {
    let ineligibility = check_eligibility(rule, now, ctx).err();
    let discount = if ineligibility.is_none() {
        applied_discount(rule, ctx)
    } else {
        Decimal::ZERO
    };
    let line_total = ctx.line_total();

    DiscountOutcome {
        line_total: round_money(line_total),
        discount,
        final_price: round_money(line_total - discount),
        ineligibility,
    }
}

/// Type-specific amount with the cap applied. Assumes eligibility.
///
/// A raw amount too large for a `Decimal` saturates at `Decimal::MAX` before
/// the cap is applied.
fn applied_discount(rule: &DiscountRule, ctx: &PurchaseContext) -> Decimal {
    let raw = match rule.discount_type() {
        DiscountType::Percent => ctx
            .unit_price()
            .checked_mul(rule.amount() / Decimal::ONE_HUNDRED)
            .and_then(|per_unit| per_unit.checked_mul(ctx.quantity())),
        DiscountType::Fixed => rule.amount().checked_mul(ctx.quantity()),
    };
    let raw = raw.unwrap_or_else(|| {
        tracing::warn!(
            product_id = %rule.product_id(),
            quantity = %ctx.quantity(),
            "discount amount overflowed, saturating"
        );
        Decimal::MAX
    });
    let capped = rule.maximum_discount().map_or(raw, |cap| raw.min(cap));

    tracing::debug!(
        product_id = %rule.product_id(),
        discount_type = %rule.discount_type(),
        %raw,
        %capped,
        "discount calculated"
    );

    round_money(capped)
}
