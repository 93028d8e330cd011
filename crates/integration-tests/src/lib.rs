//! Integration tests for the discount engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p discount-engine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `discount_scenarios` - Worked pricing examples end to end
//! - `discount_properties` - Invariants checked over ranges of inputs
//! - `discount_records` - Loading stored records into rules
//!
//! This library holds the shared fixtures those tests build on.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use discount_engine_core::{
    DiscountRule, DiscountRuleBuilder, DiscountType, ProductId, PurchaseContext,
};

/// Product every fixture rule targets.
pub const PRODUCT: ProductId = ProductId::new(1001);

/// Midnight UTC on the given date.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("fixture date must exist")
}

/// Start of the fixture window.
#[must_use]
pub fn window_start() -> DateTime<Utc> {
    day(2026, 7, 1)
}

/// End of the fixture window.
#[must_use]
pub fn window_end() -> DateTime<Utc> {
    day(2026, 8, 1)
}

/// An instant strictly inside the fixture window.
#[must_use]
pub fn during_window() -> DateTime<Utc> {
    window_start() + Duration::days(10)
}

/// Builder for a rule over the fixture window.
pub fn rule(discount_type: DiscountType, amount: Decimal) -> DiscountRuleBuilder {
    DiscountRule::builder(PRODUCT, discount_type, amount, window_start(), window_end())
}

/// Purchase context from a unit price and quantity.
///
/// # Panics
///
/// Panics if either value is negative.
#[must_use]
pub fn purchase(unit_price: Decimal, quantity: Decimal) -> PurchaseContext {
    PurchaseContext::new(unit_price, quantity).expect("fixture purchase must be valid")
}
