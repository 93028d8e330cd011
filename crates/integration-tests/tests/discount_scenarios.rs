//! Worked pricing examples, end to end through the public API.

use chrono::Duration;
use rust_decimal::Decimal;

use discount_engine_core::{
    DiscountType, Ineligibility, PurchaseContext, PurchaseContextError, calculate_discount,
    can_apply, evaluate, final_price,
};
use discount_engine_integration_tests::{
    during_window, purchase, rule, window_end, window_start,
};

// =============================================================================
// Calculation Scenarios
// =============================================================================

#[test]
fn test_percent_rule_without_caps() {
    let r = rule(DiscountType::Percent, Decimal::TEN).build().unwrap();
    let ctx = purchase(Decimal::new(50, 0), Decimal::TWO);

    assert!(can_apply(&r, during_window(), &ctx));
    assert_eq!(calculate_discount(&r, during_window(), &ctx), Decimal::new(1000, 2));
    assert_eq!(final_price(&r, during_window(), &ctx), Decimal::new(9000, 2));
}

#[test]
fn test_fixed_rule_capped_by_maximum_discount() {
    let r = rule(DiscountType::Fixed, Decimal::new(5, 0))
        .maximum_discount(Decimal::new(8, 0))
        .build()
        .unwrap();
    let ctx = purchase(Decimal::new(30, 0), Decimal::new(3, 0));

    assert_eq!(calculate_discount(&r, during_window(), &ctx), Decimal::new(800, 2));
    assert_eq!(final_price(&r, during_window(), &ctx), Decimal::new(8200, 2));
}

#[test]
fn test_exhausted_usage_limit_gives_zero() {
    let r = rule(DiscountType::Percent, Decimal::TEN)
        .usage_limit(1)
        .used_count(1)
        .build()
        .unwrap();
    let ctx = purchase(Decimal::new(50, 0), Decimal::TWO);

    assert!(!can_apply(&r, during_window(), &ctx));
    assert_eq!(calculate_discount(&r, during_window(), &ctx), Decimal::ZERO);
    assert_eq!(final_price(&r, during_window(), &ctx), Decimal::new(100, 0));
}

#[test]
fn test_below_minimum_quantity() {
    let r = rule(DiscountType::Fixed, Decimal::ONE)
        .minimum_quantity(5)
        .build()
        .unwrap();
    let ctx = purchase(Decimal::TEN, Decimal::new(3, 0));

    assert!(!can_apply(&r, during_window(), &ctx));
}

#[test]
fn test_exact_end_date_is_outside_window() {
    let r = rule(DiscountType::Percent, Decimal::TEN).build().unwrap();
    let ctx = purchase(Decimal::TEN, Decimal::ONE);

    assert!(!can_apply(&r, window_end(), &ctx));
    assert!(can_apply(&r, window_end() - Duration::seconds(1), &ctx));
}

#[test]
fn test_exact_start_date_is_outside_window() {
    let r = rule(DiscountType::Percent, Decimal::TEN).build().unwrap();
    let ctx = purchase(Decimal::TEN, Decimal::ONE);

    assert!(!can_apply(&r, window_start(), &ctx));
    assert!(can_apply(&r, window_start() + Duration::seconds(1), &ctx));
}

// =============================================================================
// Redemption Flow
// =============================================================================

#[test]
fn test_recording_usage_eventually_exhausts_rule() {
    let mut r = rule(DiscountType::Fixed, Decimal::new(2, 0))
        .usage_limit(3)
        .build()
        .unwrap();
    let ctx = purchase(Decimal::TEN, Decimal::ONE);

    for _ in 0..3 {
        assert_eq!(calculate_discount(&r, during_window(), &ctx), Decimal::new(2, 0));
        r = r.with_recorded_usage();
    }

    assert_eq!(r.remaining_uses(), Some(0));
    assert_eq!(
        evaluate(&r, during_window(), &ctx).ineligibility,
        Some(Ineligibility::UsageLimitReached { limit: 3 })
    );
}

#[test]
fn test_weight_based_line() {
    // 1.25 kg at 8.40/kg with 15% off: 10.50 line, 1.575 -> 1.58 off
    let r = rule(DiscountType::Percent, Decimal::new(15, 0)).build().unwrap();
    let ctx = purchase(Decimal::new(840, 2), Decimal::new(125, 2));

    let outcome = evaluate(&r, during_window(), &ctx);
    assert_eq!(outcome.line_total, Decimal::new(1050, 2));
    assert_eq!(outcome.discount, Decimal::new(158, 2));
    assert_eq!(outcome.final_price, Decimal::new(892, 2));
}

#[test]
fn test_minimum_amount_gate() {
    let r = rule(DiscountType::Fixed, Decimal::new(3, 0))
        .minimum_amount(Decimal::new(25, 0))
        .build()
        .unwrap();

    let small = purchase(Decimal::new(1200, 2), Decimal::TWO);
    assert!(matches!(
        evaluate(&r, during_window(), &small).ineligibility,
        Some(Ineligibility::BelowMinimumAmount { .. })
    ));

    let enough = purchase(Decimal::new(1250, 2), Decimal::TWO);
    assert_eq!(calculate_discount(&r, during_window(), &enough), Decimal::new(6, 0));
}

#[test]
fn test_unrepresentable_line_total_is_rejected() {
    assert!(matches!(
        PurchaseContext::new(Decimal::MAX, Decimal::TWO),
        Err(PurchaseContextError::LineTotalOverflow { .. })
    ));
}

#[test]
fn test_largest_line_keeps_discount_within_total() {
    let r = rule(DiscountType::Percent, Decimal::ONE_HUNDRED).build().unwrap();
    let ctx = purchase(Decimal::MAX, Decimal::ONE);

    let outcome = evaluate(&r, during_window(), &ctx);
    assert!(outcome.discount <= outcome.line_total);
    assert!(outcome.final_price >= Decimal::ZERO);
}
