//! Loading stored discount records into rules.

use rust_decimal::Decimal;

use discount_engine_core::{
    DiscountRecord, DiscountRule, DiscountRuleError, DiscountType, ProductId, calculate_discount,
};
use discount_engine_integration_tests::{during_window, purchase};

const CATALOG: &str = r#"
- product_id: 1001
  discount_type: percent
  amount: 12.5
  start_date: 2026-07-01T00:00:00Z
  end_date: 2026-08-01T00:00:00Z
  minimum_quantity: 2
  maximum_discount: "20.00"
  usage_limit: 500
  used_count: 499
  is_cumulative: true
  priority: 40
  conditions:
    customer_group: wholesale
    channels: [web, pos]
- product_id: 1002
  discount_type: fixed
  amount: 4
  start_date: 2026-07-01T00:00:00Z
  end_date: 2026-08-01T00:00:00Z
  is_active: false
"#;

// =============================================================================
// Deserialization
// =============================================================================

#[test]
fn test_yaml_records_become_rules() {
    let rules: Vec<DiscountRule> = serde_yaml::from_str(CATALOG).unwrap();
    assert_eq!(rules.len(), 2);

    let first = &rules[0];
    assert_eq!(first.product_id(), ProductId::new(1001));
    assert_eq!(first.discount_type(), DiscountType::Percent);
    assert_eq!(first.amount(), Decimal::new(125, 1));
    assert_eq!(first.maximum_discount(), Some(Decimal::new(20, 0)));
    assert_eq!(first.remaining_uses(), Some(1));
    assert!(first.is_cumulative());
    assert!(!first.is_first_time_only());
    assert_eq!(first.priority(), 40);

    let conditions = first.conditions().unwrap();
    assert_eq!(conditions["customer_group"], "wholesale");

    let second = &rules[1];
    assert!(!second.is_active_flag());
    assert_eq!(second.usage_limit(), None);
}

#[test]
fn test_conditions_do_not_affect_evaluation() {
    let rules: Vec<DiscountRule> = serde_yaml::from_str(CATALOG).unwrap();
    let with_conditions = rules[0].clone();

    let mut record = with_conditions.clone().into_record();
    record.conditions = None;
    let without_conditions = DiscountRule::try_from(record).unwrap();

    let ctx = purchase(Decimal::new(40, 0), Decimal::new(3, 0));
    assert_eq!(
        calculate_discount(&with_conditions, during_window(), &ctx),
        calculate_discount(&without_conditions, during_window(), &ctx)
    );
    // 40 * 12.5% * 3 = 15.00, under the 20.00 cap
    assert_eq!(
        calculate_discount(&with_conditions, during_window(), &ctx),
        Decimal::new(15, 0)
    );
}

#[test]
fn test_invalid_record_fails_to_load() {
    let json = r#"{
        "product_id": 1,
        "discount_type": "fixed",
        "amount": "-2",
        "start_date": "2026-07-01T00:00:00Z",
        "end_date": "2026-08-01T00:00:00Z"
    }"#;
    let err = serde_json::from_str::<DiscountRule>(json).unwrap_err();
    assert!(err.to_string().contains("cannot be negative"), "{err}");

    // The raw record itself still parses; only the rule conversion rejects it.
    let record: DiscountRecord = serde_json::from_str(json).unwrap();
    assert!(matches!(
        DiscountRule::try_from(record),
        Err(DiscountRuleError::NegativeAmount { .. })
    ));
}

#[test]
fn test_unknown_discount_type_fails_to_load() {
    let json = r#"{
        "product_id": 1,
        "discount_type": "bogo",
        "amount": "1",
        "start_date": "2026-07-01T00:00:00Z",
        "end_date": "2026-08-01T00:00:00Z"
    }"#;
    assert!(serde_json::from_str::<DiscountRecord>(json).is_err());
}

#[test]
fn test_misspelled_field_fails_to_load() {
    let yaml = r"
product_id: 1
discount_type: fixed
amount: 5
start_date: 2026-07-01T00:00:00Z
end_date: 2026-08-01T00:00:00Z
maximum_discont: 8
";
    let err = serde_yaml::from_str::<DiscountRule>(yaml).unwrap_err();
    assert!(err.to_string().contains("maximum_discont"), "{err}");

    let json = r#"{
        "product_id": 1,
        "discount_type": "percent",
        "amount": "10",
        "start_date": "2026-07-01T00:00:00Z",
        "end_date": "2026-08-01T00:00:00Z",
        "usage_limt": 3
    }"#;
    assert!(serde_json::from_str::<DiscountRecord>(json).is_err());
}

#[test]
fn test_rule_serializes_as_record() {
    let rules: Vec<DiscountRule> = serde_yaml::from_str(CATALOG).unwrap();
    let json = serde_json::to_value(&rules[1]).unwrap();
    assert_eq!(json["product_id"], 1002);
    assert_eq!(json["discount_type"], "fixed");
    assert_eq!(json["is_active"], false);
    assert!(json.get("conditions").is_none());

    let back: DiscountRule = serde_json::from_value(json).unwrap();
    assert_eq!(back, rules[1]);
}
