//! Product discount rules and their evaluation.

pub mod context;
pub mod error;
pub mod evaluator;
pub mod record;
pub mod rule;

pub use context::PurchaseContext;
pub use error::{DiscountRuleError, PurchaseContextError};
pub use evaluator::{
    DiscountOutcome, Ineligibility, calculate_discount, can_apply, check_eligibility, evaluate,
    final_price, has_reached_usage_limit, is_within_window,
};
pub use record::{Conditions, DiscountRecord};
pub use rule::{DiscountRule, DiscountRuleBuilder, MAX_PRIORITY, MIN_PRIORITY};
