//! Core types for the discount engine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod discount_type;
pub mod id;
pub mod money;

pub use discount_type::{DiscountType, ParseDiscountTypeError};
pub use id::*;
pub use money::{MONEY_SCALE, round_money};
