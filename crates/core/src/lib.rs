//! Discount Engine Core - Product discount eligibility and calculation.
//!
//! This crate decides whether a product discount applies to a purchase and
//! computes how much it takes off the line total:
//! - [`DiscountRule`] - Immutable terms of one discount plus its usage counter
//! - [`PurchaseContext`] - Unit price and quantity of the line being priced
//! - [`evaluator`] - Pure functions that check eligibility and compute amounts
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, and no clock reads. Callers pass the reference instant
//! in explicitly, so every evaluation is deterministic.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, money rounding, and the discount type enum
//! - [`discount`] - Rules, purchase contexts, and the evaluator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod discount;
pub mod types;

pub use discount::*;
pub use types::*;
