//! Evaluate one catalog discount against a purchase line.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate discount 12 for 3 units at 19.99, now
//! discount-cli evaluate --discount-id 12 --unit-price 19.99 --quantity 3
//!
//! # Evaluate at a fixed instant
//! discount-cli evaluate --discount-id 12 --unit-price 19.99 --quantity 3 \
//!     --now 2026-05-01T12:00:00Z
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use discount_engine_core::{
    DiscountId, DiscountOutcome, DiscountRule, ProductId, PurchaseContext, evaluate,
};

use crate::catalog;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::output::{print_json, print_lines};

/// Arguments of an evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvaluateArgs {
    pub discount_id: DiscountId,
    pub unit_price: Decimal,
    pub quantity: Decimal,
    /// Reference instant; the system clock when `None`.
    pub now: Option<DateTime<Utc>>,
}

/// Evaluation result as printed.
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub discount_id: DiscountId,
    pub product_id: ProductId,
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: DiscountOutcome,
}

/// Evaluate a rule for a purchase at `now`.
///
/// # Errors
///
/// Returns an error if the purchase arguments are negative.
pub fn evaluate_rule(
    discount_id: DiscountId,
    rule: &DiscountRule,
    unit_price: Decimal,
    quantity: Decimal,
    now: DateTime<Utc>,
) -> Result<EvaluationReport, CliError> {
    let ctx = PurchaseContext::new(unit_price, quantity)?;
    Ok(EvaluationReport {
        discount_id,
        product_id: rule.product_id(),
        evaluated_at: now,
        outcome: evaluate(rule, now, &ctx),
    })
}

/// Load the configured catalog and evaluate one discount.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the discount is missing
/// or invalid, or the purchase arguments are out of range.
pub fn run(config: &CliConfig, args: EvaluateArgs) -> Result<(), CliError> {
    let entries = catalog::load(&config.catalog_path)?;
    let rule = catalog::find(&entries, args.discount_id)?.to_rule()?;
    let now = args.now.unwrap_or_else(Utc::now);

    let report = evaluate_rule(args.discount_id, &rule, args.unit_price, args.quantity, now)?;
    debug!(
        discount_id = %report.discount_id,
        applied = report.outcome.applied(),
        "Evaluated discount"
    );

    match config.output_format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_lines(&render_text(&rule, &report)),
    }
    Ok(())
}

/// Human-readable lines for an evaluation.
#[must_use]
pub fn render_text(rule: &DiscountRule, report: &EvaluationReport) -> Vec<String> {
    let outcome = &report.outcome;
    let status = match &outcome.ineligibility {
        None => format!("  Applied at {}", report.evaluated_at.to_rfc3339()),
        Some(reason) => format!("  Not applied: {reason}"),
    };
    vec![
        format!(
            "Discount {} (product {}, {} {})",
            report.discount_id,
            report.product_id,
            rule.discount_type(),
            rule.amount()
        ),
        status,
        format!("  Line total:  {:.2}", outcome.line_total),
        format!("  Discount:    {:.2}", outcome.discount),
        format!("  Final price: {:.2}", outcome.final_price),
    ]
}
