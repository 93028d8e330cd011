//! Validate every record in a catalog.
//!
//! # Usage
//!
//! ```bash
//! discount-cli --catalog discounts.yaml validate
//! ```

use serde::Serialize;
use tracing::debug;

use discount_engine_core::DiscountId;

use crate::catalog::{self, CatalogEntry};
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::output::{print_json, print_lines};

/// One record that failed validation.
#[derive(Debug, Serialize)]
pub struct InvalidRecord {
    pub id: DiscountId,
    pub error: String,
}

/// Validation summary for a catalog.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub invalid: Vec<InvalidRecord>,
}

/// Check each entry's record against the rule invariants.
#[must_use]
pub fn check(entries: &[CatalogEntry]) -> ValidationReport {
    let invalid = entries
        .iter()
        .filter_map(|entry| {
            entry.to_rule().err().map(|err| InvalidRecord {
                id: entry.id,
                error: err.to_string(),
            })
        })
        .collect();

    ValidationReport {
        checked: entries.len(),
        invalid,
    }
}

/// Human-readable lines for a validation report.
#[must_use]
pub fn render_text(report: &ValidationReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .invalid
        .iter()
        .map(|record| format!("Discount {}: {}", record.id, record.error))
        .collect();
    lines.push(format!(
        "Checked {} record(s), {} invalid",
        report.checked,
        report.invalid.len()
    ));
    lines
}

/// Load the configured catalog and report invalid records.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, or
/// `CliError::InvalidRecords` if any record is invalid.
pub fn run(config: &CliConfig) -> Result<(), CliError> {
    let entries = catalog::load(&config.catalog_path)?;
    let report = check(&entries);
    debug!(
        checked = report.checked,
        invalid = report.invalid.len(),
        "Catalog validation complete"
    );

    match config.output_format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_lines(&render_text(&report)),
    }

    if report.invalid.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidRecords(report.invalid.len()))
    }
}
