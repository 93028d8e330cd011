//! Loading stored discount records from a catalog file.
//!
//! A catalog is a YAML or JSON list of discount records, each with its own
//! `id`. The format is chosen by file extension; anything other than
//! `.json` is read as YAML.

use std::collections::BTreeMap;
use std::path::Path;

use discount_engine_core::{DiscountId, DiscountRecord, DiscountRule};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// One catalog entry: an ID plus the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: DiscountId,
    #[serde(flatten)]
    pub record: DiscountRecord,
    /// Keys that belong to neither the entry nor the record.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl CatalogEntry {
    /// Validate the record and build its rule.
    ///
    /// # Errors
    ///
    /// Returns `CliError::UnknownFields` if the entry has keys no record
    /// field matches, or `CliError::InvalidRule` if the record violates a
    /// rule invariant.
    pub fn to_rule(&self) -> Result<DiscountRule, CliError> {
        if !self.unknown.is_empty() {
            return Err(CliError::UnknownFields {
                id: self.id,
                fields: self.unknown.keys().cloned().collect::<Vec<_>>().join(", "),
            });
        }
        DiscountRule::try_from(self.record.clone())
            .map_err(|source| CliError::InvalidRule { id: self.id, source })
    }
}

/// Read and parse a catalog file.
///
/// Records are not validated here; see [`CatalogEntry::to_rule`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Vec<CatalogEntry>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read catalog");

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let entries = if is_json {
        parse_json(&content)?
    } else {
        parse_yaml(&content)?
    };
    tracing::info!(entries = entries.len(), "Loaded catalog");
    Ok(entries)
}

fn parse_json(content: &str) -> Result<Vec<CatalogEntry>, CliError> {
    Ok(serde_json::from_str(content)?)
}

fn parse_yaml(content: &str) -> Result<Vec<CatalogEntry>, CliError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Find an entry by ID.
///
/// # Errors
///
/// Returns `CliError::UnknownDiscount` if no entry has this ID.
pub fn find(entries: &[CatalogEntry], id: DiscountId) -> Result<&CatalogEntry, CliError> {
    entries
        .iter()
        .find(|entry| entry.id == id)
        .ok_or(CliError::UnknownDiscount(id))
}
