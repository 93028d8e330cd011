//! Errors surfaced by CLI commands.

use std::path::PathBuf;

use discount_engine_core::{DiscountId, DiscountRuleError, PurchaseContextError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid YAML.
    #[error("Invalid YAML in catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The catalog file is not valid JSON, or output could not be encoded.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog has no entry with the requested ID.
    #[error("Discount {0} not found in catalog")]
    UnknownDiscount(DiscountId),

    /// A catalog entry has keys that match no record field.
    #[error("Discount {id} has unknown field(s): {fields}")]
    UnknownFields { id: DiscountId, fields: String },

    /// A stored record violates a rule invariant.
    #[error("Discount {id} is invalid: {source}")]
    InvalidRule {
        id: DiscountId,
        #[source]
        source: DiscountRuleError,
    },

    /// The purchase arguments are out of range.
    #[error("Invalid purchase: {0}")]
    InvalidPurchase(#[from] PurchaseContextError),

    /// One or more catalog records failed validation.
    #[error("{0} invalid discount record(s) found")]
    InvalidRecords(usize),
}
