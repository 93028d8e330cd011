//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DISCOUNT_CATALOG_PATH` - Catalog file to load (default: discounts.yaml)
//! - `DISCOUNT_OUTPUT_FORMAT` - `text` or `json` (default: text)
//!
//! Command-line flags take precedence over these values.

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_CATALOG_PATH: &str = "discounts.yaml";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Catalog file holding the stored discount records
    pub catalog_path: PathBuf,
    /// Output format for command results
    pub output_format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup("DISCOUNT_CATALOG_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);

        let output_format = match lookup("DISCOUNT_OUTPUT_FORMAT") {
            Some(value) => value.parse::<OutputFormat>().map_err(|e| {
                ConfigError::InvalidEnvVar("DISCOUNT_OUTPUT_FORMAT".to_string(), e)
            })?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            catalog_path,
            output_format,
        })
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = path;
        }
        if let Some(format) = output_format {
            self.output_format = format;
        }
        self
    }
}
