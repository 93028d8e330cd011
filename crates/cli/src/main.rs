//! Discount CLI - Catalog validation and discount evaluation tools.
//!
//! # Usage
//!
//! ```bash
//! # Check every record in the catalog
//! discount-cli --catalog discounts.yaml validate
//!
//! # Evaluate one discount for a purchase line
//! discount-cli evaluate --discount-id 12 --unit-price 19.99 --quantity 3
//!
//! # Same, as JSON, at a fixed instant
//! discount-cli --format json evaluate --discount-id 12 --unit-price 19.99 \
//!     --quantity 3 --now 2026-05-01T12:00:00Z
//! ```
//!
//! # Commands
//!
//! - `validate` - Report catalog records that violate rule invariants
//! - `evaluate` - Compute the discount and final price for one purchase line

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use discount_engine_core::DiscountId;

mod catalog;
mod commands;
mod config;
mod error;
mod output;

use config::{CliConfig, OutputFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "discount-cli")]
#[command(author, version, about = "Discount catalog tools")]
struct Cli {
    /// Catalog file (YAML, or JSON by `.json` extension)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every discount record in the catalog
    Validate,
    /// Evaluate one discount against a purchase line
    Evaluate {
        /// Catalog ID of the discount
        #[arg(short, long)]
        discount_id: i64,

        /// Unit price of the purchased product
        #[arg(short, long)]
        unit_price: Decimal,

        /// Purchased quantity (may be fractional)
        #[arg(short, long)]
        quantity: Decimal,

        /// Reference instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
}

fn main() {
    // Defaults to info level for the CLI if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "discount_engine_cli=info,discount_engine_core=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_env()?.with_overrides(cli.catalog, cli.format);
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Validate => commands::validate::run(&config)?,
        Commands::Evaluate {
            discount_id,
            unit_price,
            quantity,
            now,
        } => {
            let args = commands::evaluate::EvaluateArgs {
                discount_id: DiscountId::new(discount_id),
                unit_price,
                quantity,
                now,
            };
            commands::evaluate::run(&config, args)?;
        }
    }
    Ok(())
}
