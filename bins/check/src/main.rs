//! Pocketbook checker
//!
//! Reads a JSON batch of transaction and account submissions, validates each
//! one, posts the valid transactions and prints a JSON report.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pocketbook_core::forms::SubmissionRules;
use pocketbook_shared::AppConfig;
use pocketbook_shared::config::LoggingConfig;
use pocketbook_shared::types::Currency;

use crate::report::{Batch, check_batch};

/// Validate Pocketbook submissions and post them as balanced entries
#[derive(Parser)]
#[command(name = "pocketbook-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with `transactions`, `accounts` and optional `rates`
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Base currency for posted entries (overrides the file and config)
    #[arg(long, value_name = "CUR", env = "POCKETBOOK_BASE")]
    base: Option<Currency>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let raw = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let batch: Batch = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid submission batch", cli.file.display()))?;

    let base = cli
        .base
        .or(batch.base_currency)
        .unwrap_or(config.validation.base_currency);
    let rules = SubmissionRules::from_config(&config.validation);

    let report = check_batch(&batch, base, &rules);
    info!(
        base = %base,
        transactions = report.transactions.len(),
        accounts = report.accounts.len(),
        failures = report.summary.failed(),
        "Checked submission batch"
    );

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(if report.summary.failed() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            logging
                .json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!logging.json).then(|| fmt::layer().with_writer(std::io::stderr)),
        )
        .init();
}
