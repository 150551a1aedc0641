//! Tally CLI - Expense reports over merged categories
//!
//! Usage:
//!   tally cluster --file categories.txt   Group similar category labels
//!   tally report --file expenses.csv      Spending breakdown for a period

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    // Language resources are loaded once here and injected everywhere else
    let dict = commands::load_dictionary(cli.dictionary.as_deref())?;

    match cli.command {
        Commands::Cluster { file, json } => {
            commands::cmd_cluster(dict, file.as_deref(), json).await
        }
        Commands::Report {
            file,
            period,
            from,
            to,
            limit,
            json,
        } => {
            let (from_date, to_date) =
                commands::resolve_period(&period, from.as_deref(), to.as_deref())?;
            commands::cmd_report(dict, &file, from_date, to_date, limit, json).await
        }
    }
}
