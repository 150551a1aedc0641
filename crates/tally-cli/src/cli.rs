//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Expense reports over merged categories
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Group near-duplicate expense categories and report spending", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Extra morphological dictionary (TSV, `surface<TAB>lemma` per line),
    /// merged over the embedded Ukrainian lexicon at startup
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Group similar category labels (one per line, from a file or stdin)
    Cluster {
        /// File with one category label per line (defaults to stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spending breakdown by merged category from a transaction CSV
    Report {
        /// Transaction CSV (`date,category,amount[,description]`)
        #[arg(short, long)]
        file: PathBuf,

        /// Reporting period: this-month, today, all
        #[arg(short, long, default_value = "this-month")]
        period: String,

        /// Custom period start (YYYY-MM-DD, overrides --period with --to)
        #[arg(long)]
        from: Option<String>,

        /// Custom period end (YYYY-MM-DD, overrides --period with --from)
        #[arg(long)]
        to: Option<String>,

        /// Monthly spending limit to check the total against
        #[arg(long)]
        limit: Option<f64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
