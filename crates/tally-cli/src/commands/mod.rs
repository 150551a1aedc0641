//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `cluster` - Category grouping command
//! - `report` - Spending report command and period resolution

pub mod cluster;
pub mod report;

// Re-export command functions for main.rs
pub use cluster::*;
pub use report::*;

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::MorphDict;

/// Load the morphological dictionary once at startup: the embedded
/// Ukrainian lexicon, with an optional user-supplied TSV merged on top.
pub fn load_dictionary(extra: Option<&Path>) -> Result<MorphDict> {
    let mut dict = MorphDict::embedded().clone();
    if let Some(path) = extra {
        let merged = dict
            .merge_tsv_path(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
        tracing::debug!("merged {} entries from {}", merged, path.display());
    }
    Ok(dict)
}

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
