//! Category grouping command

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{CategoryClusterer, MorphDict};

/// Group category labels read from a file (one per line) or stdin
pub async fn cmd_cluster(dict: MorphDict, file: Option<&Path>, json: bool) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read categories from stdin")?;
            buf
        }
    };

    let categories: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if categories.is_empty() {
        println!("No categories to group.");
        return Ok(());
    }

    // Each pass runs on a blocking worker so it never interleaves with
    // other work on the runtime
    let map = tokio::task::spawn_blocking(move || {
        CategoryClusterer::new(&dict).cluster(&categories)
    })
    .await
    .context("Clustering task failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!();
    println!("📦 Category groups ({})", map.len());
    println!("   ─────────────────────────────────────────────");
    for cluster in map.clusters() {
        println!("   {:20} ← {}", cluster.label, cluster.members.join(", "));
    }

    Ok(())
}
