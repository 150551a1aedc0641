//! Spending report command and period resolution

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use tally_core::{parse_csv, spending_breakdown, CategoryClusterer, MorphDict};

use super::truncate;

/// Resolve a period string to (from_date, to_date)
pub fn resolve_period(
    period: &str,
    custom_from: Option<&str>,
    custom_to: Option<&str>,
) -> Result<(NaiveDate, NaiveDate)> {
    // If custom dates provided, use those
    if let (Some(from), Some(to)) = (custom_from, custom_to) {
        let from_date = NaiveDate::parse_from_str(from, "%Y-%m-%d")
            .context("Invalid --from date format (use YYYY-MM-DD)")?;
        let to_date = NaiveDate::parse_from_str(to, "%Y-%m-%d")
            .context("Invalid --to date format (use YYYY-MM-DD)")?;
        return Ok((from_date, to_date));
    }

    let today = Utc::now().date_naive();

    match period.to_lowercase().as_str() {
        "this-month" => {
            let from = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
            Ok((from, today))
        }
        "today" => Ok((today, today)),
        "all" => {
            let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
            Ok((from, today))
        }
        _ => anyhow::bail!(
            "Unknown period: {}. Available: this-month, today, all",
            period
        ),
    }
}

/// One line of budget status against a monthly limit, in the shape the
/// report footer prints
pub fn budget_line(total: f64, limit: f64) -> String {
    if total > limit {
        format!(
            "⚠️  Over the monthly limit by {:.2} (limit {:.2})",
            total - limit,
            limit
        )
    } else if limit > 0.0 {
        format!(
            "💳 {:.1}% of the {:.2} monthly limit used",
            total / limit * 100.0,
            limit
        )
    } else {
        format!("💳 Limit {:.2}", limit)
    }
}

/// Spending breakdown by merged category for the given period.
///
/// Clusters are computed from the distinct categories across the whole
/// file, not just the period, so a label used only in an earlier month
/// still folds into the right group.
pub async fn cmd_report(
    dict: MorphDict,
    file: &Path,
    from: NaiveDate,
    to: NaiveDate,
    limit: Option<f64>,
    json: bool,
) -> Result<()> {
    let reader =
        File::open(file).with_context(|| format!("Failed to open {}", file.display()))?;
    let transactions = parse_csv(reader).context("Failed to parse transaction CSV")?;

    let report = tokio::task::spawn_blocking(move || {
        let categories: Vec<String> = transactions.iter().map(|t| t.category.clone()).collect();
        let map = CategoryClusterer::new(&dict).cluster(&categories);
        let period: Vec<_> = transactions
            .into_iter()
            .filter(|t| t.date >= from && t.date <= to)
            .collect();
        spending_breakdown(&period, &map, from, to)
    })
    .await
    .context("Clustering task failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("📊 Spending by merged category");
    println!("   Period: {} to {}", report.from, report.to);
    println!("   ─────────────────────────────────────────────────────");

    if report.is_empty() {
        println!("   No spending found in this period.");
        return Ok(());
    }

    println!("   Total: {:.2}", report.total);
    println!();
    println!(
        "   {:25} │ {:>10} │ {:>6} │ {:>5}",
        "Category", "Amount", "%", "Count"
    );
    println!("   ──────────────────────────┼────────────┼────────┼───────");
    for cat in &report.categories {
        println!(
            "   {:25} │ {:>10.2} │ {:>5.1}% │ {:>5}",
            truncate(&cat.label, 25),
            cat.amount,
            cat.percentage,
            cat.transaction_count
        );
    }

    if let Some(limit) = limit {
        println!();
        println!("   {}", budget_line(report.total, limit));
    }

    Ok(())
}
