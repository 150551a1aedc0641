//! Spending aggregation over merged categories
//!
//! Folds a period's transactions into per-label buckets using the cluster
//! map computed from the user's full category history. The map and the
//! report both live for a single request.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{CategoryReport, CategorySpending, ClusterMap, Transaction};

/// Sum transaction amounts per merged category.
///
/// Every transaction lands in exactly one bucket, so the report total
/// equals the sum of the input amounts. A category missing from the map
/// should not happen when the map was built from the full distinct-category
/// set; when it does, the transaction keeps its raw category as a bucket of
/// its own and the anomaly is logged, not fatal.
pub fn spending_breakdown(
    transactions: &[Transaction],
    clusters: &ClusterMap,
    from: NaiveDate,
    to: NaiveDate,
) -> CategoryReport {
    let mut buckets: HashMap<String, (f64, usize)> = HashMap::new();
    for tx in transactions {
        let label = match clusters.label_for(&tx.category) {
            Some(label) => label.to_string(),
            None => {
                warn!(
                    "category {:?} has no cluster, keeping it as its own bucket",
                    tx.category
                );
                tx.category.clone()
            }
        };
        let entry = buckets.entry(label).or_insert((0.0, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    let total: f64 = buckets.values().map(|(amount, _)| amount).sum();
    let mut categories: Vec<CategorySpending> = buckets
        .into_iter()
        .map(|(label, (amount, transaction_count))| CategorySpending {
            label,
            amount,
            percentage: if total != 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
            transaction_count,
        })
        .collect();
    categories.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    CategoryReport {
        from,
        to,
        total,
        categories,
    }
}
