//! Domain models for Tally

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single expense record as entered by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Free-text category label, kept verbatim
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// A group of category labels whose vectors converged to the same density mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCluster {
    /// Display name chosen for the whole group
    pub label: String,
    /// Raw category strings, in the order they were supplied
    pub members: Vec<String>,
}

/// Result of one clustering pass: disjoint clusters covering every input
/// category, with a raw-string lookup into them.
///
/// A map is scoped to the batch it was computed from. Labels are unique
/// within one pass but not stable across passes — a different category set
/// may group and name differently.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClusterMap {
    clusters: Vec<CategoryCluster>,
    #[serde(skip)]
    by_raw: HashMap<String, usize>,
}

impl ClusterMap {
    pub fn new(clusters: Vec<CategoryCluster>) -> Self {
        let mut by_raw = HashMap::new();
        for (idx, cluster) in clusters.iter().enumerate() {
            for member in &cluster.members {
                by_raw.insert(member.clone(), idx);
            }
        }
        Self { clusters, by_raw }
    }

    /// Representative label for a raw category string (exact match)
    pub fn label_for(&self, raw: &str) -> Option<&str> {
        self.by_raw
            .get(raw)
            .map(|&idx| self.clusters[idx].label.as_str())
    }

    pub fn clusters(&self) -> &[CategoryCluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// One bucket of a spending breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    /// Representative label of the merged category
    pub label: String,
    pub amount: f64,
    /// Share of the report total, in percent
    pub percentage: f64,
    pub transaction_count: usize,
}

/// Spending summed per merged category over a reporting period
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total: f64,
    /// Buckets sorted by amount, largest first
    pub categories: Vec<CategorySpending>,
}

impl CategoryReport {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
