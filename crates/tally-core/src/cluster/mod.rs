//! Category clustering pipeline
//!
//! Groups free-text expense category labels that mean the same thing
//! ("кафе", "кафешка", "кава в кафе") so reports aggregate them under one
//! name. One pass runs normalize → vectorize → mean-shift → name over the
//! distinct categories it is given and returns a [`ClusterMap`]; nothing is
//! kept between passes, so growing category sets can regroup freely.

pub mod meanshift;
pub mod naming;
pub mod normalize;
pub mod vectorize;

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::lang::MorphDict;
use crate::models::{CategoryCluster, ClusterMap};

use meanshift::MeanShift;
use naming::representative_label;
use normalize::normalize;
use vectorize::build_vectors;

/// One-shot clustering pass over a batch of category labels.
///
/// Holds only the injected dictionary and the mean-shift parameters; the
/// vocabulary, vectors and clusters are rebuilt from scratch on every call
/// and dropped with the returned map.
pub struct CategoryClusterer<'a> {
    dict: &'a MorphDict,
    mean_shift: MeanShift,
}

impl<'a> CategoryClusterer<'a> {
    pub fn new(dict: &'a MorphDict) -> Self {
        Self {
            dict,
            mean_shift: MeanShift::default(),
        }
    }

    pub fn with_params(dict: &'a MorphDict, mean_shift: MeanShift) -> Self {
        Self { dict, mean_shift }
    }

    /// Partition categories into clusters and pick a display label for each.
    ///
    /// Duplicates are collapsed before normalization; every distinct input
    /// lands in exactly one cluster. A single distinct category never enters
    /// the vector space — one document gives the space no similarity
    /// structure — and is returned directly as its own cluster.
    pub fn cluster(&self, categories: &[String]) -> ClusterMap {
        let distinct = dedup_preserving_order(categories);
        if distinct.is_empty() {
            return ClusterMap::default();
        }
        if distinct.len() == 1 {
            let label = distinct[0].to_lowercase();
            return ClusterMap::new(vec![CategoryCluster {
                label,
                members: vec![distinct[0].clone()],
            }]);
        }

        let normalized: Vec<String> = distinct
            .iter()
            .map(|raw| normalize(raw, self.dict))
            .collect();
        let vectors = build_vectors(&normalized);
        let labels = self.mean_shift.fit(&vectors);
        debug!(
            "clustered {} categories into {} groups",
            distinct.len(),
            labels.iter().max().map_or(0, |m| m + 1)
        );

        // Group members by cluster id, ordered by first appearance so the
        // naming tie-break follows input order
        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut group_of: HashMap<usize, usize> = HashMap::new();
        for (category, &label) in distinct.iter().zip(&labels) {
            let idx = *group_of.entry(label).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[idx].push(category.clone());
        }

        let clusters = groups
            .into_iter()
            .map(|members| CategoryCluster {
                label: representative_label(&members),
                members,
            })
            .collect();

        ClusterMap::new(ensure_unique_labels(clusters))
    }
}

/// Distinct representative labels are an invariant of the map. Collisions
/// are rare (two clusters would have to repeat the same dominant word
/// without sharing a mode) — resolve them by falling back to the cluster's
/// first member, then to an indexed suffix.
fn ensure_unique_labels(clusters: Vec<CategoryCluster>) -> Vec<CategoryCluster> {
    let mut seen: HashSet<String> = HashSet::new();
    clusters
        .into_iter()
        .map(|mut cluster| {
            if !seen.insert(cluster.label.clone()) {
                warn!("duplicate representative label {:?}", cluster.label);
                let mut candidate = cluster.members[0].to_lowercase();
                let mut suffix = 2;
                while seen.contains(&candidate) {
                    candidate = format!("{} ({})", cluster.members[0].to_lowercase(), suffix);
                    suffix += 1;
                }
                seen.insert(candidate.clone());
                cluster.label = candidate;
            }
            cluster
        })
        .collect()
}

fn dedup_preserving_order(categories: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect()
}
