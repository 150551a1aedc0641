//! Tally Core Library
//!
//! Shared functionality for the Tally expense reporting tool:
//! - Ukrainian language resources (morphological dictionary, stop words)
//! - Category clustering pipeline (normalize → TF-IDF → mean-shift → name)
//! - Spending aggregation over merged categories
//! - Transaction CSV input
//!
//! A clustering pass is a pure function of the batch it is given: the
//! vocabulary, vectors and clusters are rebuilt per call and nothing is
//! cached between calls, so results always reflect the current category
//! set. Language resources are loaded once at startup and injected.

pub mod cluster;
pub mod error;
pub mod import;
pub mod lang;
pub mod models;
pub mod report;

pub use cluster::meanshift::MeanShift;
pub use cluster::CategoryClusterer;
pub use error::{Error, Result};
pub use import::parse_csv;
pub use lang::MorphDict;
pub use models::{CategoryCluster, CategoryReport, CategorySpending, ClusterMap, Transaction};
pub use report::spending_breakdown;
