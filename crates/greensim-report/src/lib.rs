// SPDX-License-Identifier: PMPL-1.0-or-later

//! # Greensim Report
//!
//! Everything between the raw model results and the user: standard-vs-green
//! comparisons, persistent run history, scalability and what-if sweeps,
//! model explanations, and text/JSON rendering.

pub mod explain;
pub mod history;
pub mod reduction;
pub mod render;
pub mod sweep;

pub use explain::{advice, explanation};
pub use history::{RunHistory, RunRecord};
pub use reduction::{compare_variants, MetricKind, ReductionRow, VariantComparison};
pub use render::{RunReport, VariantEquivalents};
pub use sweep::{scaling_sweep, what_if_sweep, SweepPoint};

use thiserror::Error;

/// Errors from report and history operations
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
