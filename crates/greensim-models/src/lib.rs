// SPDX-License-Identifier: PMPL-1.0-or-later

//! # Greensim Models
//!
//! The cost-modeling engine: deterministic analytical functions that, given
//! workload-size parameters, estimate CPU operations, data movement, and
//! memory footprint for each algorithmic variant of three canonical
//! data-processing tasks, then convert those counts into energy and CO2
//! figures via pluggable hardware and grid-carbon factors.
//!
//! Every model function is pure and stateless: identical inputs yield
//! bit-identical results, and a workload with any non-positive parameter
//! yields the zero-valued sentinel instead of an error.

pub mod convert;
pub mod costs;
pub mod hardware;
pub mod logs;
pub mod sales;
pub mod scenario;
pub mod sort;

pub use convert::{estimate_energy_co2, real_world_equivalents, EquivalentKind};
pub use greensim_metrics::{
    Carbon, Complexity, ConversionFactors, Energy, MemoryFootprint, ModelKind, ModelResult,
};
pub use hardware::{HardwareProfile, DEFAULT_PROFILE_ID, HARDWARE_PROFILES};
pub use scenario::{ParamKey, Scenario, WorkloadParams};

/// True only when every parameter is strictly positive.
///
/// Zero or negative workload sizes mark a scenario as inapplicable; the
/// model functions surface that as a sentinel result, never as an error.
pub(crate) fn all_positive(params: &[f64]) -> bool {
    params.iter().all(|&p| p > 0.0)
}
