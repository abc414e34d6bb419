// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scalability and sensitivity sweeps.
//!
//! Both sweeps re-run every variant of a scenario while varying exactly one
//! parameter, leaving the rest at the given baseline. The model functions
//! are pure, so a sweep is just a loop; points with non-positive values
//! come back as sentinel results rather than being skipped.

use greensim_metrics::{ConversionFactors, ModelResult};
use greensim_models::{ParamKey, WorkloadParams};
use serde::Serialize;

/// Results at one value of the swept parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Which parameter was varied
    pub key: ParamKey,
    /// The value it took at this point
    pub value: f64,
    pub params: WorkloadParams,
    pub results: Vec<ModelResult>,
}

fn sweep(
    baseline: &WorkloadParams,
    key: ParamKey,
    values: &[f64],
    factors: &ConversionFactors,
) -> Vec<SweepPoint> {
    values
        .iter()
        .map(|&value| {
            let params = baseline.with(key, value);
            SweepPoint {
                key,
                value,
                params,
                results: params.run_all(factors),
            }
        })
        .collect()
}

/// Vary the scenario's primary size parameter (records, transactions, or
/// lines) across the given values.
pub fn scaling_sweep(
    baseline: &WorkloadParams,
    sizes: &[f64],
    factors: &ConversionFactors,
) -> Vec<SweepPoint> {
    sweep(baseline, baseline.primary_key(), sizes, factors)
}

/// Vary one named parameter across the given values (sensitivity analysis)
pub fn what_if_sweep(
    baseline: &WorkloadParams,
    key: ParamKey,
    values: &[f64],
    factors: &ConversionFactors,
) -> Vec<SweepPoint> {
    sweep(baseline, key, values, factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greensim_metrics::ModelKind;
    use greensim_models::Scenario;

    fn factors() -> ConversionFactors {
        ConversionFactors::new(1.2e-10, 6e-11, 275.0)
    }

    #[test]
    fn test_scaling_sweep_varies_primary_size() {
        let baseline = WorkloadParams::defaults(Scenario::Sort);
        let points = scaling_sweep(&baseline, &[100.0, 1000.0, 10_000.0], &factors());

        assert_eq!(points.len(), 3);
        for point in &points {
            assert_eq!(point.key, ParamKey::Records);
            assert_eq!(point.params.get(ParamKey::Records), Some(point.value));
            // Other parameters stay at baseline
            assert_eq!(point.params.get(ParamKey::AvgRecordSize), Some(100.0));
        }

        // Quadratic model grows 100x per 10x step
        let standard: Vec<f64> = points
            .iter()
            .map(|p| p.results[0].cpu_operations)
            .collect();
        assert!(standard[1] / standard[0] > 90.0);
        assert!(standard[2] / standard[1] > 90.0);
    }

    #[test]
    fn test_gap_widens_with_scale() {
        let baseline = WorkloadParams::defaults(Scenario::Sort);
        let points = scaling_sweep(&baseline, &[1000.0, 100_000.0], &factors());

        let gap_at = |p: &SweepPoint| {
            let standard = &p.results[0];
            let efficient = p
                .results
                .iter()
                .find(|r| r.kind == ModelKind::EfficientSort)
                .unwrap();
            standard.estimated_energy.0 / efficient.estimated_energy.0
        };
        assert!(gap_at(&points[1]) > gap_at(&points[0]));
    }

    #[test]
    fn test_what_if_sweep_holds_other_params() {
        let baseline = WorkloadParams::defaults(Scenario::LogFilter);
        let points = what_if_sweep(
            &baseline,
            ParamKey::ErrorPercentage,
            &[1.0, 5.0, 25.0, 100.0],
            &factors(),
        );

        assert_eq!(points.len(), 4);
        for point in &points {
            assert_eq!(point.params.get(ParamKey::Lines), Some(100_000.0));
        }

        // Green filter cpu rises with the error rate, standard stays flat.
        let green_cpu: Vec<f64> = points.iter().map(|p| p.results[1].cpu_operations).collect();
        assert!(green_cpu.windows(2).all(|w| w[0] < w[1]));
        let standard_cpu: Vec<f64> =
            points.iter().map(|p| p.results[0].cpu_operations).collect();
        assert!(standard_cpu.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_non_positive_point_yields_sentinels() {
        let baseline = WorkloadParams::defaults(Scenario::SalesReport);
        let points = scaling_sweep(&baseline, &[0.0, 1000.0], &factors());
        assert!(points[0].results.iter().all(|r| !r.is_applicable()));
        assert!(points[1].results.iter().all(|r| r.is_applicable()));
    }
}
