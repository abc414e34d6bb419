// SPDX-License-Identifier: PMPL-1.0-or-later

//! Standard-vs-green metric comparisons.

use greensim_metrics::{ModelKind, ModelResult};
use serde::Serialize;

/// One comparable metric of a model result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    CpuOperations,
    DataMovement,
    Memory,
    Energy,
    Co2,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::CpuOperations,
        MetricKind::DataMovement,
        MetricKind::Memory,
        MetricKind::Energy,
        MetricKind::Co2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::CpuOperations => "CPU operations",
            MetricKind::DataMovement => "Data movement (units)",
            MetricKind::Memory => "Memory (units)",
            MetricKind::Energy => "Energy (kWh)",
            MetricKind::Co2 => "CO2 (g)",
        }
    }

    fn extract(&self, result: &ModelResult) -> f64 {
        match self {
            MetricKind::CpuOperations => result.cpu_operations,
            MetricKind::DataMovement => result.data_movement_units,
            MetricKind::Memory => result.memory_units(),
            MetricKind::Energy => result.estimated_energy.0,
            MetricKind::Co2 => result.estimated_co2.0,
        }
    }
}

/// One row of a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReductionRow {
    pub metric: MetricKind,
    pub standard: f64,
    pub green: f64,
    /// Reduction in percent; `None` when the standard value is effectively
    /// zero and the ratio is undefined.
    pub reduction_percent: Option<f64>,
}

/// Comparison of one green variant against the scenario's standard variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantComparison {
    pub green_kind: ModelKind,
    pub rows: Vec<ReductionRow>,
}

/// Build comparison tables for every green variant in a result set.
///
/// Expects the scenario convention: the standard variant first, green
/// variants after it. An empty slice yields no comparisons.
pub fn compare_variants(results: &[ModelResult]) -> Vec<VariantComparison> {
    let Some((standard, greens)) = results.split_first() else {
        return Vec::new();
    };

    greens
        .iter()
        .map(|green| VariantComparison {
            green_kind: green.kind,
            rows: MetricKind::ALL
                .iter()
                .map(|metric| {
                    let s = metric.extract(standard);
                    let g = metric.extract(green);
                    ReductionRow {
                        metric: *metric,
                        standard: s,
                        green: g,
                        reduction_percent: (s.abs() > 1e-9).then(|| (s - g) / s * 100.0),
                    }
                })
                .collect(),
        })
        .collect()
}
