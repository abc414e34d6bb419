// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report assembly and rendering.
//!
//! A [`RunReport`] is the complete outcome of one simulation run: the
//! resolved inputs, every variant's results, the comparison tables, and the
//! real-world equivalents. Rendering is a separate step so the same report
//! can go to the terminal, a JSON consumer, or the history file.

use chrono::{DateTime, Utc};
use greensim_carbon::ResolvedIntensity;
use greensim_metrics::{ConversionFactors, ModelResult};
use greensim_models::{
    real_world_equivalents, EquivalentKind, HardwareProfile, Scenario, WorkloadParams,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::debug;

use crate::explain;
use crate::history::RunRecord;
use crate::reduction::{compare_variants, VariantComparison};
use crate::Result;

/// Real-world equivalents of one variant's emissions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantEquivalents {
    pub model: String,
    pub entries: BTreeMap<EquivalentKind, f64>,
}

/// Complete outcome of one simulation run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub scenario: Scenario,
    pub params: WorkloadParams,
    pub profile: String,
    pub intensity: ResolvedIntensity,
    pub results: Vec<ModelResult>,
    pub comparisons: Vec<VariantComparison>,
    pub equivalents: Vec<VariantEquivalents>,
}

impl RunReport {
    /// Run every variant of the workload's scenario and assemble the report
    pub fn build(
        params: WorkloadParams,
        profile: &HardwareProfile,
        intensity: ResolvedIntensity,
    ) -> Self {
        let factors = ConversionFactors::new(
            profile.kwh_per_cpu_op,
            profile.kwh_per_data_move,
            intensity.gco2_per_kwh,
        );
        let results = params.run_all(&factors);
        debug!(
            scenario = params.scenario().id(),
            profile = profile.id,
            variants = results.len(),
            "assembled run report"
        );
        let comparisons = compare_variants(&results);
        let equivalents = results
            .iter()
            .map(|r| VariantEquivalents {
                model: r.kind.id().to_string(),
                entries: real_world_equivalents(r.estimated_co2, intensity.gco2_per_kwh),
            })
            .collect();

        Self {
            scenario: params.scenario(),
            params,
            profile: profile.id.to_string(),
            intensity,
            results,
            comparisons,
            equivalents,
        }
    }

    /// Flatten the report into history records
    pub fn records(&self, timestamp: DateTime<Utc>) -> Vec<RunRecord> {
        self.results
            .iter()
            .map(|r| RunRecord::from_result(&self.params, &self.profile, &self.intensity, r, timestamp))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering for the terminal
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Scenario: {}", self.scenario);
        let _ = writeln!(
            out,
            "Profile: {}   Grid: {:.0} gCO2/kWh ({})",
            self.profile, self.intensity.gco2_per_kwh, self.intensity.origin
        );
        let _ = writeln!(out);

        for result in &self.results {
            let _ = writeln!(out, "{}", result.kind);
            let _ = writeln!(
                out,
                "  complexity: {} cpu, {} memory",
                result.complexity.cpu, result.complexity.memory
            );
            if !result.is_applicable() {
                let _ = writeln!(out, "  not applicable for these parameters");
                let _ = writeln!(out);
                continue;
            }
            let _ = writeln!(out, "  cpu operations : {:>16.0}", result.cpu_operations);
            let _ = writeln!(out, "  data movement  : {:>16.0}", result.data_movement_units);
            let memory_label = if result.memory.is_peak() { "peak" } else { "resident" };
            let _ = writeln!(
                out,
                "  memory ({})   : {:>16.0}",
                memory_label,
                result.memory_units()
            );
            if let Some(aux) = result.aux_stack_units {
                let _ = writeln!(out, "  aux stack      : {:>16.1}", aux);
            }
            let _ = writeln!(out, "  energy         : {:>16.9} kWh", result.estimated_energy.0);
            let _ = writeln!(out, "  co2            : {:>16.6} g", result.estimated_co2.0);
            let _ = writeln!(out);
        }

        for comparison in &self.comparisons {
            let _ = writeln!(out, "Reductions: {}", comparison.green_kind);
            for row in &comparison.rows {
                let _ = match row.reduction_percent {
                    Some(pct) => writeln!(out, "  {:<22} {:>8.1}%", row.metric.label(), pct),
                    None => writeln!(out, "  {:<22}      n/a", row.metric.label()),
                };
            }
            let _ = writeln!(out);
        }

        for equivalent in &self.equivalents {
            if equivalent.entries.is_empty() {
                continue;
            }
            let _ = writeln!(out, "Equivalents for {}:", equivalent.model);
            for (kind, value) in &equivalent.entries {
                let _ = writeln!(out, "  {:<22} {:>12.2}", equivalent_label(*kind), value);
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Advice: {}", explain::advice(self.scenario));
        out
    }
}

fn equivalent_label(kind: EquivalentKind) -> &'static str {
    match kind {
        EquivalentKind::EvKilometers => "EV driving (km)",
        EquivalentKind::TreeAbsorptionHours => "Tree absorption (h)",
    }
}
