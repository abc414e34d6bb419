// SPDX-License-Identifier: PMPL-1.0-or-later
//! Session run history.
//!
//! An append-only, in-memory ledger of every model evaluation in a session,
//! flattened so past runs can be listed and compared without re-deriving
//! anything from parameters. Nothing is persisted between sessions; a host
//! that wants to keep it exports the JSON form.

use chrono::{DateTime, Utc};
use greensim_carbon::ResolvedIntensity;
use greensim_metrics::ModelResult;
use greensim_models::WorkloadParams;
use serde::{Deserialize, Serialize};

use crate::Result;

/// One historical model evaluation, flattened for listing and export.
///
/// Owns plain strings instead of the in-memory catalog types so exported
/// records survive catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    /// Scenario identifier (e.g. "sort")
    pub scenario: String,
    /// Model identifier (e.g. "sort/index")
    pub model: String,
    pub params: WorkloadParams,
    /// Hardware profile identifier
    pub profile: String,
    pub gco2_per_kwh: f64,
    /// Human-readable provenance of the grid factor
    pub intensity_origin: String,
    pub cpu_operations: f64,
    pub data_movement_units: f64,
    pub memory_units: f64,
    pub peak_memory: bool,
    pub energy_kwh: f64,
    pub co2_g: f64,
}

impl RunRecord {
    /// Flatten one model result into a record
    pub fn from_result(
        params: &WorkloadParams,
        profile_id: &str,
        intensity: &ResolvedIntensity,
        result: &ModelResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            scenario: params.scenario().id().to_string(),
            model: result.kind.id().to_string(),
            params: *params,
            profile: profile_id.to_string(),
            gco2_per_kwh: intensity.gco2_per_kwh,
            intensity_origin: intensity.origin.to_string(),
            cpu_operations: result.cpu_operations,
            data_movement_units: result.data_movement_units,
            memory_units: result.memory_units(),
            peak_memory: result.memory.is_peak(),
            energy_kwh: result.estimated_energy.0,
            co2_g: result.estimated_co2.0,
        }
    }
}

/// Append-only history for one session
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunHistory {
    records: Vec<RunRecord>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, records: &[RunRecord]) {
        self.records.extend_from_slice(records);
    }

    /// All records, oldest first
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Most recent records, newest first
    pub fn recent(&self, limit: usize) -> Vec<&RunRecord> {
        self.records.iter().rev().take(limit).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export form for hosts that want to keep the session
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greensim_carbon::IntensityOrigin;
    use greensim_models::{ConversionFactors, Scenario};

    fn sample_records() -> Vec<RunRecord> {
        let params = WorkloadParams::defaults(Scenario::Sort);
        let factors = ConversionFactors::new(1.2e-10, 6e-11, 275.0);
        let intensity = ResolvedIntensity {
            gco2_per_kwh: 275.0,
            origin: IntensityOrigin::EuAverage,
        };
        let now = Utc::now();
        params
            .run_all(&factors)
            .iter()
            .map(|r| RunRecord::from_result(&params, "desktop", &intensity, r, now))
            .collect()
    }

    #[test]
    fn test_new_history_is_empty() {
        assert!(RunHistory::new().is_empty());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut history = RunHistory::new();
        let records = sample_records();
        history.append(&records);
        history.append(&records);

        assert_eq!(history.len(), records.len() * 2);
        assert_eq!(history.records()[0], records[0]);
        assert_eq!(history.records()[0].scenario, "sort");
        assert_eq!(history.records()[0].model, "sort/standard");
        assert_eq!(history.records()[0].intensity_origin, "EU average");
    }

    #[test]
    fn test_recent_is_newest_first_and_bounded() {
        let mut history = RunHistory::new();
        history.append(&sample_records());

        let recent = history.recent(2);
        assert_eq!(recent.len(), 2);
        // Defaults produce standard, efficient, index in order; newest-first
        // reverses that.
        assert_eq!(recent[0].model, "sort/index");
        assert_eq!(recent[1].model, "sort/efficient");
    }

    #[test]
    fn test_json_export_round_trips_records() {
        let mut history = RunHistory::new();
        let records = sample_records();
        history.append(&records);

        let json = history.to_json().unwrap();
        let back: Vec<RunRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);
    }
}
