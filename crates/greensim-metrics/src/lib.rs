// SPDX-License-Identifier: PMPL-1.0-or-later

//! # Greensim Metrics
//!
//! Core data types for the green-software impact simulator: abstract cost
//! metrics, energy/carbon quantities, and the result record produced by
//! every cost model.
//!
//! All quantities are analytical estimates over abstract units, not
//! measurements. Absolute values matter less than the relative differences
//! between algorithmic variants and how they scale with workload size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Estimated electrical energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Energy(pub f64);

impl Energy {
    pub const ZERO: Self = Energy(0.0);

    pub fn kilowatt_hours(kwh: f64) -> Self {
        Energy(kwh)
    }
}

impl Add for Energy {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Energy(self.0 + rhs.0)
    }
}

impl Mul<f64> for Energy {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Energy(self.0 * rhs)
    }
}

/// Estimated emissions in grams of CO2 equivalent
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Carbon(pub f64);

impl Carbon {
    pub const ZERO: Self = Carbon(0.0);

    pub fn grams_co2e(g: f64) -> Self {
        Carbon(g)
    }
}

impl Add for Carbon {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Carbon(self.0 + rhs.0)
    }
}

impl Mul<f64> for Carbon {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Carbon(self.0 * rhs)
    }
}

/// Conversion factors active for one simulation run.
///
/// The two hardware factors come from a hardware profile and the grid
/// factor from a carbon-intensity source; together they turn abstract
/// operation counts into energy and emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactors {
    /// kWh consumed per abstract CPU operation
    pub kwh_per_cpu_op: f64,
    /// kWh consumed per abstract unit of data moved
    pub kwh_per_data_move: f64,
    /// Grid carbon intensity in gCO2e per kWh
    pub gco2_per_kwh: f64,
}

impl ConversionFactors {
    pub fn new(kwh_per_cpu_op: f64, kwh_per_data_move: f64, gco2_per_kwh: f64) -> Self {
        Self {
            kwh_per_cpu_op,
            kwh_per_data_move,
            gco2_per_kwh,
        }
    }
}

/// Memory footprint of a modeled algorithm, in abstract data units.
///
/// The two variants are not interchangeable: `Resident` is the steady-state
/// footprint of a single primary structure, while `Peak` is the maximum
/// simultaneous footprint when two structures coexist (e.g. original records
/// plus an auxiliary key index).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "units", rename_all = "snake_case")]
pub enum MemoryFootprint {
    Resident(f64),
    Peak(f64),
}

impl MemoryFootprint {
    /// The footprint magnitude regardless of variant
    pub fn units(&self) -> f64 {
        match self {
            MemoryFootprint::Resident(u) | MemoryFootprint::Peak(u) => *u,
        }
    }

    pub fn is_peak(&self) -> bool {
        matches!(self, MemoryFootprint::Peak(_))
    }
}

/// Asymptotic complexity labels, descriptive only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub cpu: &'static str,
    pub memory: &'static str,
}

/// Identifier of one algorithmic variant across the three scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    StandardSort,
    EfficientSort,
    IndexSort,
    StandardSalesReport,
    GreenSalesReport,
    StandardLogFilter,
    GreenLogFilter,
}

impl ModelKind {
    /// Machine-readable identifier (e.g. "sort/standard")
    pub fn id(&self) -> &'static str {
        match self {
            ModelKind::StandardSort => "sort/standard",
            ModelKind::EfficientSort => "sort/efficient",
            ModelKind::IndexSort => "sort/index",
            ModelKind::StandardSalesReport => "sales/standard-multi-pass",
            ModelKind::GreenSalesReport => "sales/green-single-pass",
            ModelKind::StandardLogFilter => "logs/standard-full-load",
            ModelKind::GreenLogFilter => "logs/green-streamed",
        }
    }

    /// Human-readable display name
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::StandardSort => "Standard Sort (bubble-like)",
            ModelKind::EfficientSort => "Efficient Sort (quicksort-like)",
            ModelKind::IndexSort => "Index Sort (sort keys, reorder once)",
            ModelKind::StandardSalesReport => "Standard Sales Report (multi-pass)",
            ModelKind::GreenSalesReport => "Green Sales Report (single-pass)",
            ModelKind::StandardLogFilter => "Standard Log Filter (full load, regex all)",
            ModelKind::GreenLogFilter => "Green Log Filter (streamed, targeted regex)",
        }
    }

    /// Whether this variant is the optimized alternative within its scenario
    pub fn is_green(&self) -> bool {
        matches!(
            self,
            ModelKind::EfficientSort
                | ModelKind::IndexSort
                | ModelKind::GreenSalesReport
                | ModelKind::GreenLogFilter
        )
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output record of one cost-model invocation.
///
/// Immutable value object, created fresh per call. A workload with any
/// non-positive parameter produces the zero-valued sentinel (see
/// [`ModelResult::inapplicable`]) instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResult {
    pub kind: ModelKind,
    /// Abstract CPU operations (comparisons, swaps, arithmetic, ...)
    pub cpu_operations: f64,
    /// Abstract units of data relocated in memory or storage
    pub data_movement_units: f64,
    pub memory: MemoryFootprint,
    /// Recursion-stack estimate, only reported by the recursive sort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_stack_units: Option<f64>,
    pub estimated_energy: Energy,
    pub estimated_co2: Carbon,
    pub complexity: Complexity,
}

impl ModelResult {
    /// Zero-valued sentinel for an inapplicable workload.
    ///
    /// Callers check [`ModelResult::is_applicable`] rather than handle an
    /// error kind; batch and sweep callers rely on this never panicking.
    pub fn inapplicable(kind: ModelKind, memory: MemoryFootprint, complexity: Complexity) -> Self {
        Self {
            kind,
            cpu_operations: 0.0,
            data_movement_units: 0.0,
            memory,
            aux_stack_units: None,
            estimated_energy: Energy::ZERO,
            estimated_co2: Carbon::ZERO,
            complexity,
        }
    }

    /// False when this result is the inapplicable-workload sentinel
    pub fn is_applicable(&self) -> bool {
        self.cpu_operations > 0.0
    }

    /// Memory magnitude regardless of resident/peak variant
    pub fn memory_units(&self) -> f64 {
        self.memory.units()
    }
}
