// SPDX-License-Identifier: PMPL-1.0-or-later

//! Energy/CO2 conversion and real-world equivalence.
//!
//! Both functions are pure and linear; no rounding or clamping is applied.
//! Inputs are pre-validated by the model functions, so a zero cpu/data pair
//! simply yields zero energy and zero emissions.

use greensim_metrics::{Carbon, ConversionFactors, Energy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Emissions below this threshold (grams) have no meaningful equivalence
const EQUIVALENCE_THRESHOLD_G: f64 = 1e-4;

/// Average electric-vehicle efficiency, kWh per km driven
const EV_EFFICIENCY_KWH_PER_KM: f64 = 0.18;

/// A mature tree absorbs ~22 kg CO2 per year; per hour that is ~2.51 g
const GCO2_ABSORBED_BY_TREE_PER_HOUR: f64 = 22_000.0 / 365.0 / 24.0;

/// Convert abstract operation counts into energy and CO2 emissions.
///
/// `kwh = cpu_ops * f_cpu + data_moves * f_data`, `co2 = kwh * g`, where
/// the factors describe the active hardware profile and grid intensity.
pub fn estimate_energy_co2(
    cpu_operations: f64,
    data_movement_units: f64,
    factors: &ConversionFactors,
) -> (Energy, Carbon) {
    let kwh = cpu_operations * factors.kwh_per_cpu_op
        + data_movement_units * factors.kwh_per_data_move;
    let co2_g = kwh * factors.gco2_per_kwh;
    (Energy::kilowatt_hours(kwh), Carbon::grams_co2e(co2_g))
}

/// Human-relatable equivalents of a CO2 mass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalentKind {
    /// Kilometers driven by an average electric vehicle on the same grid
    EvKilometers,
    /// Hours a mature tree needs to absorb the same mass
    TreeAbsorptionHours,
}

/// Map a CO2 mass to real-world equivalents.
///
/// Returns an empty map when the mass is at or below a negligible
/// threshold. The EV entry scales with the grid's carbon intensity: a
/// cleaner grid means each EV kilometer "costs" less CO2, so the same
/// emissions correspond to more kilometers.
pub fn real_world_equivalents(
    estimated_co2: Carbon,
    gco2_per_kwh: f64,
) -> BTreeMap<EquivalentKind, f64> {
    let mut equivalents = BTreeMap::new();
    if estimated_co2.0 <= EQUIVALENCE_THRESHOLD_G {
        return equivalents;
    }

    let gco2_per_km_ev = EV_EFFICIENCY_KWH_PER_KM * gco2_per_kwh;
    if gco2_per_km_ev > 0.0 {
        equivalents.insert(EquivalentKind::EvKilometers, estimated_co2.0 / gco2_per_km_ev);
    }

    equivalents.insert(
        EquivalentKind::TreeAbsorptionHours,
        estimated_co2.0 / GCO2_ABSORBED_BY_TREE_PER_HOUR,
    );

    equivalents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors() -> ConversionFactors {
        ConversionFactors::new(1.2e-10, 6e-11, 275.0)
    }

    #[test]
    fn test_zero_work_yields_zero_impact() {
        let (kwh, co2) = estimate_energy_co2(0.0, 0.0, &factors());
        assert_eq!(kwh, Energy::ZERO);
        assert_eq!(co2, Carbon::ZERO);
    }

    #[test]
    fn test_conversion_is_linear() {
        let (kwh_1, co2_1) = estimate_energy_co2(1_000_000.0, 500_000.0, &factors());
        let (kwh_2, co2_2) = estimate_energy_co2(2_000_000.0, 1_000_000.0, &factors());
        assert!((kwh_2.0 - 2.0 * kwh_1.0).abs() < 1e-18);
        assert!((co2_2.0 - 2.0 * co2_1.0).abs() < 1e-12);
    }

    #[test]
    fn test_conversion_formula() {
        let (kwh, co2) = estimate_energy_co2(1e9, 1e9, &factors());
        let expected_kwh = 1e9 * 1.2e-10 + 1e9 * 6e-11;
        assert!((kwh.0 - expected_kwh).abs() < 1e-12);
        assert!((co2.0 - expected_kwh * 275.0).abs() < 1e-9);
    }

    #[test]
    fn test_equivalents_empty_below_threshold() {
        assert!(real_world_equivalents(Carbon::ZERO, 275.0).is_empty());
        assert!(real_world_equivalents(Carbon::grams_co2e(1e-5), 275.0).is_empty());
    }

    #[test]
    fn test_equivalents_both_entries_positive() {
        let eq = real_world_equivalents(Carbon::grams_co2e(1000.0), 275.0);
        let km = eq[&EquivalentKind::EvKilometers];
        let hours = eq[&EquivalentKind::TreeAbsorptionHours];
        assert!(km > 0.0);
        assert!(hours > 0.0);
        // 1000 g / (0.18 * 275) g/km ~= 20.2 km
        assert!((km - 1000.0 / (0.18 * 275.0)).abs() < 1e-9);
        // 1000 g / ~2.511 g/h ~= 398 h
        assert!((hours - 1000.0 / (22_000.0 / 365.0 / 24.0)).abs() < 1e-9);
    }
}
