// SPDX-License-Identifier: PMPL-1.0-or-later
//! End-to-end properties of the model engine that hold across every
//! scenario, profile, and variant.

use greensim_models::{
    real_world_equivalents, Carbon, ConversionFactors, EquivalentKind, HardwareProfile,
    MemoryFootprint, ModelKind, Scenario, WorkloadParams, HARDWARE_PROFILES,
};

fn default_factors() -> ConversionFactors {
    let p = HardwareProfile::default_profile();
    ConversionFactors::new(p.kwh_per_cpu_op, p.kwh_per_data_move, 275.0)
}

#[test]
fn test_every_default_workload_is_applicable_on_every_profile() {
    for scenario in Scenario::ALL {
        let params = WorkloadParams::defaults(scenario);
        for profile in &HARDWARE_PROFILES {
            let factors =
                ConversionFactors::new(profile.kwh_per_cpu_op, profile.kwh_per_data_move, 275.0);
            for result in params.run_all(&factors) {
                assert!(result.is_applicable(), "{} on {}", result.kind, profile.id);
                assert!(result.estimated_energy.0 > 0.0);
                assert!(result.estimated_co2.0 > 0.0);
            }
        }
    }
}

#[test]
fn test_green_variants_reduce_energy_at_defaults() {
    let factors = default_factors();
    for scenario in Scenario::ALL {
        let results = WorkloadParams::defaults(scenario).run_all(&factors);
        let standard = &results[0];
        for green in &results[1..] {
            assert!(
                green.estimated_energy.0 < standard.estimated_energy.0,
                "{} should use less energy than {}",
                green.kind,
                standard.kind
            );
            assert!(green.estimated_co2.0 < standard.estimated_co2.0);
        }
    }
}

#[test]
fn test_results_are_deterministic() {
    let factors = default_factors();
    for scenario in Scenario::ALL {
        let params = WorkloadParams::defaults(scenario);
        assert_eq!(params.run_all(&factors), params.run_all(&factors));
    }
}

#[test]
fn test_co2_scales_linearly_with_grid_intensity() {
    let p = HardwareProfile::default_profile();
    let clean = ConversionFactors::new(p.kwh_per_cpu_op, p.kwh_per_data_move, 50.0);
    let dirty = ConversionFactors::new(p.kwh_per_cpu_op, p.kwh_per_data_move, 500.0);

    let params = WorkloadParams::defaults(Scenario::SalesReport);
    let low = &params.run_all(&clean)[0];
    let high = &params.run_all(&dirty)[0];

    assert_eq!(low.estimated_energy, high.estimated_energy);
    let ratio = high.estimated_co2.0 / low.estimated_co2.0;
    assert!((ratio - 10.0).abs() < 1e-9, "ratio {}", ratio);
}

#[test]
fn test_index_sort_peak_memory_contract() {
    let factors = default_factors();
    let results = WorkloadParams::Sort {
        records: 1000.0,
        avg_record_size: 100.0,
        key_index_pair_size: 5.0,
    }
    .run_all(&factors);

    let indexed = results
        .iter()
        .find(|r| r.kind == ModelKind::IndexSort)
        .unwrap();
    assert_eq!(indexed.memory, MemoryFootprint::Peak(105_000.0));
}

#[test]
fn test_equivalents_thresholds() {
    let negligible = real_world_equivalents(Carbon(1e-5), 275.0);
    assert!(negligible.is_empty());

    let meaningful = real_world_equivalents(Carbon(1000.0), 275.0);
    let km = meaningful[&EquivalentKind::EvKilometers];
    let hours = meaningful[&EquivalentKind::TreeAbsorptionHours];
    assert!(km > 0.0);
    assert!(hours > 0.0);
}

#[test]
fn test_sentinel_propagates_through_run_all() {
    let factors = default_factors();
    let params = WorkloadParams::LogFilter {
        lines: 0.0,
        avg_line_length: 150.0,
        error_percentage: 5.0,
        error_message_size: 50.0,
    };
    for result in params.run_all(&factors) {
        assert!(!result.is_applicable());
        assert_eq!(result.memory.units(), 0.0);
        // Identity survives the sentinel
        assert!(!result.complexity.cpu.is_empty());
    }
}

#[test]
fn test_results_serialize_with_tagged_memory() {
    let factors = default_factors();
    let results = WorkloadParams::defaults(Scenario::LogFilter).run_all(&factors);
    let json = serde_json::to_value(&results).unwrap();

    let standard = &json[0];
    assert_eq!(standard["memory"]["kind"], "resident");
    let green = &json[1];
    assert_eq!(green["memory"]["kind"], "peak");
    assert!(green["memory"]["units"].as_f64().unwrap() > 0.0);
}
