// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static per-country carbon-intensity table.
//!
//! Approximate recent annual averages, good enough for comparative
//! estimates when no live reading is available.

use serde::{Deserialize, Serialize};

/// EU-27 average grid intensity, the fallback of last resort
pub const DEFAULT_GCO2_PER_KWH: f64 = 275.0;

/// A grid zone with its average carbon intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonZone {
    /// Electricity Maps zone code (ISO 3166-1 alpha-2 for countries)
    pub code: &'static str,
    pub name: &'static str,
    /// Average grid intensity in gCO2 per kWh
    pub gco2_per_kwh: f64,
}

pub const CARBON_ZONES: [CarbonZone; 12] = [
    CarbonZone { code: "SE", name: "Sweden", gco2_per_kwh: 25.0 },
    CarbonZone { code: "FR", name: "France", gco2_per_kwh: 56.0 },
    CarbonZone { code: "AT", name: "Austria", gco2_per_kwh: 110.0 },
    CarbonZone { code: "ES", name: "Spain", gco2_per_kwh: 174.0 },
    CarbonZone { code: "GB", name: "United Kingdom", gco2_per_kwh: 215.0 },
    CarbonZone { code: "RO", name: "Romania", gco2_per_kwh: 255.0 },
    CarbonZone { code: "NL", name: "Netherlands", gco2_per_kwh: 268.0 },
    CarbonZone { code: "IE", name: "Ireland", gco2_per_kwh: 290.0 },
    CarbonZone { code: "IT", name: "Italy", gco2_per_kwh: 331.0 },
    CarbonZone { code: "DE", name: "Germany", gco2_per_kwh: 381.0 },
    CarbonZone { code: "US", name: "United States", gco2_per_kwh: 390.0 },
    CarbonZone { code: "PL", name: "Poland", gco2_per_kwh: 662.0 },
];

impl CarbonZone {
    /// Look up a zone by code, case-insensitively
    pub fn by_code(code: &str) -> Option<&'static CarbonZone> {
        CARBON_ZONES.iter().find(|z| z.code.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let zone = CarbonZone::by_code("fr").unwrap();
        assert_eq!(zone.code, "FR");
        assert_eq!(zone.gco2_per_kwh, 56.0);
    }

    #[test]
    fn test_unknown_zone_is_none() {
        assert!(CarbonZone::by_code("XX").is_none());
    }

    #[test]
    fn test_all_intensities_positive() {
        for zone in &CARBON_ZONES {
            assert!(zone.gco2_per_kwh > 0.0, "{}", zone.code);
        }
    }
}
