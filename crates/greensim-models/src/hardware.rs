// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hardware profile catalog.
//!
//! Each profile maps abstract operation counts to kWh. The catalog is a
//! small fixed table; exactly one profile is active per run.

use serde::{Deserialize, Serialize};

/// A named pair of energy conversion factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Stable identifier used on the CLI and in run history
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// kWh consumed per abstract CPU operation
    pub kwh_per_cpu_op: f64,
    /// kWh consumed per abstract unit of data moved
    pub kwh_per_data_move: f64,
    pub description: &'static str,
}

/// Identifier of the profile used when none is selected
pub const DEFAULT_PROFILE_ID: &str = "desktop";

/// The fixed profile catalog
pub const HARDWARE_PROFILES: [HardwareProfile; 5] = [
    HardwareProfile {
        id: "laptop",
        name: "Modern Efficient Laptop",
        kwh_per_cpu_op: 8e-11,
        kwh_per_data_move: 4e-11,
        description: "Low-power mobile hardware.",
    },
    HardwareProfile {
        id: "desktop",
        name: "Mid-range Desktop",
        kwh_per_cpu_op: 1.2e-10,
        kwh_per_data_move: 6e-11,
        description: "Balanced performance and consumption.",
    },
    HardwareProfile {
        id: "server",
        name: "High-end Server / Gaming Desktop",
        kwh_per_cpu_op: 2.0e-10,
        kwh_per_data_move: 1.0e-10,
        description: "Maximum performance, highest draw.",
    },
    HardwareProfile {
        id: "iot",
        name: "IoT / Embedded Device",
        kwh_per_cpu_op: 3e-11,
        kwh_per_data_move: 2e-11,
        description: "Minimal consumption.",
    },
    HardwareProfile {
        id: "cloud-vm",
        name: "Cloud VM (General Purpose)",
        kwh_per_cpu_op: 1.0e-10,
        kwh_per_data_move: 5e-11,
        description: "General-purpose virtualized instance.",
    },
];

impl HardwareProfile {
    /// Look up a profile by its identifier
    pub fn by_id(id: &str) -> Option<&'static HardwareProfile> {
        HARDWARE_PROFILES.iter().find(|p| p.id == id)
    }

    /// The default catalog entry
    pub fn default_profile() -> &'static HardwareProfile {
        // The catalog is fixed, the default id always resolves.
        HardwareProfile::by_id(DEFAULT_PROFILE_ID).unwrap_or(&HARDWARE_PROFILES[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_positive_profiles() {
        assert_eq!(HARDWARE_PROFILES.len(), 5);
        for profile in &HARDWARE_PROFILES {
            assert!(profile.kwh_per_cpu_op > 0.0, "{}", profile.id);
            assert!(profile.kwh_per_data_move > 0.0, "{}", profile.id);
        }
    }

    #[test]
    fn test_default_profile_resolves() {
        let profile = HardwareProfile::default_profile();
        assert_eq!(profile.id, DEFAULT_PROFILE_ID);
        assert_eq!(profile.kwh_per_cpu_op, 1.2e-10);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(HardwareProfile::by_id("mainframe").is_none());
    }
}
