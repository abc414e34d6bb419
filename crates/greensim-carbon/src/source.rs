// SPDX-License-Identifier: PMPL-1.0-or-later

//! Carbon-intensity source selection and resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::cache::IntensityCache;
use crate::client::ElectricityMapsClient;
use crate::zones::{CarbonZone, DEFAULT_GCO2_PER_KWH};

/// Where the grid factor should come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CarbonSource {
    /// EU-average constant, no lookup at all
    EuAverage,
    /// Static table entry for a country code
    Country { code: String },
    /// Live Electricity Maps reading for a zone, cached
    LiveZone { zone: String },
}

/// Where a resolved factor actually came from, after any fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum IntensityOrigin {
    EuAverage,
    StaticTable { zone: String },
    Live { zone: String },
}

impl fmt::Display for IntensityOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntensityOrigin::EuAverage => write!(f, "EU average"),
            IntensityOrigin::StaticTable { zone } => write!(f, "static table ({})", zone),
            IntensityOrigin::Live { zone } => write!(f, "live reading ({})", zone),
        }
    }
}

/// A grid factor plus the provenance it ended up with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIntensity {
    pub gco2_per_kwh: f64,
    pub origin: IntensityOrigin,
}

impl CarbonSource {
    /// Resolve this source to a concrete grid factor.
    ///
    /// Resolution is infallible: a failed live lookup degrades to the static
    /// table for the same zone, and an unknown zone degrades to the EU
    /// average. Each downgrade is logged, never surfaced as an error.
    pub fn resolve(
        &self,
        client: &ElectricityMapsClient,
        cache: &mut IntensityCache,
    ) -> ResolvedIntensity {
        match self {
            CarbonSource::EuAverage => ResolvedIntensity {
                gco2_per_kwh: DEFAULT_GCO2_PER_KWH,
                origin: IntensityOrigin::EuAverage,
            },
            CarbonSource::Country { code } => Self::from_table(code),
            CarbonSource::LiveZone { zone } => match client.latest_intensity(zone, cache) {
                Ok(value) => ResolvedIntensity {
                    gco2_per_kwh: value,
                    origin: IntensityOrigin::Live { zone: zone.clone() },
                },
                Err(err) => {
                    warn!(zone, %err, "live intensity lookup failed, falling back");
                    Self::from_table(zone)
                }
            },
        }
    }

    fn from_table(code: &str) -> ResolvedIntensity {
        match CarbonZone::by_code(code) {
            Some(zone) => ResolvedIntensity {
                gco2_per_kwh: zone.gco2_per_kwh,
                origin: IntensityOrigin::StaticTable {
                    zone: zone.code.to_string(),
                },
            },
            None => {
                warn!(code, "unknown zone, using EU average");
                ResolvedIntensity {
                    gco2_per_kwh: DEFAULT_GCO2_PER_KWH,
                    origin: IntensityOrigin::EuAverage,
                }
            }
        }
    }
}
