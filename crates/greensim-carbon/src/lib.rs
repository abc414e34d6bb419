// SPDX-License-Identifier: PMPL-1.0-or-later

//! Grid carbon-intensity sources.
//!
//! Every estimate ultimately multiplies energy by a grid factor in gCO2 per
//! kWh. This crate supplies that factor from three places, in decreasing
//! order of specificity: a live Electricity Maps zone reading (cached for a
//! day), a static per-country table, and the EU-average constant.
//!
//! Resolution never fails: when a live lookup is unavailable the source
//! degrades to the static table and finally to the EU average, logging the
//! downgrade as it goes.

pub mod cache;
pub mod client;
pub mod source;
pub mod zones;

pub use cache::IntensityCache;
pub use client::ElectricityMapsClient;
pub use source::{CarbonSource, IntensityOrigin, ResolvedIntensity};
pub use zones::{CarbonZone, CARBON_ZONES, DEFAULT_GCO2_PER_KWH};

use thiserror::Error;

/// Errors from live carbon-intensity lookups
#[derive(Error, Debug)]
pub enum CarbonError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API key not configured (set EM_API_KEY)")]
    MissingApiKey,

    #[error("API returned status {0}")]
    ApiStatus(reqwest::StatusCode),
}

pub type Result<T> = std::result::Result<T, CarbonError>;
