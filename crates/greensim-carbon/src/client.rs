// SPDX-License-Identifier: PMPL-1.0-or-later

//! Electricity Maps API client.
//!
//! # Security considerations
//!
//! - The API key is read from the `EM_API_KEY` environment variable and
//!   passed only in the `auth-token` header. It is never logged, serialized,
//!   or included in error messages.

use chrono::Utc;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::cache::IntensityCache;
use crate::{CarbonError, Result};

/// Client for the Electricity Maps carbon-intensity API
pub struct ElectricityMapsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LatestIntensity {
    #[serde(rename = "carbonIntensity")]
    carbon_intensity: f64,
}

impl ElectricityMapsClient {
    /// Create a client reading the key from `EM_API_KEY` and the base URL
    /// from `EM_API_URL` (defaulting to the public v3 endpoint).
    pub fn from_env() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("EM_API_URL")
                .unwrap_or_else(|_| "https://api.electricitymap.org/v3".to_string()),
            api_key: std::env::var("EM_API_KEY").ok(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Latest grid intensity for a zone in gCO2 per kWh, going through the
    /// cache: a fresh cached reading short-circuits the network entirely.
    pub fn latest_intensity(&self, zone: &str, cache: &mut IntensityCache) -> Result<f64> {
        let now = Utc::now();
        if let Some(value) = cache.get(zone, now) {
            debug!(zone, value, "using cached carbon intensity");
            return Ok(value);
        }

        let value = self.fetch_latest(zone)?;
        cache.store(zone, value, now);
        Ok(value)
    }

    fn fetch_latest(&self, zone: &str) -> Result<f64> {
        let key = self.api_key.as_ref().ok_or(CarbonError::MissingApiKey)?;
        let url = format!("{}/carbon-intensity/latest", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("zone", zone)])
            .header("auth-token", key)
            .header("User-Agent", "greensim")
            .send()?;

        if !response.status().is_success() {
            return Err(CarbonError::ApiStatus(response.status()));
        }

        let latest: LatestIntensity = response.json()?;
        debug!(zone, value = latest.carbon_intensity, "fetched carbon intensity");
        Ok(latest.carbon_intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_reported_without_network() {
        let client = ElectricityMapsClient {
            client: Client::new(),
            base_url: "http://localhost:1".to_string(),
            api_key: None,
        };
        let mut cache = IntensityCache::new();
        let err = client.latest_intensity("RO", &mut cache).unwrap_err();
        assert!(matches!(err, CarbonError::MissingApiKey));
    }

    #[test]
    fn test_cached_reading_short_circuits_network() {
        // Unroutable base URL: any network attempt would error out.
        let client = ElectricityMapsClient {
            client: Client::new(),
            base_url: "http://localhost:1".to_string(),
            api_key: Some("test-key".to_string()),
        };
        let mut cache = IntensityCache::new();
        cache.store("RO", 255.0, Utc::now());
        let value = client.latest_intensity("RO", &mut cache).unwrap();
        assert_eq!(value, 255.0);
    }
}
