// SPDX-License-Identifier: PMPL-1.0-or-later

//! Freshness-bounded cache for live intensity readings.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How long a live reading stays valid; grid averages move slowly.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// One cached reading with its fetch time and lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedReading {
    /// Grid intensity in gCO2 per kWh
    pub value: f64,
    pub fetched_at: DateTime<Utc>,
    /// Seconds the reading stays fresh
    pub ttl_seconds: i64,
}

impl CachedReading {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < Duration::seconds(self.ttl_seconds)
    }
}

/// Per-zone cache of live readings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityCache {
    readings: HashMap<String, CachedReading>,
    /// TTL applied to newly stored readings
    ttl_seconds: i64,
}

impl Default for IntensityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IntensityCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(DEFAULT_TTL_HOURS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            readings: HashMap::new(),
            ttl_seconds: ttl.num_seconds(),
        }
    }

    /// Fresh value for a zone, if any
    pub fn get(&self, zone: &str, now: DateTime<Utc>) -> Option<f64> {
        self.readings
            .get(zone)
            .filter(|r| r.is_fresh(now))
            .map(|r| r.value)
    }

    pub fn store(&mut self, zone: &str, value: f64, now: DateTime<Utc>) {
        self.readings.insert(
            zone.to_string(),
            CachedReading {
                value,
                fetched_at: now,
                ttl_seconds: self.ttl_seconds,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_reading_is_returned() {
        let now = Utc::now();
        let mut cache = IntensityCache::new();
        cache.store("RO", 255.0, now);
        assert_eq!(cache.get("RO", now), Some(255.0));
        assert_eq!(cache.get("RO", now + Duration::hours(23)), Some(255.0));
    }

    #[test]
    fn test_stale_reading_expires() {
        let now = Utc::now();
        let mut cache = IntensityCache::new();
        cache.store("RO", 255.0, now);
        assert_eq!(cache.get("RO", now + Duration::hours(25)), None);
    }

    #[test]
    fn test_custom_ttl() {
        let now = Utc::now();
        let mut cache = IntensityCache::with_ttl(Duration::minutes(5));
        cache.store("FR", 56.0, now);
        assert_eq!(cache.get("FR", now + Duration::minutes(4)), Some(56.0));
        assert_eq!(cache.get("FR", now + Duration::minutes(6)), None);
    }

    #[test]
    fn test_missing_zone_is_none() {
        let cache = IntensityCache::new();
        assert_eq!(cache.get("DE", Utc::now()), None);
    }
}
