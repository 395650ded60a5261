//! Caller-supplied routing limits.
//!
//! Limits are soft: a candidate that exceeds `max_distance` or `max_time` stays
//! in the pool but pays a fitness penalty per violated limit. Vehicle capacity,
//! weather awareness, time windows and priorities are advisory only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Maximum route length in kilometers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    /// Maximum driving time in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_capacity: Option<u32>,
    /// Unset means traffic-aware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_aware: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_aware: Option<bool>,
}

impl Constraints {
    pub fn with_max_distance(mut self, km: f64) -> Self {
        self.max_distance = Some(km);
        self
    }

    pub fn with_max_time(mut self, hours: f64) -> Self {
        self.max_time = Some(hours);
        self
    }

    pub fn with_traffic_aware(mut self, enabled: bool) -> Self {
        self.traffic_aware = Some(enabled);
        self
    }

    pub fn is_traffic_aware(&self) -> bool {
        self.traffic_aware.unwrap_or(true)
    }

    /// Number of soft limits a route of the given length and duration exceeds.
    pub fn violations(&self, distance_km: f64, hours: f64) -> u32 {
        let over_distance = self.max_distance.is_some_and(|limit| distance_km > limit);
        let over_time = self.max_time.is_some_and(|limit| hours > limit);
        u32::from(over_distance) + u32::from(over_time)
    }
}
