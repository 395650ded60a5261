//! Stops supplied by the caller.
//!
//! A stop is an immutable value: the engine only ever reorders stops, it never
//! edits, adds or removes them.

use serde::{Deserialize, Serialize};

/// Role of a stop on the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Delivery,
    Waypoint,
}

/// Service window, carried through untouched (e.g. "09:00" / "11:30").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

/// A point to visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Latitude in degrees (-90..90).
    pub lat: f64,
    /// Longitude in degrees (-180..180).
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub kind: StopKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Stop {
    pub fn new(lat: f64, lng: f64, kind: StopKind) -> Self {
        Self {
            lat,
            lng,
            address: None,
            kind,
            time_window: None,
            priority: None,
        }
    }

    pub fn waypoint(lat: f64, lng: f64) -> Self {
        Self::new(lat, lng, StopKind::Waypoint)
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_time_window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.time_window = Some(TimeWindow {
            start: start.into(),
            end: end.into(),
        });
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Location coordinates (lat, lng).
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// True when both coordinates are finite and inside their documented ranges.
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}
