//! Real Bucharest city-centre locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap, rounded to four decimals.

use route_sampler::stop::{Stop, StopKind};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn stop(&self, kind: StopKind) -> Stop {
        Stop::new(self.lat, self.lng, kind).with_address(self.name)
    }

    pub fn waypoint(&self) -> Stop {
        self.stop(StopKind::Waypoint)
    }
}

// ============================================================================
// Old Town / Unirii loop (44.42-44.44 N, 26.09-26.12 E)
// ============================================================================

pub const CITY_LOOP: &[Location] = &[
    Location::new("Piata Unirii", 44.4268, 26.1025),
    Location::new("Piata Universitatii", 44.4355, 26.1011),
    Location::new("Piata Rosetti", 44.4343, 26.1094),
    Location::new("Piata Alba Iulia", 44.4255, 26.1197),
];

// ============================================================================
// Wider centre
// ============================================================================

pub const CENTRE: &[Location] = &[
    Location::new("Biserica Stavropoleos", 44.4315, 26.0977),
    Location::new("Hanul lui Manuc", 44.4306, 26.1009),
    Location::new("Ateneul Roman", 44.4413, 26.0973),
    Location::new("Palatul Parlamentului", 44.4275, 26.0873),
    Location::new("Parcul Carol", 44.4183, 26.0986),
    Location::new("Gradina Icoanei", 44.4447, 26.1049),
    Location::new("Piata Romana", 44.4466, 26.0974),
    Location::new("Parcul Cismigiu", 44.4377, 26.0912),
];

/// City loop followed by the wider centre (12 stops).
pub fn all_locations() -> Vec<Location> {
    CITY_LOOP.iter().chain(CENTRE.iter()).cloned().collect()
}

/// City loop as waypoint stops, pickups and deliveries alternating.
pub fn city_loop_stops() -> Vec<Stop> {
    CITY_LOOP
        .iter()
        .enumerate()
        .map(|(i, loc)| {
            if i % 2 == 0 {
                loc.stop(StopKind::Pickup)
            } else {
                loc.stop(StopKind::Delivery)
            }
        })
        .collect()
}

/// Two stops roughly 5 km apart (due north of Piata Unirii).
pub fn five_km_pair() -> Vec<Stop> {
    vec![
        Location::new("Piata Unirii", 44.4268, 26.1025).waypoint(),
        Location::new("North, 5 km", 44.4718, 26.1025).waypoint(),
    ]
}
