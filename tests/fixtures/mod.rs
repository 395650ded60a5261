//! Test fixtures for route-sampler.
//!
//! Provides real Bucharest city-centre locations (from OpenStreetMap).

pub mod bucharest_locations;

pub use bucharest_locations::*;
