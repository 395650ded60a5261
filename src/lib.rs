//! route-sampler
//!
//! Stochastic route ordering: samples a bounded pool of stop permutations,
//! scores each with a multi-factor fitness heuristic and returns the best one,
//! alongside simpler comparison strategies.

pub mod config;
pub mod constraints;
pub mod error;
pub mod fitness;
pub mod haversine;
pub mod report;
pub mod sampler;
pub mod selector;
pub mod solver;
pub mod status;
pub mod stop;
pub mod strategy;
pub mod traits;
