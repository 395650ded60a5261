//! Read-only status and performance snapshots for dashboards.
//!
//! Only the configured constants are real; every other figure is a synthetic
//! presentation value drawn from the caller's RNG.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::OptimizerConfig;
use crate::error::{ConfigError, OptimizeError};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsQuery {
    #[default]
    Status,
    Performance,
}

impl FromStr for MetricsQuery {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(MetricsQuery::Status),
            "performance" => Ok(MetricsQuery::Performance),
            other => Err(ConfigError::UnknownMetricsType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub core_status: String,
    pub coherence_level: f64,
    pub coherence_time: f64,
    pub fidelity: f64,
    pub sample_cap: usize,
    pub entanglement_factor: f64,
    pub strategies: Vec<Strategy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub routes_optimized: u32,
    pub average_improvement: f64,
    pub advantage: f64,
    pub energy_savings: f64,
    pub processing_speed: f64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetricsReport {
    Status(EngineStatus),
    Performance(PerformanceSnapshot),
}

pub fn status<R: Rng>(config: &OptimizerConfig, rng: &mut R) -> EngineStatus {
    EngineStatus {
        core_status: "online".to_string(),
        coherence_level: 89.2 + rng.random::<f64>() * 10.0,
        coherence_time: 0.147 + rng.random::<f64>() * 0.1,
        fidelity: 0.999 + rng.random::<f64>() * 0.001,
        sample_cap: config.sample_cap,
        entanglement_factor: config.entanglement_factor,
        strategies: Strategy::ALL.to_vec(),
    }
}

pub fn performance<R: Rng>(rng: &mut R) -> PerformanceSnapshot {
    PerformanceSnapshot {
        routes_optimized: 247 + rng.random_range(0..10),
        average_improvement: 23.7 + rng.random::<f64>() * 5.0,
        advantage: 15.2 + rng.random::<f64>() * 8.0,
        energy_savings: 18.9 + rng.random::<f64>() * 6.0,
        processing_speed: 0.347 + rng.random::<f64>() * 0.2,
        accuracy: 98.9 + rng.random::<f64>() * 1.1,
    }
}

/// Answers a metrics query by name (`status` or `performance`).
pub fn query<R: Rng>(
    kind: &str,
    config: &OptimizerConfig,
    rng: &mut R,
) -> Result<MetricsReport, OptimizeError> {
    let report = match kind.parse::<MetricsQuery>()? {
        MetricsQuery::Status => MetricsReport::Status(status(config, rng)),
        MetricsQuery::Performance => MetricsReport::Performance(performance(rng)),
    };
    Ok(report)
}
