//! Request/response envelope for the optimize operation.
//!
//! Hosts deserialize an [`OptimizeRequest`], call [`respond`], and serialize the
//! [`OptimizeResponse`]. Comparative figures are computed against the caller's
//! own stop order, and the reported total distance is recomputed with the
//! Haversine formula regardless of the optimizer's matrix provider.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::constraints::Constraints;
use crate::error::OptimizeError;
use crate::haversine::route_distance;
use crate::solver::{OptimizationResult, RouteOptimizer};
use crate::stop::Stop;
use crate::strategy::Strategy;
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(alias = "points")]
    pub stops: Vec<Stop>,
    /// Informational; the engine plans a single route.
    #[serde(default = "default_vehicle_count")]
    pub vehicle_count: u32,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default = "default_strategy", alias = "algorithm")]
    pub strategy: String,
    /// Strategy to run if the requested one hits an internal error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

fn default_vehicle_count() -> u32 {
    1
}

fn default_strategy() -> String {
    Strategy::Primary.to_string()
}

impl OptimizeRequest {
    pub fn new(stops: Vec<Stop>) -> Self {
        Self {
            stops,
            vehicle_count: default_vehicle_count(),
            constraints: Constraints::default(),
            strategy: default_strategy(),
            fallback: None,
        }
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_fallback(mut self, strategy: impl Into<String>) -> Self {
        self.fallback = Some(strategy.into());
        self
    }
}

/// Percent reductions of the optimized route relative to the input order.
/// Negative values mean the optimized route is longer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvements {
    pub distance_reduction: f64,
    pub time_reduction: f64,
    pub cost_reduction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteComparison {
    pub original_route: Vec<Stop>,
    pub optimized_route: Vec<Stop>,
    pub improvements: Improvements,
}

/// Scoring figures of the winning candidate (primary strategy only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyMetrics {
    pub entanglement_level: f64,
    pub coherence_level: f64,
    pub sample_cap: usize,
    pub pool_size: usize,
    pub fitness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_distance_km: f64,
    pub estimated_time_minutes: f64,
    pub fuel_savings: f64,
    pub co2_reduction: f64,
    /// Primary: percent shorter than the pool's mean sampled distance.
    /// Blended: the synthetic blended advantage. Baseline: absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub strategy: Strategy,
    pub fallback_used: bool,
    pub vehicle_count: u32,
    pub optimization: RouteComparison,
    pub strategy_metrics: Option<StrategyMetrics>,
    pub performance: PerformanceMetrics,
    /// Measured wall-clock cost in milliseconds.
    pub processing_time_ms: f64,
    /// Synthetic per-strategy latency in seconds.
    pub nominal_latency_secs: f64,
}

/// Runs the optimize operation for a decoded request.
///
/// A fallback strategy only runs when the requested one fails with an
/// internal invariant error; caller errors are always returned as-is. The
/// reported processing time covers the whole call, fallback included.
#[instrument(
    skip_all,
    fields(stops = request.stops.len(), vehicles = request.vehicle_count)
)]
pub fn respond<M, R>(
    optimizer: &RouteOptimizer<M>,
    request: &OptimizeRequest,
    rng: &mut R,
) -> Result<OptimizeResponse, OptimizeError>
where
    M: DistanceMatrixProvider,
    R: Rng,
{
    let started = Instant::now();
    optimizer.validate_stops(&request.stops)?;
    let strategy: Strategy = request.strategy.parse()?;
    let fallback: Option<Strategy> = request
        .fallback
        .as_deref()
        .map(str::parse::<Strategy>)
        .transpose()?;

    let attempt = optimizer.run(&request.stops, &request.constraints, strategy, rng);
    let (result, fallback_used) = match attempt {
        Ok(result) => (result, false),
        Err(err) if err.is_internal() => match fallback {
            Some(fallback) => {
                warn!(code = err.code(), %fallback, "Running fallback strategy");
                (optimizer.run(&request.stops, &request.constraints, fallback, rng)?, true)
            }
            None => return Err(err),
        },
        Err(err) => return Err(err),
    };

    Ok(build_response(
        optimizer,
        request,
        result,
        fallback_used,
        started.elapsed(),
    ))
}

fn build_response<M: DistanceMatrixProvider>(
    optimizer: &RouteOptimizer<M>,
    request: &OptimizeRequest,
    result: OptimizationResult,
    fallback_used: bool,
    elapsed: Duration,
) -> OptimizeResponse {
    let config = optimizer.config();
    let original_km = route_distance(&request.stops);
    let optimized_km = route_distance(&result.route);

    let improvements = Improvements {
        distance_reduction: reduction_pct(original_km, optimized_km),
        time_reduction: reduction_pct(
            config.travel_hours(original_km),
            config.travel_hours(optimized_km),
        ),
        cost_reduction: reduction_pct(
            config.route_cost(original_km),
            config.route_cost(optimized_km),
        ),
    };

    let strategy_metrics = match (result.fitness, result.coherence, result.entanglement) {
        (Some(fitness), Some(coherence_level), Some(entanglement_level)) => Some(StrategyMetrics {
            entanglement_level,
            coherence_level,
            sample_cap: config.sample_cap,
            pool_size: result.pool.as_ref().map_or(0, |pool| pool.size),
            fitness,
        }),
        _ => None,
    };

    let advantage = match &result.pool {
        Some(pool) => Some(reduction_pct(pool.mean_distance_km, optimized_km)),
        None => result.blended_advantage,
    };

    let savings = improvements.distance_reduction.max(0.0);
    let performance = PerformanceMetrics {
        total_distance_km: optimized_km,
        estimated_time_minutes: config.travel_hours(optimized_km) * 60.0,
        fuel_savings: savings,
        co2_reduction: savings,
        advantage,
    };

    OptimizeResponse {
        strategy: result.strategy,
        fallback_used,
        vehicle_count: request.vehicle_count,
        optimization: RouteComparison {
            original_route: request.stops.clone(),
            optimized_route: result.route,
            improvements,
        },
        strategy_metrics,
        performance,
        processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        nominal_latency_secs: result.nominal_latency_secs,
    }
}

fn reduction_pct(before: f64, after: f64) -> f64 {
    if before > 0.0 {
        (before - after) / before * 100.0
    } else {
        0.0
    }
}
