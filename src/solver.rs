//! Route optimizer (orchestrator).
//!
//! Validates the request, then runs the selected strategy:
//! - `primary`: sample a pool, score it, keep the fittest ordering.
//! - `baseline`: one unscored shuffle.
//! - `blended`: one unscored shuffle plus a synthetic blended-advantage figure.
//!
//! Every call is self-contained; the optimizer holds only immutable settings.

use std::time::{Duration, Instant};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, error, info, instrument, warn};

use crate::config::OptimizerConfig;
use crate::constraints::Constraints;
use crate::error::{InputError, OptimizeError};
use crate::fitness::{FitnessEvaluator, ScoredCandidate};
use crate::haversine::HaversineMatrix;
use crate::sampler;
use crate::selector;
use crate::stop::Stop;
use crate::strategy::Strategy;
use crate::traits::{DistanceMatrix, DistanceMatrixProvider};

/// Aggregate view of a scored pool.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSummary {
    pub size: usize,
    pub best_distance_km: f64,
    pub worst_distance_km: f64,
    pub mean_distance_km: f64,
    pub mean_fitness: f64,
}

impl PoolSummary {
    fn from_scored(scored: &[ScoredCandidate]) -> Option<Self> {
        if scored.is_empty() {
            return None;
        }
        let size = scored.len();
        let mut best_distance_km = f64::INFINITY;
        let mut worst_distance_km = f64::NEG_INFINITY;
        let mut distance_sum = 0.0;
        let mut fitness_sum = 0.0;
        for item in scored {
            best_distance_km = best_distance_km.min(item.distance_km);
            worst_distance_km = worst_distance_km.max(item.distance_km);
            distance_sum += item.distance_km;
            fitness_sum += item.fitness;
        }
        Some(Self {
            size,
            best_distance_km,
            worst_distance_km,
            mean_distance_km: distance_sum / size as f64,
            mean_fitness: fitness_sum / size as f64,
        })
    }
}

/// Outcome of one optimization call.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    pub strategy: Strategy,
    /// Chosen ordering as positions into the input stop list.
    pub order: Vec<usize>,
    /// Chosen ordering as stops.
    pub route: Vec<Stop>,
    /// Present for `primary` only.
    pub fitness: Option<f64>,
    pub coherence: Option<f64>,
    pub entanglement: Option<f64>,
    pub traffic: Option<f64>,
    /// Present for `blended` only.
    pub blended_advantage: Option<f64>,
    /// Present for `primary` only.
    pub pool: Option<PoolSummary>,
    /// Measured wall-clock cost of the call.
    pub processing_time: Duration,
    /// Synthetic per-strategy latency figure in seconds, for comparative output.
    pub nominal_latency_secs: f64,
}

#[derive(Debug, Clone)]
pub struct RouteOptimizer<M = HaversineMatrix> {
    config: OptimizerConfig,
    provider: M,
}

impl RouteOptimizer<HaversineMatrix> {
    pub fn new(config: OptimizerConfig) -> Self {
        Self::with_provider(config, HaversineMatrix)
    }
}

impl Default for RouteOptimizer<HaversineMatrix> {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

impl<M: DistanceMatrixProvider> RouteOptimizer<M> {
    pub fn with_provider(config: OptimizerConfig, provider: M) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes `stops` with the strategy named by `strategy`.
    ///
    /// Input is validated before the strategy name is resolved; an unknown
    /// name fails before any sampling happens.
    pub fn optimize<R: Rng>(
        &self,
        stops: &[Stop],
        constraints: &Constraints,
        strategy: &str,
        rng: &mut R,
    ) -> Result<OptimizationResult, OptimizeError> {
        self.validate_stops(stops).inspect_err(log_failure)?;
        let strategy = strategy
            .parse::<Strategy>()
            .map_err(OptimizeError::from)
            .inspect_err(log_failure)?;
        self.run(stops, constraints, strategy, rng)
    }

    /// Same as [`RouteOptimizer::optimize`] with a seeded RNG.
    pub fn optimize_with_seed(
        &self,
        stops: &[Stop],
        constraints: &Constraints,
        strategy: &str,
        seed: u64,
    ) -> Result<OptimizationResult, OptimizeError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.optimize(stops, constraints, strategy, &mut rng)
    }

    /// Runs an already-resolved strategy.
    #[instrument(skip_all, fields(stops = stops.len(), strategy = %strategy))]
    pub fn run<R: Rng>(
        &self,
        stops: &[Stop],
        constraints: &Constraints,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<OptimizationResult, OptimizeError> {
        self.config
            .validate()
            .map_err(OptimizeError::from)
            .inspect_err(log_failure)?;
        self.validate_stops(stops).inspect_err(log_failure)?;

        let started = Instant::now();
        let mut result = match strategy {
            Strategy::Primary => self.primary(stops, constraints, rng),
            Strategy::Baseline => Ok(shuffled(stops, strategy, rng)),
            Strategy::Blended => {
                let mut result = shuffled(stops, strategy, rng);
                result.blended_advantage = Some(5.0 + rng.random::<f64>() * 10.0);
                Ok(result)
            }
        }
        .inspect_err(log_failure)?;

        result.nominal_latency_secs = strategy.nominal_latency(rng);
        result.processing_time = started.elapsed();

        info!(
            fitness = ?result.fitness,
            elapsed_ms = result.processing_time.as_secs_f64() * 1000.0,
            "Route optimized"
        );
        Ok(result)
    }

    /// Checks the stop count and, when enabled, coordinate ranges.
    pub(crate) fn validate_stops(&self, stops: &[Stop]) -> Result<(), OptimizeError> {
        if stops.len() < 2 {
            return Err(InputError::InsufficientStops(stops.len()).into());
        }
        if self.config.validate_coordinates {
            if let Some((index, stop)) = stops
                .iter()
                .enumerate()
                .find(|(_, stop)| !stop.has_valid_coordinates())
            {
                return Err(InputError::InvalidCoordinates {
                    index,
                    lat: stop.lat,
                    lng: stop.lng,
                }
                .into());
            }
        }
        Ok(())
    }

    fn primary<R: Rng>(
        &self,
        stops: &[Stop],
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<OptimizationResult, OptimizeError> {
        let locations: Vec<(f64, f64)> = stops.iter().map(Stop::location).collect();
        let matrix = DistanceMatrix::build(&self.provider, &locations)?;

        let pool = sampler::sample(stops.len(), self.config.sample_cap, rng);
        debug!(pool_size = pool.len(), "Sampled candidate pool");

        let evaluator = FitnessEvaluator::new(&matrix, &self.config);
        let scored = evaluator.score_pool(&pool, constraints, rng)?;
        let summary = PoolSummary::from_scored(&scored);
        let best = selector::select(scored)?;

        debug!(
            distance_km = best.distance_km,
            fitness = best.fitness,
            violations = best.violations,
            "Selected candidate"
        );

        Ok(OptimizationResult {
            strategy: Strategy::Primary,
            route: materialize(stops, &best.candidate.order),
            order: best.candidate.order,
            fitness: Some(best.fitness),
            coherence: Some(best.coherence),
            entanglement: Some(best.entanglement),
            traffic: Some(best.traffic),
            blended_advantage: None,
            pool: summary,
            processing_time: Duration::ZERO,
            nominal_latency_secs: 0.0,
        })
    }
}

/// Unscored uniform shuffle of the input.
fn shuffled<R: Rng>(stops: &[Stop], strategy: Strategy, rng: &mut R) -> OptimizationResult {
    let mut order: Vec<usize> = (0..stops.len()).collect();
    order.shuffle(rng);

    OptimizationResult {
        strategy,
        route: materialize(stops, &order),
        order,
        fitness: None,
        coherence: None,
        entanglement: None,
        traffic: None,
        blended_advantage: None,
        pool: None,
        processing_time: Duration::ZERO,
        nominal_latency_secs: 0.0,
    }
}

fn materialize(stops: &[Stop], order: &[usize]) -> Vec<Stop> {
    order.iter().map(|&index| stops[index].clone()).collect()
}

fn log_failure(err: &OptimizeError) {
    if err.is_internal() {
        error!(code = err.code(), "Route optimization invariant violated: {err}");
    } else {
        warn!(code = err.code(), "Route optimization rejected: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, InvariantError};

    fn loop_stops() -> Vec<Stop> {
        vec![
            Stop::waypoint(44.4268, 26.1025),
            Stop::waypoint(44.4355, 26.0960),
            Stop::waypoint(44.4396, 26.1128),
            Stop::waypoint(44.4220, 26.1190),
        ]
    }

    #[test]
    fn test_primary_reports_metrics() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let result = optimizer
            .optimize_with_seed(&loop_stops(), &Constraints::default(), "primary", 1)
            .unwrap();

        assert_eq!(result.strategy, Strategy::Primary);
        assert_eq!(result.route.len(), 4);
        assert!(result.fitness.is_some());
        assert!(result.coherence.is_some());
        assert!(result.entanglement.is_some());
        assert_eq!(result.pool.as_ref().map(|p| p.size), Some(6));
        assert!(result.blended_advantage.is_none());
    }

    #[test]
    fn test_same_seed_same_route() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let a = optimizer
            .optimize_with_seed(&loop_stops(), &Constraints::default(), "primary", 77)
            .unwrap();
        let b = optimizer
            .optimize_with_seed(&loop_stops(), &Constraints::default(), "primary", 77)
            .unwrap();
        assert_eq!(a.order, b.order);
        assert_eq!(a.fitness, b.fitness);
    }

    #[test]
    fn test_baseline_has_no_scoring_fields() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let result = optimizer
            .optimize_with_seed(&loop_stops(), &Constraints::default(), "baseline", 2)
            .unwrap();
        assert!(result.fitness.is_none());
        assert!(result.coherence.is_none());
        assert!(result.entanglement.is_none());
        assert!(result.pool.is_none());
        assert!(result.nominal_latency_secs >= 2.0);
    }

    #[test]
    fn test_blended_reports_advantage() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let result = optimizer
            .optimize_with_seed(&loop_stops(), &Constraints::default(), "blended", 3)
            .unwrap();
        let advantage = result.blended_advantage.unwrap();
        assert!((5.0..15.0).contains(&advantage));
        assert!(result.fitness.is_none());
        assert!((1.0..3.0).contains(&result.nominal_latency_secs));
    }

    #[test]
    fn test_rejects_single_stop() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let err = optimizer
            .optimize_with_seed(&loop_stops()[..1], &Constraints::default(), "primary", 4)
            .unwrap_err();
        assert_eq!(err, OptimizeError::Input(InputError::InsufficientStops(1)));
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let stops = vec![Stop::waypoint(44.43, 26.10), Stop::waypoint(95.0, 26.10)];
        let err = optimizer
            .optimize_with_seed(&stops, &Constraints::default(), "primary", 4)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_COORDINATES");
    }

    #[test]
    fn test_coordinate_validation_can_be_disabled() {
        let optimizer =
            RouteOptimizer::new(OptimizerConfig::default().with_coordinate_validation(false));
        let stops = vec![Stop::waypoint(44.43, 26.10), Stop::waypoint(95.0, 26.10)];
        let result = optimizer.optimize_with_seed(&stops, &Constraints::default(), "primary", 4);
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let err = optimizer
            .optimize_with_seed(&loop_stops(), &Constraints::default(), "annealing", 5)
            .unwrap_err();
        assert_eq!(err, OptimizeError::Config(ConfigError::UnknownStrategy("annealing".into())));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default().with_sample_cap(0));
        let err = optimizer
            .optimize_with_seed(&loop_stops(), &Constraints::default(), "primary", 5)
            .unwrap_err();
        assert_eq!(err, OptimizeError::Config(ConfigError::ZeroSampleCap));
    }

    #[test]
    fn test_coincident_stops_fail_as_internal_error() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default());
        let stops = vec![Stop::waypoint(44.43, 26.10), Stop::waypoint(44.43, 26.10)];
        let err = optimizer
            .optimize_with_seed(&stops, &Constraints::default(), "primary", 6)
            .unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(err, OptimizeError::Invariant(InvariantError::DegenerateRoute { .. })));
    }
}
