//! Optimizer settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default ceiling on candidates evaluated per call.
pub const DEFAULT_SAMPLE_CAP: usize = 1024;

/// Default phase weighting constant (K).
pub const DEFAULT_ENTANGLEMENT_FACTOR: f64 = 0.847;

/// Average driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Configuration for the route sampler.
///
/// # Examples
///
/// ```
/// use route_sampler::config::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_sample_cap(256)
///     .with_speed_kmh(35.0)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Maximum number of candidates in a pool. Bounds CPU work per call.
    pub sample_cap: usize,

    /// Phase weighting constant K used by the coherence/entanglement modifiers.
    pub entanglement_factor: f64,

    /// Assumed average speed in km/h.
    pub speed_kmh: f64,

    /// Exclusive upper bound of the random traffic penalty, in [0, 1).
    pub traffic_ceiling: f64,

    /// Exclusive upper bound of the exploration jitter added to each score.
    pub jitter_ceiling: f64,

    /// Fitness deducted per violated soft constraint (max distance, max time).
    pub constraint_penalty: f64,

    /// Operating cost per kilometer, used for cost-reduction estimates.
    pub cost_per_km: f64,

    /// Operating cost per hour of driving, used for cost-reduction estimates.
    pub cost_per_hour: f64,

    /// Reject stops whose coordinates are outside the documented ranges.
    pub validate_coordinates: bool,

    /// Score the pool on the rayon thread pool.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            sample_cap: DEFAULT_SAMPLE_CAP,
            entanglement_factor: DEFAULT_ENTANGLEMENT_FACTOR,
            speed_kmh: DEFAULT_SPEED_KMH,
            traffic_ceiling: 0.3,
            jitter_ceiling: 100.0,
            constraint_penalty: 250.0,
            cost_per_km: 0.35,
            cost_per_hour: 18.0,
            validate_coordinates: true,
            parallel: true,
        }
    }
}

impl OptimizerConfig {
    pub fn with_sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    pub fn with_entanglement_factor(mut self, k: f64) -> Self {
        self.entanglement_factor = k;
        self
    }

    pub fn with_speed_kmh(mut self, speed: f64) -> Self {
        self.speed_kmh = speed;
        self
    }

    pub fn with_traffic_ceiling(mut self, ceiling: f64) -> Self {
        self.traffic_ceiling = ceiling;
        self
    }

    pub fn with_jitter_ceiling(mut self, ceiling: f64) -> Self {
        self.jitter_ceiling = ceiling;
        self
    }

    pub fn with_constraint_penalty(mut self, penalty: f64) -> Self {
        self.constraint_penalty = penalty;
        self
    }

    pub fn with_cost_model(mut self, per_km: f64, per_hour: f64) -> Self {
        self.cost_per_km = per_km;
        self.cost_per_hour = per_hour;
        self
    }

    pub fn with_coordinate_validation(mut self, enabled: bool) -> Self {
        self.validate_coordinates = enabled;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_cap == 0 {
            return Err(ConfigError::ZeroSampleCap);
        }
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed_kmh));
        }
        if !(0.0..1.0).contains(&self.traffic_ceiling) {
            return Err(ConfigError::InvalidTrafficCeiling(self.traffic_ceiling));
        }
        if !self.jitter_ceiling.is_finite() || self.jitter_ceiling < 0.0 {
            return Err(ConfigError::InvalidJitter(self.jitter_ceiling));
        }
        if !self.entanglement_factor.is_finite() {
            return Err(ConfigError::InvalidEntanglementFactor(self.entanglement_factor));
        }
        if !self.constraint_penalty.is_finite() || self.constraint_penalty < 0.0 {
            return Err(ConfigError::InvalidConstraintPenalty(self.constraint_penalty));
        }
        for (unit, value) in [("km", self.cost_per_km), ("hour", self.cost_per_hour)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCost { unit, value });
            }
        }
        Ok(())
    }

    /// Travel time in hours for `distance_km` at the assumed speed.
    pub fn travel_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh
    }

    /// Operating cost of driving `distance_km`.
    pub fn route_cost(&self, distance_km: f64) -> f64 {
        distance_km * self.cost_per_km + self.travel_hours(distance_km) * self.cost_per_hour
    }
}
