//! Candidate scoring.
//!
//! ```text
//! fitness = entanglement * (1000 / distance)
//!         + coherence    * (1000 / time)
//!         + (1 - traffic) * 500
//!         + jitter
//!         - penalty * violations
//! ```
//!
//! `coherence = cos(phase * K)` and `entanglement = K * sin(phase)`. Traffic and
//! jitter are drawn from the caller's RNG; the rest is deterministic.

use rand::Rng;
use rayon::prelude::*;

use crate::config::OptimizerConfig;
use crate::constraints::Constraints;
use crate::error::InvariantError;
use crate::sampler::Candidate;
use crate::traits::DistanceMatrix;

const DISTANCE_WEIGHT: f64 = 1000.0;
const TIME_WEIGHT: f64 = 1000.0;
const TRAFFIC_WEIGHT: f64 = 500.0;

/// A candidate together with its measurements and score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Total route length in kilometers.
    pub distance_km: f64,
    /// Estimated driving time in hours.
    pub time_hours: f64,
    /// Traffic impact fraction in [0, 1).
    pub traffic: f64,
    pub coherence: f64,
    pub entanglement: f64,
    /// Soft constraints this ordering exceeds.
    pub violations: u32,
    /// Higher is better.
    pub fitness: f64,
}

/// Random terms of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Noise {
    pub traffic: f64,
    pub jitter: f64,
}

impl Noise {
    pub const NONE: Noise = Noise {
        traffic: 0.0,
        jitter: 0.0,
    };
}

/// Scores candidates against a precomputed distance matrix.
pub struct FitnessEvaluator<'a> {
    matrix: &'a DistanceMatrix,
    config: &'a OptimizerConfig,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(matrix: &'a DistanceMatrix, config: &'a OptimizerConfig) -> Self {
        Self { matrix, config }
    }

    /// Draws the random terms for one candidate.
    pub fn draw_noise<R: Rng>(&self, constraints: &Constraints, rng: &mut R) -> Noise {
        let traffic = if constraints.is_traffic_aware() {
            rng.random::<f64>() * self.config.traffic_ceiling
        } else {
            0.0
        };
        let jitter = rng.random::<f64>() * self.config.jitter_ceiling;
        Noise { traffic, jitter }
    }

    /// Scores one candidate, drawing traffic and jitter from `rng`.
    pub fn score<R: Rng>(
        &self,
        candidate: &Candidate,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<ScoredCandidate, InvariantError> {
        let noise = self.draw_noise(constraints, rng);
        self.evaluate(candidate, constraints, noise)
    }

    /// Scores one candidate with fixed random terms.
    pub fn evaluate(
        &self,
        candidate: &Candidate,
        constraints: &Constraints,
        noise: Noise,
    ) -> Result<ScoredCandidate, InvariantError> {
        if !candidate.is_permutation_of(self.matrix.len()) {
            return Err(InvariantError::NotAPermutation);
        }

        let distance_km = self.matrix.path_length(&candidate.order);
        let time_hours = self.config.travel_hours(distance_km);
        if !(distance_km > 0.0 && distance_km.is_finite() && time_hours > 0.0) {
            return Err(InvariantError::DegenerateRoute { distance_km });
        }

        let k = self.config.entanglement_factor;
        let coherence = (candidate.phase * k).cos();
        let entanglement = k * candidate.phase.sin();
        let violations = constraints.violations(distance_km, time_hours);

        let fitness = entanglement * (DISTANCE_WEIGHT / distance_km)
            + coherence * (TIME_WEIGHT / time_hours)
            + (1.0 - noise.traffic) * TRAFFIC_WEIGHT
            + noise.jitter
            - self.config.constraint_penalty * f64::from(violations);

        Ok(ScoredCandidate {
            candidate: candidate.clone(),
            distance_km,
            time_hours,
            traffic: noise.traffic,
            coherence,
            entanglement,
            violations,
            fitness,
        })
    }

    /// Scores a whole pool, preserving pool order.
    ///
    /// Noise is drawn sequentially from `rng` before evaluation, so the result
    /// is identical whether or not the pool is scored in parallel.
    pub fn score_pool<R: Rng>(
        &self,
        pool: &[Candidate],
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<Vec<ScoredCandidate>, InvariantError> {
        let noise: Vec<Noise> = pool.iter().map(|_| self.draw_noise(constraints, rng)).collect();

        if self.config.parallel {
            pool.par_iter()
                .zip(noise.par_iter())
                .map(|(candidate, noise)| self.evaluate(candidate, constraints, *noise))
                .collect()
        } else {
            pool.iter()
                .zip(noise.iter())
                .map(|(candidate, noise)| self.evaluate(candidate, constraints, *noise))
                .collect()
        }
    }
}
