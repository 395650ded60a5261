//! Candidate pool sampling.
//!
//! Each candidate is an independent uniform shuffle of the stop positions.
//! Duplicate orderings are allowed and keep their own phase.

use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::SliceRandom;

/// One proposed visiting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Positions into the caller's stop list, in visiting order.
    pub order: Vec<usize>,
    /// Sampling probability mass (1 / pool size). Informational only.
    pub weight: f64,
    /// Phase in [0, 2π) driving the coherence and entanglement modifiers.
    pub phase: f64,
}

impl Candidate {
    /// True when `order` holds each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &index in &self.order {
            if index >= n || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }
}

/// Pool size for `n` stops: `min(cap, (n-1)!)`.
///
/// The factorial is accumulated incrementally and stops as soon as it reaches
/// the cap, so large `n` never overflows.
pub fn pool_size(n: usize, cap: usize) -> usize {
    let mut size: usize = 1;
    for k in 2..n {
        size = size.saturating_mul(k);
        if size >= cap {
            return cap;
        }
    }
    size.min(cap)
}

/// Samples `pool_size(n, cap)` candidates over `n` stops.
///
/// Callers guarantee `n >= 2`; the orchestrator validates input first.
pub fn sample<R: Rng>(n: usize, cap: usize, rng: &mut R) -> Vec<Candidate> {
    let size = pool_size(n, cap);
    let weight = 1.0 / size as f64;
    let identity: Vec<usize> = (0..n).collect();

    (0..size)
        .map(|_| {
            let mut order = identity.clone();
            order.shuffle(rng);
            Candidate {
                order,
                weight,
                phase: rng.random::<f64>() * TAU,
            }
        })
        .collect()
}
