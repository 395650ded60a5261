//! Strategy selector.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Selectable optimization behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sample a candidate pool, score it and keep the fittest ordering.
    #[default]
    Primary,
    /// Single unscored shuffle.
    Baseline,
    /// Unscored shuffle reporting a blended-advantage figure.
    Blended,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Primary, Strategy::Baseline, Strategy::Blended];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Primary => "primary",
            Strategy::Baseline => "baseline",
            Strategy::Blended => "blended",
        }
    }

    /// Nominal latency band (base, spread) in seconds reported for comparison.
    /// Nothing ever sleeps on this figure.
    fn latency_band(&self) -> (f64, f64) {
        match self {
            Strategy::Primary => (0.3, 0.5),
            Strategy::Blended => (1.0, 2.0),
            Strategy::Baseline => (2.0, 3.0),
        }
    }

    /// Draws a synthetic latency figure, in seconds, from this strategy's band.
    pub fn nominal_latency<R: Rng>(&self, rng: &mut R) -> f64 {
        let (base, spread) = self.latency_band();
        base + rng.random::<f64>() * spread
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Accepts the canonical names and the legacy wire names
    /// (`quantum`, `classical`, `hybrid`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" | "quantum" => Ok(Strategy::Primary),
            "baseline" | "classical" => Ok(Strategy::Baseline),
            "blended" | "hybrid" => Ok(Strategy::Blended),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}
