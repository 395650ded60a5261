//! Error taxonomy.
//!
//! Caller mistakes ([`InputError`], [`ConfigError`]) are kept apart from
//! pipeline defects ([`InvariantError`]); hosts may map both to the same
//! failure response but should log them differently.

use thiserror::Error;

/// Bad caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("minimum 2 stops required for optimization, got {0}")]
    InsufficientStops(usize),
    #[error("stop {index} has out-of-range coordinates ({lat}, {lng})")]
    InvalidCoordinates { index: usize, lat: f64, lng: f64 },
}

/// Unrecognized selector or unusable optimizer settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown optimization strategy '{0}'")]
    UnknownStrategy(String),
    #[error("unknown metrics type '{0}' (available: status, performance)")]
    UnknownMetricsType(String),
    #[error("sample cap must be at least 1")]
    ZeroSampleCap,
    #[error("assumed speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),
    #[error("traffic ceiling must be in [0, 1), got {0}")]
    InvalidTrafficCeiling(f64),
    #[error("jitter ceiling must be non-negative and finite, got {0}")]
    InvalidJitter(f64),
    #[error("entanglement factor must be finite, got {0}")]
    InvalidEntanglementFactor(f64),
    #[error("constraint penalty must be non-negative and finite, got {0}")]
    InvalidConstraintPenalty(f64),
    #[error("cost per {unit} must be non-negative and finite, got {value}")]
    InvalidCost { unit: &'static str, value: f64 },
}

/// Internal contract violation. Signals a bug, never bad input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantError {
    #[error("candidate pool is empty")]
    EmptyCandidatePool,
    #[error("route length {distance_km} km cannot be scored")]
    DegenerateRoute { distance_km: f64 },
    #[error("candidate ordering is not a permutation of the input stops")]
    NotAPermutation,
    #[error("distance matrix is {rows}x{columns}, expected one row and column per stop")]
    MalformedMatrix { rows: usize, columns: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("internal error: {0}")]
    Invariant(#[from] InvariantError),
}

impl OptimizeError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            OptimizeError::Input(InputError::InsufficientStops(_)) => "INSUFFICIENT_POINTS",
            OptimizeError::Input(InputError::InvalidCoordinates { .. }) => "INVALID_COORDINATES",
            OptimizeError::Config(ConfigError::UnknownStrategy(_)) => "UNKNOWN_STRATEGY",
            OptimizeError::Config(ConfigError::UnknownMetricsType(_)) => "UNKNOWN_METRICS_TYPE",
            OptimizeError::Config(_) => "INVALID_CONFIG",
            OptimizeError::Invariant(InvariantError::EmptyCandidatePool) => "EMPTY_CANDIDATE_POOL",
            OptimizeError::Invariant(InvariantError::DegenerateRoute { .. }) => "DEGENERATE_ROUTE",
            OptimizeError::Invariant(InvariantError::NotAPermutation) => "NOT_A_PERMUTATION",
            OptimizeError::Invariant(InvariantError::MalformedMatrix { .. }) => "MALFORMED_MATRIX",
        }
    }

    /// True for pipeline defects, false for caller errors.
    pub fn is_internal(&self) -> bool {
        matches!(self, OptimizeError::Invariant(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            OptimizeError::from(InputError::InsufficientStops(1)).code(),
            "INSUFFICIENT_POINTS"
        );
        assert_eq!(
            OptimizeError::from(ConfigError::UnknownStrategy("teleport".into())).code(),
            "UNKNOWN_STRATEGY"
        );
        assert_eq!(OptimizeError::from(ConfigError::ZeroSampleCap).code(), "INVALID_CONFIG");
        assert_eq!(
            OptimizeError::from(InvariantError::EmptyCandidatePool).code(),
            "EMPTY_CANDIDATE_POOL"
        );
        assert_eq!(
            OptimizeError::from(InvariantError::MalformedMatrix { rows: 3, columns: 1 }).code(),
            "MALFORMED_MATRIX"
        );
        assert_eq!(
            OptimizeError::from(ConfigError::InvalidConstraintPenalty(f64::NAN)).code(),
            "INVALID_CONFIG"
        );
    }

    #[test]
    fn test_internal_flag() {
        assert!(OptimizeError::from(InvariantError::NotAPermutation).is_internal());
        assert!(!OptimizeError::from(InputError::InsufficientStops(0)).is_internal());
        assert!(!OptimizeError::from(ConfigError::UnknownStrategy("x".into())).is_internal());
    }

    #[test]
    fn test_display_names_the_violated_precondition() {
        let err = OptimizeError::from(InputError::InsufficientStops(1));
        assert_eq!(
            err.to_string(),
            "invalid input: minimum 2 stops required for optimization, got 1"
        );
    }
}
