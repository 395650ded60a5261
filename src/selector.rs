//! Best-candidate selection.

use crate::error::InvariantError;
use crate::fitness::ScoredCandidate;

/// Returns the highest-fitness candidate; the first one seen wins ties.
pub fn select(scored: Vec<ScoredCandidate>) -> Result<ScoredCandidate, InvariantError> {
    let mut best: Option<ScoredCandidate> = None;

    for candidate in scored {
        if best.as_ref().is_none_or(|current| candidate.fitness > current.fitness) {
            best = Some(candidate);
        }
    }

    best.ok_or(InvariantError::EmptyCandidatePool)
}
