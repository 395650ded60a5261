//! Core seams of the route sampler.
//!
//! The engine scores orderings against a precomputed distance matrix, so the
//! distance source can be swapped without touching sampling or scoring.

use crate::error::InvariantError;

/// Provides a distance matrix (kilometers) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>>;
}

/// Square distance matrix in kilometers, indexed by stop position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Wraps `rows`, which must form a square matrix.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, InvariantError> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(InvariantError::MalformedMatrix {
                rows: n,
                columns: row.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Builds the matrix for `locations` using `provider`.
    ///
    /// Fails unless the provider returns one row and one column per location.
    pub fn build<P: DistanceMatrixProvider + ?Sized>(
        provider: &P,
        locations: &[(f64, f64)],
    ) -> Result<Self, InvariantError> {
        let matrix = Self::new(provider.matrix_for(locations))?;
        if matrix.len() != locations.len() {
            return Err(InvariantError::MalformedMatrix {
                rows: matrix.len(),
                columns: matrix.len(),
            });
        }
        Ok(matrix)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// Sum of leg distances over consecutive positions of `order`.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|leg| self.get(leg[0], leg[1])).sum()
    }
}
