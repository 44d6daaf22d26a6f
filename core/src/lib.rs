//! Adjugate kernel for adjoint.
//!
//! The pipeline runs leaf-first in a single synchronous call:
//!
//! ```text
//! rows -> validate() -> SquareMatrix -> cofactor_matrix() -> transpose() -> Adjugate
//!                                            |
//!                                            v
//!                                determinant() <-> minor()   (recursive)
//! ```
//!
//! Nothing here performs IO or keeps state between calls.

mod adjugate;
mod determinant;
mod minor;
mod validate;

use adjoint_types::{DimensionLimit, Scalar, ShapeError, SquareMatrix};
use serde::Serialize;

pub use adjugate::{Adjugate, CofactorMatrix, adjugate, cofactor_matrix};
pub use determinant::{cofactor, determinant};
pub use minor::minor;
pub use validate::validate;

/// Determinant and adjugate of one input matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution<T> {
    pub determinant: T,
    pub adjugate: Adjugate<T>,
}

/// Entry point that validates rows against a dimension limit before expanding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjugator {
    limit: DimensionLimit,
}

impl Adjugator {
    #[must_use]
    pub const fn new(limit: DimensionLimit) -> Self {
        Self { limit }
    }

    #[must_use]
    pub const fn limit(&self) -> DimensionLimit {
        self.limit
    }

    pub fn compute<T: Scalar>(&self, rows: Vec<Vec<T>>) -> Result<Adjugate<T>, ShapeError> {
        let matrix = validate(rows, self.limit)?;
        tracing::debug!(side = matrix.side(), "Computing adjugate");
        Ok(adjugate(&matrix))
    }

    /// Adjugate plus determinant, the latter read off the first cofactor row.
    pub fn solve<T: Scalar>(&self, rows: Vec<Vec<T>>) -> Result<Solution<T>, ShapeError> {
        let matrix = validate(rows, self.limit)?;
        tracing::debug!(side = matrix.side(), "Solving for determinant and adjugate");
        let adjugate = adjugate(&matrix);
        Ok(Solution {
            determinant: adjugate.determinant_of(&matrix),
            adjugate,
        })
    }

    pub fn determinant<T: Scalar>(&self, rows: Vec<Vec<T>>) -> Result<T, ShapeError> {
        let matrix: SquareMatrix<T> = validate(rows, self.limit)?;
        tracing::debug!(side = matrix.side(), "Computing determinant");
        Ok(determinant(&matrix))
    }
}

/// Adjugate of `rows` under the default [`DimensionLimit`].
pub fn compute_adjugate<T: Scalar>(rows: Vec<Vec<T>>) -> Result<Adjugate<T>, ShapeError> {
    Adjugator::default().compute(rows)
}
