//! Cofactor matrix and adjugate assembly.
//!
//! The adjugate is only obtainable by transposing a [`CofactorMatrix`], so the
//! cofactor-then-transpose order cannot be skipped.

use std::ops::Deref;

use adjoint_types::{Scalar, SquareMatrix};
use serde::Serialize;

use crate::determinant::signed_minor_det;

/// Entry (i, j) is `(−1)^(i+j) · det(minor(i, j))`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CofactorMatrix<T>(SquareMatrix<T>);

impl<T: Scalar> CofactorMatrix<T> {
    #[must_use]
    pub fn of(matrix: &SquareMatrix<T>) -> Self {
        Self(SquareMatrix::from_fn(matrix.side(), |row, col| {
            signed_minor_det(matrix, row, col)
        }))
    }

    /// Transpose into the adjugate: `adj[j][i] = cofactor[i][j]`.
    #[must_use]
    pub fn transpose(self) -> Adjugate<T> {
        Adjugate(self.0.transpose())
    }
}

impl<T> CofactorMatrix<T> {
    #[must_use]
    pub fn as_matrix(&self) -> &SquareMatrix<T> {
        &self.0
    }
}

impl<T> Deref for CofactorMatrix<T> {
    type Target = SquareMatrix<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The classical adjoint: transpose of the cofactor matrix.
///
/// Satisfies `A · adj(A) = det(A) · I`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Adjugate<T>(SquareMatrix<T>);

impl<T> Adjugate<T> {
    #[must_use]
    pub fn as_matrix(&self) -> &SquareMatrix<T> {
        &self.0
    }

    #[must_use]
    pub fn into_matrix(self) -> SquareMatrix<T> {
        self.0
    }
}

impl<T: Scalar> Adjugate<T> {
    /// `det(source)` recovered from the first row of cofactors already held
    /// here, without a second expansion.
    ///
    /// `source` must be the matrix this adjugate was built from.
    #[must_use]
    pub fn determinant_of(&self, source: &SquareMatrix<T>) -> T {
        debug_assert_eq!(self.0.side(), source.side());
        (0..source.side()).fold(T::zero(), |acc, col| {
            acc + source[(0, col)] * self.0[(col, 0)]
        })
    }
}

impl<T> Deref for Adjugate<T> {
    type Target = SquareMatrix<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[must_use]
pub fn cofactor_matrix<T: Scalar>(matrix: &SquareMatrix<T>) -> CofactorMatrix<T> {
    CofactorMatrix::of(matrix)
}

/// Cofactors for every (i, j), then the transpose.
#[must_use]
pub fn adjugate<T: Scalar>(matrix: &SquareMatrix<T>) -> Adjugate<T> {
    cofactor_matrix(matrix).transpose()
}
