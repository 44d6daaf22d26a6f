//! Determinants by first-row Laplace expansion.
//!
//! Cost is O(n!) with recursion depth n. There is no pivoting and no LU
//! fallback: integer inputs stay exact, floating inputs accumulate rounding
//! in expansion order. Callers bound n through
//! [`DimensionLimit`](adjoint_types::DimensionLimit) before reaching here.

use adjoint_types::{IndexError, Scalar, SquareMatrix};

use crate::minor::{minor, strike};

/// Determinant of `matrix`.
///
/// - 0×0: one (empty product); only reached as the minor of a 1×1 matrix
/// - 1×1: the single entry
/// - 2×2: `a·d − b·c`
/// - larger: `Σ entry(0, i) · cofactor(0, i)` over every column `i`
#[must_use]
pub fn determinant<T: Scalar>(matrix: &SquareMatrix<T>) -> T {
    match matrix.side() {
        0 => T::one(),
        1 => matrix[(0, 0)],
        2 => matrix[(0, 0)] * matrix[(1, 1)] - matrix[(0, 1)] * matrix[(1, 0)],
        n => (0..n).fold(T::zero(), |acc, col| {
            acc + matrix[(0, col)] * signed_minor_det(matrix, 0, col)
        }),
    }
}

/// Signed determinant of the minor at (`row`, `col`).
pub fn cofactor<T: Scalar>(
    matrix: &SquareMatrix<T>,
    row: usize,
    col: usize,
) -> Result<T, IndexError> {
    let sub = minor(matrix, row, col)?;
    Ok(determinant(&sub).signed(row, col))
}

pub(crate) fn signed_minor_det<T: Scalar>(matrix: &SquareMatrix<T>, row: usize, col: usize) -> T {
    determinant(&strike(matrix, row, col)).signed(row, col)
}
