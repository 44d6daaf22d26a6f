//! Shared test utilities and fixtures
//!
//! Common matrices and assertions for integration tests.

#![allow(dead_code)]

use adjoint_core::{Adjugate, determinant};
use adjoint_types::SquareMatrix;

pub fn int_matrix(rows: &[&[i64]]) -> SquareMatrix<i64> {
    SquareMatrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).expect("square fixture")
}

/// The worked 3×3 example: det = 1.
pub fn known_3x3() -> SquareMatrix<i64> {
    int_matrix(&[&[1, 2, 3], &[0, 1, 4], &[5, 6, 0]])
}

/// Asymmetric 3×3 whose cofactor matrix is not symmetric either.
pub fn asymmetric_3x3() -> SquareMatrix<i64> {
    int_matrix(&[&[2, 0, 1], &[3, 1, 0], &[1, 4, 5]])
}

/// Assert `A · M = det(A) · I` exactly.
pub fn satisfies_identity(a: &SquareMatrix<i64>, m: &SquareMatrix<i64>) -> bool {
    let expected = SquareMatrix::identity(a.side()).scaled(determinant(a));
    a.matmul(m).as_ref() == Some(&expected)
}

/// Assert `A · adj(A) ≈ det(A) · I` for floating input.
pub fn assert_identity_close(a: &SquareMatrix<f64>, adj: &Adjugate<f64>, tolerance: f64) {
    let det = determinant(a);
    let product = a.matmul(adj).expect("same side");
    for row in 0..a.side() {
        for col in 0..a.side() {
            let expected = if row == col { det } else { 0.0 };
            let got = product[(row, col)];
            assert!(
                (got - expected).abs() <= tolerance,
                "entry ({row}, {col}): expected {expected}, got {got}"
            );
        }
    }
}
