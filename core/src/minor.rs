//! Minor extraction.

use adjoint_types::{Axis, IndexError, SquareMatrix};

/// The (n−1)×(n−1) matrix left after deleting `row` and `col`.
///
/// Relative order of the remaining rows and columns is preserved. The result
/// is a fresh allocation; `matrix` is never modified. The minor of a 1×1
/// matrix is the 0×0 matrix.
pub fn minor<T: Copy>(
    matrix: &SquareMatrix<T>,
    row: usize,
    col: usize,
) -> Result<SquareMatrix<T>, IndexError> {
    let side = matrix.side();
    if row >= side {
        return Err(IndexError {
            axis: Axis::Row,
            index: row,
            side,
        });
    }
    if col >= side {
        return Err(IndexError {
            axis: Axis::Column,
            index: col,
            side,
        });
    }
    Ok(strike(matrix, row, col))
}

/// [`minor`] for indices already known to be in range.
pub(crate) fn strike<T: Copy>(matrix: &SquareMatrix<T>, row: usize, col: usize) -> SquareMatrix<T> {
    debug_assert!(row < matrix.side() && col < matrix.side());
    SquareMatrix::from_fn(matrix.side() - 1, |r, c| {
        matrix[(skip_removed(r, row), skip_removed(c, col))]
    })
}

#[inline]
fn skip_removed(index: usize, removed: usize) -> usize {
    if index < removed { index } else { index + 1 }
}
