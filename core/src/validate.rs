//! Input validation: shape first, then the dimension limit.

use adjoint_types::{DimensionLimit, ShapeError, SquareMatrix};

/// Turn candidate rows into a [`SquareMatrix`] no larger than `limit`.
///
/// No numeric work happens here. Shape problems are reported before the limit
/// is consulted, so a ragged 20-row input is `Ragged`, not `ExceedsLimit`.
pub fn validate<T>(
    rows: Vec<Vec<T>>,
    limit: DimensionLimit,
) -> Result<SquareMatrix<T>, ShapeError> {
    let matrix = SquareMatrix::from_rows(rows).inspect_err(|err| {
        tracing::debug!(kind = err.kind(), "Rejected input matrix: {err}");
    })?;

    if !limit.admits(matrix.side()) {
        tracing::warn!(
            side = matrix.side(),
            limit = limit.get(),
            "Matrix exceeds dimension limit"
        );
        return Err(ShapeError::ExceedsLimit {
            side: matrix.side(),
            limit: limit.get(),
        });
    }

    Ok(matrix)
}
