//! Validated square matrix storage.

use std::ops::Index;

use serde::{Serialize, Serializer};

use crate::{Scalar, ShapeError};

/// An immutable n×n matrix stored row-major in owned storage.
///
/// A `SquareMatrix` is square by construction: [`SquareMatrix::from_rows`]
/// rejects empty, ragged and non-square input. Every derived matrix (minor,
/// transpose, product) is a fresh allocation and never aliases its source.
///
/// The 0×0 matrix is only reachable through [`SquareMatrix::from_fn`] with a
/// side of zero, which is how the minor of a 1×1 matrix is represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T> {
    side: usize,
    data: Vec<T>,
}

impl<T> SquareMatrix<T> {
    /// Validate candidate rows and take ownership of them.
    ///
    /// Checks, in order: at least one row, every row as long as the first,
    /// at least one column, row count equal to row length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::Empty);
        };
        let cols = first.len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(ShapeError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        if cols == 0 {
            return Err(ShapeError::Empty);
        }
        if rows.len() != cols {
            return Err(ShapeError::NonSquare {
                rows: rows.len(),
                cols,
            });
        }

        Ok(Self {
            side: cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a matrix of the given side from an entry function `f(row, col)`.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                data.push(f(row, col));
            }
        }
        Self { side, data }
    }

    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Iterate rows as slices. Yields nothing for the 0×0 matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.side.max(1))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SquareMatrix<U> {
        SquareMatrix {
            side: self.side,
            data: self.data.iter().map(&mut f).collect(),
        }
    }
}

impl<T: Clone> SquareMatrix<T> {
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Swap rows and columns into a new matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.side, |row, col| self[(col, row)].clone())
    }
}

impl<T: Scalar> SquareMatrix<T> {
    #[must_use]
    pub fn identity(side: usize) -> Self {
        Self::from_fn(side, |row, col| if row == col { T::one() } else { T::zero() })
    }

    #[must_use]
    pub fn zeros(side: usize) -> Self {
        Self::from_fn(side, |_, _| T::zero())
    }

    /// Multiply every entry by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: T) -> Self {
        self.map(|&value| value * factor)
    }

    /// Matrix product `self · rhs`, or `None` when the sides differ.
    #[must_use]
    pub fn matmul(&self, rhs: &Self) -> Option<Self> {
        if self.side != rhs.side {
            return None;
        }
        let n = self.side;
        Some(Self::from_fn(n, |row, col| {
            (0..n).fold(T::zero(), |acc, k| acc + self[(row, k)] * rhs[(k, col)])
        }))
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.side && col < self.side,
            "index ({row}, {col}) out of bounds for matrix of side {}",
            self.side
        );
        &self.data[row * self.side + col]
    }
}

// Serialized as a sequence of rows so JSON output reads `[[1, 2], [3, 4]]`.
impl<T: Serialize> Serialize for SquareMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
