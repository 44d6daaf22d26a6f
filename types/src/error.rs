//! Error types shared by every layer.

use std::fmt;

use thiserror::Error;

/// Input rows that cannot form a square matrix.
///
/// Detected before any numeric work; no partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// No rows, or rows of length zero.
    #[error("matrix must have at least one row and one column")]
    Empty,
    /// A row whose length differs from the first row.
    #[error("row {row} has {found} entries, expected {expected} (matrix must be rectangular)")]
    Ragged {
        /// Zero-based index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Rectangular, but row count differs from row length.
    #[error("matrix must be square, got {rows} rows of {cols} columns")]
    NonSquare { rows: usize, cols: usize },
    /// Square, but larger than the configured dimension limit.
    #[error("matrix side {side} exceeds the dimension limit of {limit}")]
    ExceedsLimit { side: usize, limit: usize },
}

impl ShapeError {
    /// Short machine-friendly name of the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Ragged { .. } => "ragged",
            Self::NonSquare { .. } => "non_square",
            Self::ExceedsLimit { .. } => "exceeds_limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// A row or column index outside `[0, side)`.
///
/// Only the public minor/cofactor helpers return this; the adjugate builder
/// iterates within bounds and never observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{axis} index {index} out of bounds for matrix of side {side}")]
pub struct IndexError {
    pub axis: Axis,
    pub index: usize,
    pub side: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("dimension limit must be at least 1")]
    Zero,
    #[error("dimension limit {requested} exceeds the ceiling of {ceiling}")]
    AboveCeiling { requested: usize, ceiling: usize },
}
