//! Requested grid size and the zero-filled grid offered for editing.

use std::num::NonZeroUsize;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionsError {
    #[error("row count must be a whole number of at least 1 (got {0:?})")]
    Rows(String),
    #[error("column count must be a whole number of at least 1 (got {0:?})")]
    Cols(String),
}

/// Row and column counts, both at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    rows: NonZeroUsize,
    cols: NonZeroUsize,
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionsError> {
        let rows = NonZeroUsize::new(rows).ok_or_else(|| DimensionsError::Rows(rows.to_string()))?;
        let cols = NonZeroUsize::new(cols).ok_or_else(|| DimensionsError::Cols(cols.to_string()))?;
        Ok(Self { rows, cols })
    }

    /// Parse user-typed counts. Surrounding whitespace is allowed, anything
    /// else that is not a positive integer is rejected.
    pub fn parse(rows: &str, cols: &str) -> Result<Self, DimensionsError> {
        let parse_count = |raw: &str| raw.trim().parse::<NonZeroUsize>().ok();
        let rows = parse_count(rows).ok_or_else(|| DimensionsError::Rows(rows.to_string()))?;
        let cols = parse_count(cols).ok_or_else(|| DimensionsError::Cols(cols.to_string()))?;
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows.get()
    }

    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols.get()
    }
}

/// A `rows × cols` grid of zeros in the input format, ready to be edited.
#[must_use]
pub fn empty_grid(size: GridSize) -> String {
    let row = vec!["0"; size.cols()].join(", ");
    vec![row.as_str(); size.rows()].join("\n")
}
