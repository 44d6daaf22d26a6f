//! Plain-text export of a computation: requested size, raw input, result.

use std::fmt;

/// File name used when the caller does not choose one.
pub const EXPORT_FILE_NAME: &str = "matrix_adjoint_results.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRecord<'a> {
    pub rows: usize,
    pub cols: usize,
    /// Matrix text exactly as the user supplied it.
    pub input: &'a str,
    /// Rendered result block, usually from [`render_result`](crate::render_result).
    pub result: &'a str,
}

impl ExportRecord<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExportRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Rows: {}", self.rows)?;
        writeln!(f, "Number of Columns: {}", self.cols)?;
        writeln!(f)?;
        writeln!(f, "Matrix Input:")?;
        writeln!(f, "{}", self.input.trim_end_matches(['\r', '\n']))?;
        writeln!(f)?;
        writeln!(f, "Result:")?;
        writeln!(f, "{}", self.result.trim_end_matches(['\r', '\n']))
    }
}
