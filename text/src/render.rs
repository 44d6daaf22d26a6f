//! Plain-text rendering of result matrices.

use adjoint_types::SquareMatrix;

/// Heading placed above a rendered adjugate.
pub const RESULT_HEADING: &str = "Adjoint Matrix:";

pub const DEFAULT_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Placed between entries of a row.
    pub separator: String,
    /// Fixed number of decimal places. `None` prints the shortest exact form.
    pub precision: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            precision: None,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Format one entry. Negative zero, which cofactor signs produce for zero
/// minors, prints as `0`.
#[must_use]
pub fn format_entry(value: f64, precision: Option<usize>) -> String {
    let mut out = match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => format!("{value}"),
    };
    if out.starts_with('-') && out[1..].chars().all(|c| c == '0' || c == '.') {
        out.remove(0);
    }
    out
}

/// Rows joined by newlines, entries by `options.separator`.
#[must_use]
pub fn render_matrix(matrix: &SquareMatrix<f64>, options: &RenderOptions) -> String {
    let mut out = String::new();
    for (idx, row) in matrix.rows().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let entries: Vec<String> = row
            .iter()
            .map(|&value| format_entry(value, options.precision))
            .collect();
        out.push_str(&entries.join(&options.separator));
    }
    out
}

/// [`RESULT_HEADING`] followed by the rendered matrix.
#[must_use]
pub fn render_result(matrix: &SquareMatrix<f64>, options: &RenderOptions) -> String {
    let mut out = String::from(RESULT_HEADING);
    out.push('\n');
    out.push_str(&render_matrix(matrix, options));
    out
}
