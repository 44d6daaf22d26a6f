//! Comma/newline matrix text into rows of numbers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("matrix input is empty")]
    Empty,
    #[error("line {line} is blank; every row needs comma-separated numbers")]
    EmptyRow { line: usize },
    #[error("line {line}, entry {column}: {token:?} is not a finite number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// 1-based entry position within the line.
        column: usize,
        token: String,
    },
}

/// Parse rows separated by newlines and entries separated by commas.
///
/// Whitespace around entries is ignored, as are trailing blank lines. Blank
/// lines between rows are rejected rather than read as empty rows. Shape is
/// not checked here; ragged output is left for validation to report.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(ParseError::Empty);
    }

    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| parse_row(idx + 1, line))
        .collect()
}

fn parse_row(line_no: usize, line: &str) -> Result<Vec<f64>, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::EmptyRow { line: line_no });
    }

    line.split(',')
        .enumerate()
        .map(|(idx, raw)| {
            let token = raw.trim();
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber {
                    line: line_no,
                    column: idx + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}
