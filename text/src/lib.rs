//! Text collaborators around the adjugate kernel.
//!
//! - **`parse`**: comma/newline text into candidate rows
//! - **`template`**: requested grid size and the zero-filled editing grid
//! - **`render`**: result matrices back into text
//! - **`report`**: the plain-text export record
//!
//! Nothing here touches the filesystem; callers own IO.

mod parse;
mod render;
mod report;
mod template;

pub use parse::{ParseError, parse_matrix};
pub use render::{
    DEFAULT_SEPARATOR, RESULT_HEADING, RenderOptions, format_entry, render_matrix, render_result,
};
pub use report::{EXPORT_FILE_NAME, ExportRecord};
pub use template::{DimensionsError, GridSize, empty_grid};
