//! Subcommand implementations.
//!
//! Each command writes its result to the given writer so tests can capture
//! output; notices go through `tracing` and stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;

use adjoint_config::AdjointConfig;
use adjoint_core::Adjugator;
use adjoint_text::{
    DEFAULT_SEPARATOR, EXPORT_FILE_NAME, ExportRecord, GridSize, RenderOptions, empty_grid,
    format_entry, parse_matrix, render_result,
};
use adjoint_types::DimensionLimit;
use adjoint_utils::{AtomicWriteOptions, ExistingFilePolicy, atomic_write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default)]
pub struct ComputeOptions {
    pub input: Option<PathBuf>,
    /// Declared row and column counts, as typed.
    pub declared: Option<(String, String)>,
    pub limit: DimensionLimit,
    pub precision: Option<usize>,
    pub format: OutputFormat,
    /// `Some(None)` exports to the default location.
    pub export: Option<Option<PathBuf>>,
    pub force: bool,
}

pub fn template(rows: &str, cols: &str, out: &mut impl Write) -> Result<()> {
    let size = GridSize::parse(rows, cols)?;
    writeln!(out, "{}", empty_grid(size))?;
    Ok(())
}

pub fn compute(
    options: &ComputeOptions,
    config: Option<&AdjointConfig>,
    out: &mut impl Write,
) -> Result<()> {
    let raw = read_input(options.input.as_deref(), io::stdin())?;
    let rows = parse_matrix(&raw).context("Invalid matrix input")?;

    let parsed_rows = rows.len();
    let parsed_cols = rows.first().map_or(0, Vec::len);
    let (record_rows, record_cols) = match &options.declared {
        Some((declared_rows, declared_cols)) => {
            let size = GridSize::parse(declared_rows, declared_cols)?;
            if (size.rows(), size.cols()) != (parsed_rows, parsed_cols) {
                bail!(
                    "Declared {}x{} matrix but input has {} rows of {} entries",
                    size.rows(),
                    size.cols(),
                    parsed_rows,
                    parsed_cols
                );
            }
            (size.rows(), size.cols())
        }
        None => (parsed_rows, parsed_cols),
    };

    let solution = Adjugator::new(options.limit)
        .solve(rows)
        .context("Cannot compute the adjugate")?;

    let render = render_options(options.precision, config);
    let rendered = render_result(&solution.adjugate, &render);

    match options.format {
        OutputFormat::Text => writeln!(out, "{rendered}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &solution)?;
            writeln!(out)?;
        }
    }

    if let Some(dest) = &options.export {
        let target = export_target(dest.as_deref(), config);
        let record = ExportRecord {
            rows: record_rows,
            cols: record_cols,
            input: &raw,
            result: &rendered,
        };
        write_export(&target, &record, options.force)?;
        tracing::info!(path = %target.path.display(), "Exported result");
        eprintln!("Saved {}", target.path.display());
    }

    Ok(())
}

pub fn determinant(
    input: Option<&Path>,
    limit: DimensionLimit,
    precision: Option<usize>,
    config: Option<&AdjointConfig>,
    out: &mut impl Write,
) -> Result<()> {
    let raw = read_input(input, io::stdin())?;
    let rows = parse_matrix(&raw).context("Invalid matrix input")?;
    let det = Adjugator::new(limit)
        .determinant(rows)
        .context("Cannot compute the determinant")?;

    let precision = precision.or_else(|| config.and_then(AdjointConfig::precision));
    writeln!(out, "{}", format_entry(det, precision))?;
    Ok(())
}

fn render_options(precision: Option<usize>, config: Option<&AdjointConfig>) -> RenderOptions {
    let separator = config
        .and_then(AdjointConfig::separator)
        .unwrap_or(DEFAULT_SEPARATOR);
    RenderOptions::default()
        .with_separator(separator)
        .with_precision(precision.or_else(|| config.and_then(AdjointConfig::precision)))
}

/// Read matrix text from `path`, or from `stdin` when absent or `-`.
fn read_input(path: Option<&Path>, stdin: impl Read) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => io::read_to_string(stdin).context("Failed to read matrix from stdin"),
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ExportTarget {
    path: PathBuf,
    /// Set for the configured export directory, which may not exist yet.
    create_parents: bool,
}

/// Where an export goes: an explicit file, a file inside an explicit
/// directory, the configured export directory, or the working directory.
fn export_target(dest: Option<&Path>, config: Option<&AdjointConfig>) -> ExportTarget {
    match dest {
        Some(path) if path.is_dir() => ExportTarget {
            path: path.join(EXPORT_FILE_NAME),
            create_parents: false,
        },
        Some(path) => ExportTarget {
            path: path.to_path_buf(),
            create_parents: false,
        },
        None => match config.and_then(AdjointConfig::export_dir) {
            Some(dir) => ExportTarget {
                path: dir.join(EXPORT_FILE_NAME),
                create_parents: true,
            },
            None => ExportTarget {
                path: PathBuf::from(EXPORT_FILE_NAME),
                create_parents: false,
            },
        },
    }
}

fn write_export(target: &ExportTarget, record: &ExportRecord<'_>, force: bool) -> Result<()> {
    let path = &target.path;
    let options = AtomicWriteOptions {
        existing: if force {
            ExistingFilePolicy::Replace
        } else {
            ExistingFilePolicy::Keep
        },
        create_parents: target.create_parents,
    };
    match atomic_write(path, record.render().as_bytes(), options) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{} already exists (use --force to replace it)", path.display())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to write {}", path.display())),
    }
}
