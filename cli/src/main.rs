//! adjoint CLI - binary entry point.
//!
//! # Architecture
//!
//! The CLI bridges [`adjoint_text`] (parsing, rendering, export records) and
//! [`adjoint_core`] (the adjugate kernel), with [`adjoint_config`] supplying
//! limits and output defaults.
//!
//! ```text
//! main() -> Cli::parse() -> commands::{template, compute, determinant}
//!                                        |
//!                           text -> parse_matrix -> Adjugator -> render_result
//!                                                                   |
//!                                                        stdout / export file
//! ```
//!
//! Logs go to stderr so stdout carries only results.

mod commands;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use adjoint_config::{AdjointConfig, resolve_dimension_limit};
use adjoint_types::DimensionLimit;

use crate::commands::{ComputeOptions, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "adjoint")]
#[command(about = "Compute the adjugate (classical adjoint) of a square matrix")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print an editable grid of zeros in the input format
    Template {
        #[arg(long)]
        rows: String,
        #[arg(long)]
        cols: String,
    },
    /// Compute the adjugate of a matrix read from FILE or stdin
    Compute {
        /// Matrix text: rows on separate lines, entries separated by commas
        file: Option<PathBuf>,
        /// Expected row count (recorded in exports)
        #[arg(long, requires = "cols")]
        rows: Option<String>,
        /// Expected column count (recorded in exports)
        #[arg(long, requires = "rows")]
        cols: Option<String>,
        /// Largest accepted matrix side
        #[arg(long)]
        max_dimension: Option<usize>,
        /// Fixed decimal places for printed entries
        #[arg(long)]
        precision: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Save a plain-text record of input and result; `--export=PATH` picks a
        /// file or directory
        #[arg(long, num_args = 0..=1, require_equals = true)]
        export: Option<Option<PathBuf>>,
        /// Replace an existing export file
        #[arg(long, requires = "export")]
        force: bool,
    },
    /// Print the determinant of a matrix read from FILE or stdin
    Determinant {
        file: Option<PathBuf>,
        #[arg(long)]
        max_dimension: Option<usize>,
        #[arg(long)]
        precision: Option<usize>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn load_config() -> Option<AdjointConfig> {
    match AdjointConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = anyhow::Error::new(err);
            eprintln!("Warning: {err:#}; using defaults");
            None
        }
    }
}

/// Flag, then `ADJOINT_MAX_DIMENSION`, then config, then the default.
fn dimension_limit(flag: Option<usize>, config: Option<&AdjointConfig>) -> Result<DimensionLimit> {
    resolve_dimension_limit(flag, config).context("Invalid dimension limit")
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Template { rows, cols } => commands::template(&rows, &cols, &mut out)?,
        Commands::Compute {
            file,
            rows,
            cols,
            max_dimension,
            precision,
            format,
            export,
            force,
        } => {
            let options = ComputeOptions {
                input: file,
                declared: rows.zip(cols),
                limit: dimension_limit(max_dimension, config.as_ref())?,
                precision,
                format,
                export,
                force,
            };
            commands::compute(&options, config.as_ref(), &mut out)?;
        }
        Commands::Determinant {
            file,
            max_dimension,
            precision,
        } => commands::determinant(
            file.as_deref(),
            dimension_limit(max_dimension, config.as_ref())?,
            precision,
            config.as_ref(),
            &mut out,
        )?,
    }

    out.flush()?;
    Ok(())
}
