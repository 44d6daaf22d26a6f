//! Configuration for adjoint, read from `~/.adjoint/config.toml`.
//!
//! ```toml
//! [limits]
//! max_dimension = 10
//!
//! [output]
//! precision = 4
//! separator = ", "
//! export_dir = "${HOME}/matrices"
//! ```
//!
//! Every section and key is optional; a missing file means defaults.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use adjoint_types::{DimensionLimit, LimitError};
use serde::Deserialize;
use thiserror::Error;

/// Environment override for `[limits] max_dimension`.
pub const MAX_DIMENSION_ENV: &str = "ADJOINT_MAX_DIMENSION";

#[derive(Debug, Default, Deserialize)]
pub struct AdjointConfig {
    pub limits: Option<LimitsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted matrix side. Default: 10. Ceiling: 12.
    pub max_dimension: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Fixed decimal places for rendered entries.
    pub precision: Option<usize>,
    /// Placed between entries of a row. Default: ", ".
    pub separator: Option<String>,
    /// Directory for export records. `${VAR}` references are expanded.
    pub export_dir: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Replace `${VAR}` with the variable's value; unset variables become empty.
/// An unclosed `${` is kept literally.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(end_rel) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &rest[start + 2..start + 2 + end_rel];
        if !name.is_empty() {
            out.push_str(&env::var(name).unwrap_or_default());
        }
        rest = &rest[start + 2 + end_rel + 1..];
    }

    out.push_str(rest);
    out
}

impl AdjointConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn max_dimension(&self) -> Option<usize> {
        self.limits.as_ref().and_then(|limits| limits.max_dimension)
    }

    #[must_use]
    pub fn precision(&self) -> Option<usize> {
        self.output.as_ref().and_then(|output| output.precision)
    }

    #[must_use]
    pub fn separator(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.separator.as_deref())
    }

    /// Export directory with `${VAR}` references expanded.
    #[must_use]
    pub fn export_dir(&self) -> Option<PathBuf> {
        let raw = self.output.as_ref()?.export_dir.as_deref()?;
        let expanded = expand_env_vars(raw);
        if expanded.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(expanded))
        }
    }
}

/// Pick the dimension limit: flag, then environment, then config, then default.
///
/// An unparsable environment value is logged and skipped. An explicit but
/// out-of-range value from any source is an error rather than silently clamped.
pub fn resolve_dimension_limit(
    flag: Option<usize>,
    config: Option<&AdjointConfig>,
) -> Result<DimensionLimit, LimitError> {
    let from_env = env::var(MAX_DIMENSION_ENV).ok();
    dimension_limit_from(flag, from_env.as_deref(), config)
}

fn dimension_limit_from(
    flag: Option<usize>,
    env_value: Option<&str>,
    config: Option<&AdjointConfig>,
) -> Result<DimensionLimit, LimitError> {
    let from_env = env_value.and_then(|raw| match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}: {:?}", MAX_DIMENSION_ENV, raw);
            None
        }
    });

    match flag
        .or(from_env)
        .or_else(|| config.and_then(AdjointConfig::max_dimension))
    {
        Some(value) => DimensionLimit::new(value),
        None => Ok(DimensionLimit::default()),
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".adjoint").join("config.toml"))
}
