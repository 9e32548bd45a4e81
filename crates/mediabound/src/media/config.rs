//! Media query configuration and loading.
//!
//! A configuration names the breakpoint table and the axis ranges are
//! measured on. Both fields are optional in files:
//!
//! ```yaml
//! bp:
//!   s: 400
//!   m: 768
//!   l: 1100
//! type: height
//! ```
//!
//! Missing `bp` means the standard table, missing `type` means `width`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::axis::Axis;
use crate::breakpoint::{default_breakpoints, BreakpointTable};

/// Error returned when a configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// The file extension is not one of `.yaml`, `.yml` or `.json`
    #[error("unsupported config format for {path}, expected .yaml, .yml or .json")]
    UnsupportedFormat { path: PathBuf },
    #[error("breakpoint names must not be empty")]
    EmptyKey,
}

/// Breakpoint table and measurement axis for a [`MediaQuery`](super::MediaQuery).
///
/// # Example
///
/// ```rust
/// use mediabound::{Axis, BreakpointTable, MediaConfig};
///
/// let config = MediaConfig::default()
///     .with_breakpoints(BreakpointTable::new().add("m", 768u32))
///     .with_axis(Axis::Height);
///
/// assert_eq!(config.axis, Axis::Height);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaConfig {
    #[serde(default = "default_breakpoints")]
    pub bp: BreakpointTable,
    #[serde(rename = "type", default)]
    pub axis: Axis,
}

impl MediaConfig {
    pub fn new(bp: BreakpointTable, axis: Axis) -> Self {
        Self { bp, axis }
    }

    /// Replaces the breakpoint table.
    pub fn with_breakpoints(mut self, bp: BreakpointTable) -> Self {
        self.bp = bp;
        self
    }

    /// Replaces the measurement axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Parses a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: MediaConfig = serde_yaml::from_str(source)?;
        config.checked()
    }

    /// Parses a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: MediaConfig = serde_json::from_str(source)?;
        config.checked()
    }

    /// Loads a configuration file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading media config");
        parse(&source)
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.bp.iter().any(|(name, _)| name.is_empty()) {
            return Err(ConfigError::EmptyKey);
        }
        // Malformed entries only fail when they are resolved.
        for (name, value) in self.bp.malformed() {
            tracing::warn!(breakpoint = name, value = %value, "breakpoint is not a pixel value");
        }
        tracing::debug!(
            breakpoints = self.bp.len(),
            axis = %self.axis,
            "parsed media config"
        );
        Ok(self)
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            bp: default_breakpoints(),
            axis: Axis::Width,
        }
    }
}
