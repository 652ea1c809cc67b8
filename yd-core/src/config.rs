//! Configuration for the `yd` driver.
//!
//! Every field has a default, so an empty YAML document (or no file at all) is a
//! valid configuration. Command-line flags are applied on top by the driver.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Random roll settings.
    #[serde(default)]
    pub roll: RollConfig,
    /// Result rendering settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// NDJSON event log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Random roll configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RollConfig {
    /// Fixed seed for reproducible rolls. If None, a fresh seed is drawn per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `label(dice) -> score` line per category.
    #[default]
    Text,
    /// A single JSON object on stdout.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Include the face tally in the output.
    #[serde(default = "default_show_tally")]
    pub show_tally: bool,
}

fn default_show_tally() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_tally: default_show_tally(),
        }
    }
}

/// Event log configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Append NDJSON events to this file. If None, no events are written.
    #[serde(default)]
    pub events_path: Option<String>,
    /// Flush the event log every N lines (0 flushes only on exit).
    #[serde(default = "default_flush_every_lines")]
    pub flush_every_lines: u64,
}

fn default_flush_every_lines() -> u64 {
    1
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            flush_every_lines: default_flush_every_lines(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_with_bytes(path)?.0)
    }

    /// Load configuration from a YAML file, also returning the raw file bytes.
    ///
    /// The file must be valid UTF-8; anything else is an `Io` error of kind `InvalidData`.
    pub fn load_with_bytes<P: AsRef<Path>>(path: P) -> Result<(Self, Vec<u8>), ConfigError> {
        let bytes = std::fs::read(path)?;
        let contents = std::str::from_utf8(&bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let config = Self::from_yaml(contents)?;
        Ok((config, bytes))
    }

    /// Load configuration from a YAML string. Blank input yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
