use thiserror::Error;

use yd_core::{ConfigError, DiceError};
use yd_logging::NdjsonError;

/// Everything that can stop a `yd` run, mapped to a process exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of faces, unknown option, missing option value.
    #[error("{0}")]
    Usage(String),
    #[error("invalid face value {arg:?}: not an integer")]
    BadFace { arg: String },
    #[error("invalid dice: {0}")]
    InvalidDice(#[from] DiceError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Log(#[from] NdjsonError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 1,
            CliError::BadFace { .. } | CliError::InvalidDice(_) => 2,
            CliError::Config(_) | CliError::Log(_) | CliError::Output(_) => 3,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }
}
