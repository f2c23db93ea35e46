//! CLI error types

use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `bsm` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Analytical(#[from] AnalyticalError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
