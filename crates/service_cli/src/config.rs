//! CLI configuration management
//!
//! Loads settings from a TOML file, then environment variables, then
//! command line flags (highest priority).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_models::analytical::ImpliedVolConfig;
use serde::Deserialize;
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bsm.toml";

const ENV_LOG_LEVEL: &str = "BSM_LOG_LEVEL";
const ENV_CURRENCY_SYMBOL: &str = "BSM_CURRENCY_SYMBOL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid solver setting: {0}")]
    InvalidSolverSetting(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in the config file and `BSM_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Implied volatility solver settings (`[solver]` table)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Starting volatility (decimal)
    pub initial_guess: f64,
    /// Absolute price tolerance
    pub tolerance: f64,
    /// Iteration cap
    pub max_iterations: usize,
    /// Lowest volatility visited
    pub volatility_floor: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let defaults = ImpliedVolConfig::default();
        Self {
            initial_guess: defaults.initial_guess,
            tolerance: defaults.tolerance,
            max_iterations: defaults.max_iterations,
            volatility_floor: defaults.volatility_floor,
        }
    }
}

impl SolverSettings {
    /// Reject settings the solver cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("initial_guess", self.initial_guess),
            ("tolerance", self.tolerance),
            ("volatility_floor", self.volatility_floor),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSolverSetting(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidSolverSetting(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Solver configuration for `pricer_models`
    pub fn to_iv_config(&self) -> ImpliedVolConfig {
        ImpliedVolConfig::default()
            .with_initial_guess(self.initial_guess)
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
            .with_volatility_floor(self.volatility_floor)
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Symbol printed in front of prices
    pub currency_symbol: String,
    /// Implied volatility solver settings
    pub solver: SolverSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            currency_symbol: "₹".to_string(),
            solver: SolverSettings::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            self.currency_symbol = symbol;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(guess) = cli.initial_guess {
            self.solver.initial_guess = guess;
        }
    }
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Force debug logging
    pub verbose: bool,
    /// Initial volatility guess override
    pub initial_guess: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, or `bsm.toml` when present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli);

    // Final validation
    config.validate()?;

    Ok(config)
}
