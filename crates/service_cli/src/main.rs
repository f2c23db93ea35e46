//! BSM CLI - Black-Scholes-Merton pricing from the command line
//!
//! # Commands
//!
//! - `bsm price --spot S --strike K --expiry-years T` - Price an option and report its Greeks
//! - `bsm iv --spot S --strike K --expiry-years T --market-price P` - Solve for implied volatility
//!
//! Rates and volatilities are entered in percent. Settings are read from
//! `bsm.toml` (or `--config`), then `BSM_*` environment variables, then flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::iv::IvArgs;
use commands::price::PriceArgs;
use config::{build_config, CliArgs};

/// Black-Scholes-Merton option pricing CLI
#[derive(Debug, Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML); `bsm.toml` is used when present
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price a European option and compute its Greeks
    Price(PriceArgs),

    /// Compute implied volatility from a market price
    Iv(IvArgs),
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let initial_guess = match &self.command {
            Commands::Iv(args) => args.initial_guess,
            Commands::Price(_) => None,
        };
        CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            initial_guess,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    info!("BSM CLI v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        log_level = %config.log_level,
        currency_symbol = %config.currency_symbol,
        solver = ?config.solver,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config),
        Commands::Iv(args) => commands::iv::run(args, &config),
    }
}
