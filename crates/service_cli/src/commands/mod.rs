//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Both commands share
//! the contract arguments defined here.

pub mod iv;
pub mod price;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use pricer_core::types::{time_to_expiry, OptionType};
use pricer_models::analytical::OptionContract;
use tracing::debug;

use crate::{CliError, Result};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Contract terms shared by `price` and `iv`
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long, allow_hyphen_values = true)]
    pub spot: f64,

    /// Strike price
    #[arg(long, allow_hyphen_values = true)]
    pub strike: f64,

    /// Time to expiry in years (passed through unclamped)
    #[arg(
        long,
        allow_hyphen_values = true,
        conflicts_with = "expiry_date",
        required_unless_present = "expiry_date"
    )]
    pub expiry_years: Option<f64>,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry_date: Option<NaiveDate>,

    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "expiry_date")]
    pub valuation_date: Option<NaiveDate>,

    /// Risk-free rate in percent
    #[arg(long, default_value_t = 6.0, allow_hyphen_values = true)]
    pub rate_pct: f64,

    /// Option type (call or put)
    #[arg(short = 't', long, default_value = "call")]
    pub option_type: OptionType,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ContractArgs {
    /// Time to expiry in years.
    ///
    /// Dates go through `time_to_expiry`, which clamps expired contracts to
    /// the minimum; an explicit year count is left for the pricer to validate.
    pub fn expiry(&self) -> Result<f64> {
        match (self.expiry_years, self.expiry_date) {
            (Some(years), _) => Ok(years),
            (None, Some(expiry)) => {
                let valuation = self
                    .valuation_date
                    .unwrap_or_else(|| chrono::Local::now().date_naive());
                let years = time_to_expiry(valuation, expiry);
                debug!(%valuation, %expiry, years, "Converted expiry date");
                Ok(years)
            }
            (None, None) => Err(CliError::InvalidArgument(
                "one of --expiry-years or --expiry-date is required".to_string(),
            )),
        }
    }

    /// Contract terms with the rate converted from percent.
    pub fn contract(&self) -> Result<OptionContract> {
        let contract = OptionContract {
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry()?,
            rate: self.rate_pct / 100.0,
            option_type: self.option_type,
        };
        contract.validate()?;
        Ok(contract)
    }
}
