//! Price command implementation
//!
//! Prices a European option and reports its Greeks.

use clap::Args;
use pricer_models::analytical::{
    price_with_greeks, GreeksResult, OptionParameters, PricingResult,
};
use serde::Serialize;
use tracing::info;

use super::{ContractArgs, OutputFormat};
use crate::config::CliConfig;
use crate::output::{format_greeks, format_price, to_json};
use crate::Result;

/// Arguments of `bsm price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Volatility in percent
    #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
    pub vol_pct: f64,
}

/// Everything `bsm price` reports
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub inputs: OptionParameters,
    pub pricing: PricingResult,
    pub greeks: GreeksResult,
}

/// Price the option described by `args`
pub fn evaluate(args: &PriceArgs) -> Result<PriceReport> {
    let inputs = args.contract.contract()?.with_volatility(args.vol_pct / 100.0);
    let (pricing, greeks) = price_with_greeks(&inputs)?;
    Ok(PriceReport {
        inputs,
        pricing,
        greeks,
    })
}

/// Render a report in the requested format
pub fn render(report: &PriceReport, format: OutputFormat, currency_symbol: &str) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => Ok(format!(
            "{}\n\n{}",
            format_price(report.inputs.option_type, report.pricing.price, currency_symbol),
            format_greeks(&report.greeks)
        )),
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    info!(
        spot = args.contract.spot,
        strike = args.contract.strike,
        rate_pct = args.contract.rate_pct,
        vol_pct = args.vol_pct,
        option_type = %args.contract.option_type,
        "Starting pricing"
    );

    let report = evaluate(args)?;
    println!("{}", render(&report, args.contract.format, &config.currency_symbol)?);

    info!(price = report.pricing.price, "Pricing complete");
    Ok(())
}
