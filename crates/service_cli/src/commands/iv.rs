//! Implied volatility command implementation
//!
//! Backs out the volatility that reproduces a quoted option price.

use clap::Args;
use pricer_models::analytical::{ImpliedVolSolver, ImpliedVolatilityResult, OptionContract};
use serde::Serialize;
use tracing::{info, warn};

use super::{ContractArgs, OutputFormat};
use crate::config::{CliConfig, SolverSettings};
use crate::output::{format_implied_vol, to_json};
use crate::Result;

/// Arguments of `bsm iv`
#[derive(Debug, Clone, Args)]
pub struct IvArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Observed option price
    #[arg(long, allow_hyphen_values = true)]
    pub market_price: f64,

    /// Starting volatility as a decimal (overrides the config file)
    #[arg(long)]
    pub initial_guess: Option<f64>,
}

/// Everything `bsm iv` reports
#[derive(Debug, Clone, Serialize)]
pub struct IvReport {
    pub contract: OptionContract,
    pub market_price: f64,
    pub result: ImpliedVolatilityResult,
}

/// Solve for the implied volatility
pub fn evaluate(args: &IvArgs, solver: &SolverSettings) -> Result<IvReport> {
    let contract = args.contract.contract()?;
    let result = ImpliedVolSolver::new(solver.to_iv_config()).solve(&contract, args.market_price)?;
    Ok(IvReport {
        contract,
        market_price: args.market_price,
        result,
    })
}

/// Render a report in the requested format
pub fn render(report: &IvReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => Ok(format_implied_vol(&report.result)),
    }
}

/// Run the implied volatility command
pub fn run(args: &IvArgs, config: &CliConfig) -> Result<()> {
    info!(
        spot = args.contract.spot,
        strike = args.contract.strike,
        market_price = args.market_price,
        option_type = %args.contract.option_type,
        initial_guess = config.solver.initial_guess,
        "Solving for implied volatility"
    );

    let report = evaluate(args, &config.solver)?;
    if !report.result.converged {
        warn!(
            iterations = report.result.iterations,
            "Implied volatility did not converge; try another --initial-guess"
        );
    }
    println!("{}", render(&report, args.contract.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::contract_args;
    use crate::CliError;
    use approx::assert_relative_eq;

    fn iv_args(market_price: f64) -> IvArgs {
        IvArgs {
            contract: contract_args(),
            market_price,
            initial_guess: None,
        }
    }

    #[test]
    fn test_evaluate_round_trip() {
        let report = evaluate(&iv_args(1342.1154), &SolverSettings::default()).unwrap();
        assert!(report.result.converged);
        assert_relative_eq!(report.result.implied_vol, 0.2, epsilon = 1e-3);
    }

    #[test]
    fn test_render_table() {
        let report = evaluate(&iv_args(1342.1154), &SolverSettings::default()).unwrap();
        let text = render(&report, OutputFormat::Table).unwrap();
        assert!(text.starts_with("Implied Volatility: 20.00 %"));
        assert!(text.contains("Converged: yes"));
    }

    #[test]
    fn test_non_convergence_is_reported_not_raised() {
        let report = evaluate(&iv_args(10.0), &SolverSettings::default()).unwrap();
        assert!(!report.result.converged);
        let json = render(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"converged\": false"));
    }

    #[test]
    fn test_invalid_market_price() {
        let result = evaluate(&iv_args(0.0), &SolverSettings::default());
        assert!(matches!(result, Err(CliError::Analytical(_))));
    }
}
