//! Result rendering for the `table` and `json` output formats

use pricer_core::types::OptionType;
use pricer_models::analytical::{GreeksResult, ImpliedVolatilityResult};
use serde::Serialize;

use crate::Result;

/// Price line, e.g. `Call Option Price: ₹ 1342.12`
pub fn format_price(option_type: OptionType, price: f64, currency_symbol: &str) -> String {
    format!("{} Option Price: {} {:.2}", option_type, currency_symbol, price)
}

/// Greeks table, four decimals per value
pub fn format_greeks(greeks: &GreeksResult) -> String {
    let rows = [
        ("Delta", greeks.delta),
        ("Gamma", greeks.gamma),
        ("Vega", greeks.vega),
        ("Theta", greeks.theta),
        ("Rho", greeks.rho),
    ];

    let mut table = String::new();
    table.push_str("┌────────┬──────────────┐\n");
    table.push_str("│ Greek  │        Value │\n");
    table.push_str("├────────┼──────────────┤\n");
    for (name, value) in rows {
        table.push_str(&format!("│ {:<6} │ {:>12.4} │\n", name, value));
    }
    table.push_str("└────────┴──────────────┘");
    table
}

/// Implied volatility in percent with the solver outcome
pub fn format_implied_vol(result: &ImpliedVolatilityResult) -> String {
    let status = match (&result.failure, result.converged) {
        (_, true) => "yes".to_string(),
        (Some(reason), false) => format!("no ({})", reason),
        (None, false) => "no".to_string(),
    };
    format!(
        "Implied Volatility: {:.2} %\nConverged: {}\nIterations: {}",
        result.implied_vol * 100.0,
        status,
        result.iterations
    )
}

/// Pretty-printed JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::SolverError;

    #[test]
    fn test_format_price() {
        assert_eq!(
            format_price(OptionType::Call, 1342.1154, "₹"),
            "Call Option Price: ₹ 1342.12"
        );
        assert_eq!(
            format_price(OptionType::Put, 862.8478, "$"),
            "Put Option Price: $ 862.85"
        );
    }

    #[test]
    fn test_format_greeks() {
        let greeks = GreeksResult {
            delta: 0.59742,
            gamma: 0.000140329,
            vega: 53.3601,
            theta: -4.61824,
            rho: 51.5378,
        };
        let table = format_greeks(&greeks);
        assert!(table.contains("│ Delta  │       0.5974 │"));
        assert!(table.contains("│ Gamma  │       0.0001 │"));
        assert!(table.contains("│ Theta  │      -4.6182 │"));
        assert_eq!(table.lines().count(), 9);
    }

    #[test]
    fn test_format_implied_vol_converged() {
        let result = ImpliedVolatilityResult {
            implied_vol: 0.2,
            converged: true,
            iterations: 1,
            failure: None,
        };
        assert_eq!(
            format_implied_vol(&result),
            "Implied Volatility: 20.00 %\nConverged: yes\nIterations: 1"
        );
    }

    #[test]
    fn test_format_implied_vol_failure_reason() {
        let result = ImpliedVolatilityResult {
            implied_vol: 1e-6,
            converged: false,
            iterations: 2,
            failure: Some(SolverError::DerivativeNearZero { x: 1e-6 }),
        };
        let text = format_implied_vol(&result);
        assert!(text.starts_with("Implied Volatility: 0.00 %"));
        assert!(text.contains("Converged: no (Derivative near zero"));
    }

    #[test]
    fn test_to_json() {
        let result = ImpliedVolatilityResult {
            implied_vol: 0.25,
            converged: true,
            iterations: 4,
            failure: None,
        };
        let json = to_json(&result).unwrap();
        assert!(json.contains("\"implied_vol\": 0.25"));
        assert!(json.contains("\"failure\": null"));
    }
}
