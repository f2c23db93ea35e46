//! Closed-form Black-Scholes-Merton sensitivities.
//!
//! Quoting conventions:
//! - Vega per one percentage point of volatility (÷100)
//! - Theta per calendar day (÷365)
//! - Rho per one percentage point of rate (÷100)

use pricer_core::types::OptionType;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::params::OptionParameters;

const DAYS_PER_YEAR: f64 = 365.0;
const PER_PERCENT: f64 = 100.0;

/// Option sensitivities in quoting units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1% volatility
    pub vega: f64,
    /// −∂V/∂T per calendar day
    pub theta: f64,
    /// ∂V/∂r per 1% rate
    pub rho: f64,
}

/// Computes the Greeks from the pricer's `d1`/`d2`.
///
/// | Greek | Call | Put |
/// |-------|------|-----|
/// | Delta | Φ(d1) | Φ(d1) − 1 |
/// | Gamma | φ(d1) / (S·σ·√T) | same |
/// | Vega  | S·φ(d1)·√T / 100 | same |
/// | Theta | [−S·φ(d1)·σ/(2√T) − r·K·e^(−rT)·Φ(d2)] / 365 | [−S·φ(d1)·σ/(2√T) + r·K·e^(−rT)·Φ(−d2)] / 365 |
/// | Rho   | K·T·e^(−rT)·Φ(d2) / 100 | −K·T·e^(−rT)·Φ(−d2) / 100 |
///
/// # Errors
/// - Parameter validation errors, as for [`price`](super::price)
/// - `AnalyticalError::NonFiniteIntermediate` if `d1` or `d2` is not finite
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{greeks, price, OptionParameters};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let pricing = price(&params).unwrap();
/// let g = greeks(&params, pricing.d1, pricing.d2).unwrap();
/// assert!((g.delta - 0.6368).abs() < 1e-4);
/// ```
pub fn greeks(
    params: &OptionParameters,
    d1: f64,
    d2: f64,
) -> Result<GreeksResult, AnalyticalError> {
    params.validate()?;
    if !d1.is_finite() || !d2.is_finite() {
        return Err(AnalyticalError::NonFiniteIntermediate { d1, d2 });
    }

    let OptionParameters {
        spot,
        strike,
        expiry,
        rate,
        volatility,
        option_type,
    } = *params;

    let sqrt_t = expiry.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = strike * params.discount_factor();

    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t / PER_PERCENT;
    let time_decay = -spot * pdf_d1 * volatility / (2.0 * sqrt_t);

    let (delta, theta, rho) = match option_type {
        OptionType::Call => {
            let cdf_d2 = norm_cdf(d2);
            (
                norm_cdf(d1),
                time_decay - rate * discounted_strike * cdf_d2,
                expiry * discounted_strike * cdf_d2,
            )
        }
        OptionType::Put => {
            let cdf_minus_d2 = norm_cdf(-d2);
            (
                norm_cdf(d1) - 1.0,
                time_decay + rate * discounted_strike * cdf_minus_d2,
                -expiry * discounted_strike * cdf_minus_d2,
            )
        }
    };

    Ok(GreeksResult {
        delta,
        gamma,
        vega,
        theta: theta / DAYS_PER_YEAR,
        rho: rho / PER_PERCENT,
    })
}
