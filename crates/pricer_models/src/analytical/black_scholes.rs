//! Black-Scholes-Merton closed-form pricing for European options.
//!
//! Continuous compounding, no dividends:
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = d1 − σ·√T
//! Call = S·Φ(d1) − K·e^(−rT)·Φ(d2)
//! Put  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
//! ```

use pricer_core::types::OptionType;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::{greeks, GreeksResult};
use super::params::OptionParameters;

/// Price of a European option together with the intermediate terms.
///
/// `d1` and `d2` are kept so the Greeks engine can reuse them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Option price (non-negative)
    pub price: f64,
    /// d1 term
    pub d1: f64,
    /// d2 term
    pub d2: f64,
}

/// d1 and d2 for parameters already known to be in domain.
#[inline]
pub(crate) fn d1_d2(params: &OptionParameters) -> (f64, f64) {
    let sigma_sqrt_t = params.total_volatility();
    let d1 = ((params.spot / params.strike).ln()
        + (params.rate + 0.5 * params.volatility * params.volatility) * params.expiry)
        / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Closed-form price without validation.
pub(crate) fn price_unchecked(params: &OptionParameters) -> PricingResult {
    let (d1, d2) = d1_d2(params);
    let discounted_strike = params.strike * params.discount_factor();

    let price = match params.option_type {
        OptionType::Call => params.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - params.spot * norm_cdf(-d1),
    };

    PricingResult {
        price: price.max(0.0),
        d1,
        d2,
    }
}

/// ∂V/∂σ per unit of volatility: S·φ(d1)·√T.
#[inline]
pub(crate) fn raw_vega(params: &OptionParameters, d1: f64) -> f64 {
    params.spot * norm_pdf(d1) * params.expiry.sqrt()
}

/// Prices a European option under Black-Scholes-Merton.
///
/// # Errors
/// Returns the first failing check of [`OptionParameters::validate`];
/// nothing is computed for out-of-domain inputs.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{price, OptionParameters};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let result = price(&params).unwrap();
/// assert!((result.price - 10.4506).abs() < 1e-4);
/// assert!((result.d1 - 0.35).abs() < 1e-12);
/// ```
pub fn price(params: &OptionParameters) -> Result<PricingResult, AnalyticalError> {
    params.validate()?;
    Ok(price_unchecked(params))
}

/// Prices the option and computes its Greeks from one d1/d2 evaluation.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{price_with_greeks, OptionParameters};
///
/// let params = OptionParameters::new(19500.0, 19600.0, 0.5, 0.06, 0.2, OptionType::Put).unwrap();
/// let (pricing, greeks) = price_with_greeks(&params).unwrap();
/// assert!(pricing.price > 0.0);
/// assert!(greeks.delta < 0.0 && greeks.delta > -1.0);
/// ```
pub fn price_with_greeks(
    params: &OptionParameters,
) -> Result<(PricingResult, GreeksResult), AnalyticalError> {
    let pricing = price(params)?;
    let sensitivities = greeks(params, pricing.d1, pricing.d2)?;
    Ok((pricing, sensitivities))
}
