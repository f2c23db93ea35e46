//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Parameter and domain errors raised by the
//!   Black-Scholes-Merton pricer, Greeks engine and implied volatility solver

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant is raised synchronously, before any computation, and is
/// never silently corrected. Solver non-convergence is not an error here;
/// it is reported inside the implied volatility result.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike price
/// - `InvalidExpiry`: Non-positive or non-finite time to expiry
/// - `InvalidRate`: Non-finite risk-free rate
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidMarketPrice`: Non-positive or non-finite target price
/// - `NonFiniteIntermediate`: d1/d2 handed to the Greeks engine are not finite
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value (years)
        expiry: f64,
    },

    /// Invalid risk-free rate.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid market price for implied volatility.
    #[error("Invalid market price: {price}")]
    InvalidMarketPrice {
        /// The invalid market price
        price: f64,
    },

    /// Non-finite d1/d2 supplied to the Greeks engine.
    #[error("Non-finite intermediate term: d1 = {d1}, d2 = {d2}")]
    NonFiniteIntermediate {
        /// The supplied d1
        d1: f64,
        /// The supplied d2
        d2: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NonFiniteIntermediate { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid time to expiry: T = 0");
    }

    #[test]
    fn test_invalid_market_price_display() {
        let err = AnalyticalError::InvalidMarketPrice { price: -5.0 };
        assert_eq!(format!("{}", err), "Invalid market price: -5");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_parameter_errors_to_pricing_error() {
        let err: PricingError = AnalyticalError::InvalidSpot { spot: -50.0 }.into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("spot")),
            other => panic!("Expected InvalidInput variant, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_intermediate_to_pricing_error() {
        let err: PricingError = AnalyticalError::NonFiniteIntermediate {
            d1: f64::NAN,
            d2: 0.0,
        }
        .into();
        match err {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("d1")),
            other => panic!("Expected NumericalInstability variant, got {:?}", other),
        }
    }
}
