//! Option parameter records with validation.
//!
//! - [`OptionContract`]: spot, strike, expiry, rate and direction; the
//!   input of the implied volatility solver
//! - [`OptionParameters`]: a contract plus volatility; the input of the
//!   pricer and the Greeks engine
//!
//! Validation rejects non-positive (or non-finite) spot, strike, expiry and
//! volatility. Nothing is clamped: zero or negative time to expiry must be
//! handled by the caller, e.g. with [`pricer_core::types::time_to_expiry`].

use pricer_core::types::OptionType;

use super::error::AnalyticalError;

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_terms(spot: f64, strike: f64, expiry: f64, rate: f64) -> Result<(), AnalyticalError> {
    if !is_positive(spot) {
        return Err(AnalyticalError::InvalidSpot { spot });
    }
    if !is_positive(strike) {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    if !is_positive(expiry) {
        return Err(AnalyticalError::InvalidExpiry { expiry });
    }
    // Negative rates are allowed
    if !rate.is_finite() {
        return Err(AnalyticalError::InvalidRate { rate });
    }
    Ok(())
}

/// European option terms without a volatility.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::OptionContract;
///
/// let contract = OptionContract::new(19500.0, 19600.0, 0.5, 0.06, OptionType::Call).unwrap();
/// let params = contract.with_volatility(0.2);
/// assert_eq!(params.volatility, 0.2);
///
/// assert!(OptionContract::new(19500.0, 19600.0, 0.0, 0.06, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate as a decimal (r)
    pub rate: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionContract {
    /// Creates validated contract terms.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        let contract = Self {
            spot,
            strike,
            expiry,
            rate,
            option_type,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Checks the domain of every field.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        validate_terms(self.spot, self.strike, self.expiry, self.rate)
    }

    /// Attaches a volatility. The result is validated when priced.
    #[inline]
    pub fn with_volatility(&self, volatility: f64) -> OptionParameters {
        OptionParameters {
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry,
            rate: self.rate,
            volatility,
            option_type: self.option_type,
        }
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// No-arbitrage lower bound of the option price.
    ///
    /// - Call: max(S - K·e^(-rT), 0)
    /// - Put: max(K·e^(-rT) - S, 0)
    ///
    /// No volatility reproduces a market price below this bound.
    pub fn price_lower_bound(&self) -> f64 {
        let forward_intrinsic = self.spot - self.strike * self.discount_factor();
        match self.option_type {
            OptionType::Call => forward_intrinsic.max(0.0),
            OptionType::Put => (-forward_intrinsic).max(0.0),
        }
    }
}

/// Inputs of the Black-Scholes-Merton pricer.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{AnalyticalError, OptionParameters};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// assert_eq!(params.contract().strike, 100.0);
///
/// let err = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Put).unwrap_err();
/// assert_eq!(err, AnalyticalError::InvalidVolatility { volatility: 0.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate as a decimal (r)
    pub rate: f64,
    /// Volatility as a decimal (σ)
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Creates validated pricing parameters.
    ///
    /// # Errors
    /// Same as [`OptionContract::new`], plus
    /// `AnalyticalError::InvalidVolatility` if volatility <= 0.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        let params = Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks the domain of every field, spot first and volatility last.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        validate_terms(self.spot, self.strike, self.expiry, self.rate)?;
        if !is_positive(self.volatility) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        Ok(())
    }

    /// The contract terms without volatility.
    #[inline]
    pub fn contract(&self) -> OptionContract {
        OptionContract {
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry,
            rate: self.rate,
            option_type: self.option_type,
        }
    }

    /// Same parameters with another volatility.
    #[inline]
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self { volatility, ..*self }
    }

    /// Same parameters with another option type.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Total volatility σ√T.
    #[inline]
    pub fn total_volatility(&self) -> f64 {
        self.volatility * self.expiry.sqrt()
    }
}
