//! Implied volatility by Newton-Raphson on the Black-Scholes-Merton price.
//!
//! Solves `price(σ) − market_price = 0` with the raw vega `S·φ(d1)·√T` as
//! derivative, delegating the iteration to
//! [`NewtonRaphsonSolver`](pricer_core::math::solvers::NewtonRaphsonSolver)
//! with a volatility floor as lower bound.
//!
//! Non-convergence is not an error: the result carries `converged = false`,
//! the last volatility tried and the reason the iteration stopped.

use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::SolverError;
use tracing::debug;

use super::black_scholes::{d1_d2, price_unchecked, raw_vega};
use super::error::AnalyticalError;
use super::params::OptionContract;

/// Settings of the implied volatility solver.
///
/// # Examples
/// ```
/// use pricer_models::analytical::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::default().with_initial_guess(0.35);
/// assert_eq!(config.initial_guess, 0.35);
/// assert_eq!(config.tolerance, 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolConfig {
    /// Starting volatility (decimal)
    pub initial_guess: f64,
    /// Absolute price difference accepted as converged
    pub tolerance: f64,
    /// Maximum number of price evaluations
    pub max_iterations: usize,
    /// Smallest volatility the iteration may visit
    pub volatility_floor: f64,
    /// Raw vega below which the Newton step is abandoned
    pub min_vega: f64,
}

impl Default for ImpliedVolConfig {
    /// Default values:
    /// - `initial_guess`: 0.2
    /// - `tolerance`: 1e-5
    /// - `max_iterations`: 100
    /// - `volatility_floor`: 1e-6
    /// - `min_vega`: 1e-10
    fn default() -> Self {
        Self {
            initial_guess: 0.2,
            tolerance: 1e-5,
            max_iterations: 100,
            volatility_floor: 1e-6,
            min_vega: 1e-10,
        }
    }
}

impl ImpliedVolConfig {
    /// Replaces the starting volatility.
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Replaces the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replaces the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replaces the volatility floor.
    pub fn with_volatility_floor(mut self, volatility_floor: f64) -> Self {
        self.volatility_floor = volatility_floor;
        self
    }
}

/// Outcome of an implied volatility search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolatilityResult {
    /// Implied volatility, or the last iterate when not converged.
    /// Always finite and at least the volatility floor.
    pub implied_vol: f64,
    /// Whether |price(σ) − market| fell below the tolerance
    pub converged: bool,
    /// Price evaluations performed
    pub iterations: usize,
    /// Why the search stopped, when `converged` is false
    pub failure: Option<SolverError>,
}

/// Newton-Raphson implied volatility solver.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{ImpliedVolConfig, ImpliedVolSolver, OptionContract};
///
/// let solver = ImpliedVolSolver::new(ImpliedVolConfig::default().with_initial_guess(0.3));
/// let contract = OptionContract::new(19500.0, 19600.0, 0.5, 0.06, OptionType::Call).unwrap();
/// let result = solver.solve(&contract, 1342.1154).unwrap();
/// assert!(result.converged);
/// assert!((result.implied_vol - 0.2).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolSolver {
    config: ImpliedVolConfig,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::new(ImpliedVolConfig::default())
    }
}

impl ImpliedVolSolver {
    /// Creates a solver.
    ///
    /// # Panics
    /// If the initial guess, tolerance, volatility floor or `min_vega` is
    /// not finite and positive, or if `max_iterations` is zero.
    pub fn new(config: ImpliedVolConfig) -> Self {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        assert!(positive(config.initial_guess), "initial_guess must be positive");
        assert!(positive(config.tolerance), "tolerance must be positive");
        assert!(
            positive(config.volatility_floor),
            "volatility_floor must be positive"
        );
        assert!(positive(config.min_vega), "min_vega must be positive");
        assert!(config.max_iterations > 0, "max_iterations must be > 0");
        Self { config }
    }

    /// Returns the solver settings.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Finds the volatility reproducing `market_price`.
    ///
    /// # Errors
    /// - Contract validation errors, as for [`OptionContract::validate`]
    /// - `AnalyticalError::InvalidMarketPrice` if `market_price` is not
    ///   finite and positive
    ///
    /// Failing to converge is reported in the result, not as an error.
    pub fn solve(
        &self,
        contract: &OptionContract,
        market_price: f64,
    ) -> Result<ImpliedVolatilityResult, AnalyticalError> {
        contract.validate()?;
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(AnalyticalError::InvalidMarketPrice {
                price: market_price,
            });
        }

        let newton = NewtonRaphsonSolver::new(SolverConfig::new(
            self.config.tolerance,
            self.config.max_iterations,
        ))
        .with_lower_bound(self.config.volatility_floor)
        .with_min_derivative(self.config.min_vega);

        let objective =
            |sigma: f64| price_unchecked(&contract.with_volatility(sigma)).price - market_price;
        let vega = |sigma: f64| {
            let params = contract.with_volatility(sigma);
            let (d1, _) = d1_d2(&params);
            let v = raw_vega(&params, d1);
            // NaN stops the iteration as an unusable derivative
            if v.is_finite() {
                v
            } else {
                f64::NAN
            }
        };

        let root = newton.solve(objective, vega, self.config.initial_guess);

        if !root.converged {
            debug!(
                market_price,
                price_lower_bound = contract.price_lower_bound(),
                implied_vol = root.root,
                iterations = root.iterations,
                failure = ?root.failure,
                "implied volatility did not converge"
            );
        }

        Ok(ImpliedVolatilityResult {
            implied_vol: root.root,
            converged: root.converged,
            iterations: root.iterations,
            failure: root.failure,
        })
    }
}

/// Implied volatility with the default solver settings.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{implied_volatility, price, OptionContract};
///
/// let contract = OptionContract::new(100.0, 110.0, 0.25, 0.03, OptionType::Put).unwrap();
/// let market = price(&contract.with_volatility(0.45)).unwrap().price;
///
/// let result = implied_volatility(&contract, market).unwrap();
/// assert!(result.converged);
/// assert!((result.implied_vol - 0.45).abs() < 1e-3);
/// ```
pub fn implied_volatility(
    contract: &OptionContract,
    market_price: f64,
) -> Result<ImpliedVolatilityResult, AnalyticalError> {
    ImpliedVolSolver::default().solve(contract, market_price)
}
