//! Closed-form Black-Scholes-Merton analytics for European options.
//!
//! This module provides:
//! - Parameter records with validation ([`OptionContract`], [`OptionParameters`])
//! - The pricer ([`price`], [`price_with_greeks`])
//! - Closed-form Greeks ([`greeks`])
//! - Newton-Raphson implied volatility ([`implied_volatility`], [`ImpliedVolSolver`])
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Validate, never clamp**: out-of-domain inputs are rejected before any computation
//! - **Soft non-convergence**: the IV solver reports failure inside its result
//! - **Stateless**: every entry point is a pure function of its inputs

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;
pub mod implied_vol;
pub mod params;

// Re-export main types at module level
pub use black_scholes::{price, price_with_greeks, PricingResult};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{greeks, GreeksResult};
pub use implied_vol::{
    implied_volatility, ImpliedVolConfig, ImpliedVolSolver, ImpliedVolatilityResult,
};
pub use params::{OptionContract, OptionParameters};
