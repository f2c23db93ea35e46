//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes-Merton pricing, Greeks and implied volatility for
//! European options on a non-dividend-paying underlying.
//!
//! This crate provides:
//! - Closed-form call and put prices with the d1/d2 terms
//! - Delta, Gamma, Vega (per 1%), Theta (per day) and Rho (per 1%)
//! - Implied volatility by Newton-Raphson on top of
//!   `pricer_core::math::solvers`
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::OptionType;
//! use pricer_models::analytical::{implied_volatility, price_with_greeks, OptionParameters};
//!
//! let params = OptionParameters::new(19500.0, 19600.0, 0.5, 0.06, 0.20, OptionType::Call).unwrap();
//! let (pricing, greeks) = price_with_greeks(&params).unwrap();
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//!
//! let iv = implied_volatility(&params.contract(), pricing.price).unwrap();
//! assert!(iv.converged);
//! assert!((iv.implied_vol - 0.20).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
