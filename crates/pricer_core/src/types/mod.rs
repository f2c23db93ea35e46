//! Core option, time, and error types.
//!
//! This module provides:
//! - `option_type`: Call/Put enumeration shared by every pricing routine
//! - `time`: ACT/365 year fractions and the clamped time-to-expiry used by callers
//! - `error`: Structured error types for pricing and solver operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`year_fraction`], [`time_to_expiry`], [`MIN_TIME_TO_EXPIRY`] from `time`
//! - [`PricingError`], [`SolverError`] from `error`

pub mod error;
pub mod option_type;
pub mod time;

pub use error::{PricingError, SolverError};
pub use option_type::OptionType;
pub use time::{time_to_expiry, year_fraction, MIN_TIME_TO_EXPIRY};
