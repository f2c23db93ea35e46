//! # pricer_core: Foundation for the BSM Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option type enumeration: `OptionType` (`types::option_type`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//! - Time-to-expiry helpers on calendar dates (`types::time`)
//! - Root-finding: `NewtonRaphsonSolver`, `SolverConfig` (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//! use pricer_core::types::{time_to_expiry, OptionType};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
//! let t = time_to_expiry(today, expiry);
//! assert!((t - 182.0 / 365.0).abs() < 1e-12);
//!
//! let kind: OptionType = "put".parse().unwrap();
//! assert!(kind.is_put());
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0).unwrap();
//! # assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`, `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
