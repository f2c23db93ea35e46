//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using derivatives,
//!   with an optional lower bound on iterates and a guarded derivative
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Outcomes
//!
//! [`NewtonRaphsonSolver::solve`] always returns a [`RootResult`] holding the
//! last iterate, the iteration count and, on failure, the [`SolverError`]
//! that stopped it. [`NewtonRaphsonSolver::find_root`] is the strict variant.
//!
//! [`SolverError`]: crate::types::SolverError
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let config = SolverConfig::default();
//! let solver = NewtonRaphsonSolver::new(config);
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let result = solver.solve(f, f_prime, 1.0);
//! assert!(result.converged);
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

pub use config::SolverConfig;
pub use newton_raphson::{NewtonRaphsonSolver, RootResult};
