//! Numerical building blocks.
//!
//! - `solvers`: Newton-Raphson root finding with bounded iterates

pub mod solvers;
