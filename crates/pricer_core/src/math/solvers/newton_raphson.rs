//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a Newton-Raphson run.
///
/// `root` is always the last iterate the solver evaluated, so a caller can
/// still use it as a best-effort estimate when `converged` is `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult<T> {
    /// Last iterate (the root when `converged` is `true`).
    pub root: T,
    /// Number of function evaluations performed.
    pub iterations: usize,
    /// Whether `|f(root)| < tolerance` was reached.
    pub converged: bool,
    /// Reason for stopping early; `None` when converged.
    pub failure: Option<SolverError>,
}

impl<T: Float> RootResult<T> {
    /// Converts into a strict `Result`, mapping non-convergence to its error.
    pub fn into_result(self) -> Result<T, SolverError> {
        if self.converged {
            Ok(self.root)
        } else {
            Err(self.failure.unwrap_or(SolverError::MaxIterationsExceeded {
                iterations: self.iterations,
            }))
        }
    }
}

/// Newton-Raphson root finder with bounded iterates.
///
/// Uses Newton's method: `x_{n+1} = max(x_n - f(x_n) / f'(x_n), lower_bound)`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root. It stops early,
/// without producing NaN or infinite iterates, when:
/// - The derivative magnitude drops below `min_derivative`
/// - The function value or the Newton step is non-finite
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 on the positive half-line
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default()).with_lower_bound(1e-6);
///
/// let result = solver.solve(|x: f64| x * x - 2.0, |x| 2.0 * x, 10.0);
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
    /// Iterates are clamped to be at least this value
    lower_bound: Option<T>,
    /// Derivatives with smaller magnitude stop the iteration
    min_derivative: T,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    ///
    /// The solver is unbounded and treats `|f'(x)| < 1e-30` as degenerate.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            lower_bound: None,
            min_derivative: T::from(1e-30).unwrap(),
        }
    }

    /// Clamp every iterate (including the initial guess) to `bound` or above.
    pub fn with_lower_bound(mut self, bound: T) -> Self {
        self.lower_bound = Some(bound);
        self
    }

    /// Set the smallest derivative magnitude accepted for a Newton step.
    pub fn with_min_derivative(mut self, min_derivative: T) -> Self {
        self.min_derivative = min_derivative.abs();
        self
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Returns the lower bound applied to iterates, if any.
    pub fn lower_bound(&self) -> Option<T> {
        self.lower_bound
    }

    #[inline]
    fn clamp(&self, x: T) -> T {
        match self.lower_bound {
            Some(bound) if x < bound => bound,
            _ => x,
        }
    }

    /// Run Newton's iteration from `x0` and report how it ended.
    ///
    /// Never panics; on failure the last finite iterate is returned together
    /// with the [`SolverError`] describing the stop.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    /// use pricer_core::types::SolverError;
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    /// let result = solver.solve(|x: f64| x * x + 1.0, |_| 0.0, 0.5);
    /// assert!(!result.converged);
    /// assert!(matches!(result.failure, Some(SolverError::DerivativeNearZero { .. })));
    /// ```
    pub fn solve<F, G>(&self, f: F, f_prime: G, x0: T) -> RootResult<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = self.clamp(x0);

        for iteration in 1..=self.config.max_iterations {
            let f_val = f(x);

            if !f_val.is_finite() {
                return Self::stopped(
                    x,
                    iteration,
                    SolverError::NumericalInstability(
                        "function value is not finite".to_string(),
                    ),
                );
            }

            // Check for convergence
            if f_val.abs() < self.config.tolerance {
                return RootResult {
                    root: x,
                    iterations: iteration,
                    converged: true,
                    failure: None,
                };
            }

            let f_prime_val = f_prime(x);

            if f_prime_val.is_nan() || f_prime_val.abs() < self.min_derivative {
                return Self::stopped(
                    x,
                    iteration,
                    SolverError::DerivativeNearZero {
                        x: x.to_f64().unwrap_or(f64::NAN),
                    },
                );
            }

            let next = x - f_val / f_prime_val;
            if !next.is_finite() {
                return Self::stopped(
                    x,
                    iteration,
                    SolverError::NumericalInstability(
                        "Newton iteration produced non-finite value".to_string(),
                    ),
                );
            }

            x = self.clamp(next);
        }

        Self::stopped(
            x,
            self.config.max_iterations,
            SolverError::MaxIterationsExceeded {
                iterations: self.config.max_iterations,
            },
        )
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Non-finite value or step
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!((f(root)).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.solve(f, f_prime, x0).into_result()
    }

    fn stopped(root: T, iterations: usize, failure: SolverError) -> RootResult<T> {
        RootResult {
            root,
            iterations,
            converged: false,
            failure: Some(failure),
        }
    }
}
