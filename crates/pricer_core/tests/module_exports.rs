//! Integration tests for module exports.
//!
//! Verify that all public modules and types are exported and accessible
//! via absolute paths.

use chrono::NaiveDate;

/// Test that the solver module is accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use pricer_core::math::solvers::NewtonRaphsonSolver;
    use pricer_core::math::solvers::RootResult;
    use pricer_core::math::solvers::SolverConfig;

    let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50)).with_lower_bound(0.0);
    let result: RootResult<f64> = solver.solve(|x| x * x - 4.0, |x| 2.0 * x, 1.0);
    assert!(result.converged);
    assert!((result.root - 2.0).abs() < 1e-10);
}

/// Test that types are accessible via both module and re-export paths.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{PricingError, SolverError};
    use pricer_core::types::option_type::OptionType;
    use pricer_core::types::time::{time_to_expiry, year_fraction, MIN_TIME_TO_EXPIRY};

    let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let expiry = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(year_fraction(valuation, expiry), 0.0);
    assert_eq!(time_to_expiry(valuation, expiry), MIN_TIME_TO_EXPIRY);

    assert!(OptionType::Call.is_call());

    let err: PricingError = SolverError::MaxIterationsExceeded { iterations: 100 }.into();
    assert!(err.to_string().contains("100 iterations"));
}

#[test]
fn test_types_reexports() {
    use pricer_core::types::{
        time_to_expiry, year_fraction, OptionType, PricingError, SolverError, MIN_TIME_TO_EXPIRY,
    };

    let _ = OptionType::Put;
    let _ = PricingError::InvalidInput("x".to_string());
    let _ = SolverError::NumericalInstability("x".to_string());
    let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let expiry = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert!(time_to_expiry(valuation, expiry) > MIN_TIME_TO_EXPIRY);
    assert!(year_fraction(valuation, expiry) > 0.99);
}
