//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are generic over `T: Float`. The CDF uses Hart's double-precision
//! rational approximation (Hart 1968, algorithm 5666, in the form published
//! by G. West, "Better approximations to cumulative normal functions", 2005),
//! accurate to about 1e-15 in absolute terms.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2π)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this |x| the tail mass is below the smallest normal `f64`.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational approximation and the continued fraction.
const CONTINUED_FRACTION_FROM: f64 = 7.071_067_811_865_47;

const NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

const DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap()
}

#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + constant(c))
}

/// Lower-tail mass Φ(-|x|).
#[inline]
fn lower_tail<T: Float>(abs_x: T) -> T {
    if abs_x > constant(TAIL_CUTOFF) {
        return T::zero();
    }

    let gaussian = (-abs_x * abs_x / constant(2.0)).exp();

    if abs_x < constant(CONTINUED_FRACTION_FROM) {
        gaussian * horner(&NUMERATOR, abs_x) / horner(&DENOMINATOR, abs_x)
    } else {
        let mut fraction = abs_x + constant(0.65);
        for k in [4.0, 3.0, 2.0, 1.0] {
            fraction = abs_x + constant::<T>(k) / fraction;
        }
        gaussian / fraction / constant(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1). The upper half is evaluated as
/// `1 - Φ(-x)`, so `Φ(x) + Φ(-x) = 1` holds to rounding.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96_f64) - 0.9750021048517795).abs() < 1e-14);
/// assert_eq!(norm_cdf(-40.0_f64), 0.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) · exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π)
/// assert!((norm_pdf(1.0_f64) - 0.2419707245191434).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (-x * x / constant(2.0)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-8.0_f64), 6.22096057427178e-16, epsilon = 1e-22);
    }

    #[test]
    fn test_norm_cdf_continued_fraction_branch() {
        // Φ(-10) ≈ 7.6198530241605e-24
        let value = norm_cdf(-10.0_f64);
        assert_relative_eq!(value, 7.619853024160527e-24, max_relative = 1e-8);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-6.0, -3.0, -1.5, -0.25, 0.0, 0.25, 1.5, 3.0, 6.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert_eq!(norm_cdf(-38.0_f64), 0.0);
        assert_eq!(norm_cdf(38.0_f64), 1.0);
        assert!(norm_cdf(-30.0_f64) > 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-80..=80).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-6);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(-3.0_f64), 0.004431848411938008, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_underflows_to_zero() {
        assert_eq!(norm_pdf(40.0_f64), 0.0);
        assert_eq!(norm_pdf(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-8);
        }
    }
}
