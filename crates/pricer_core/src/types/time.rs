//! Time-to-expiry conversions on calendar dates.
//!
//! Option formulas take time to expiry as a year fraction. Contracts are
//! quoted with a calendar expiry date, so callers convert with ACT/365 and
//! clamp to [`MIN_TIME_TO_EXPIRY`] before handing the value to a pricer,
//! which rejects non-positive expiries rather than correcting them.

use chrono::NaiveDate;

/// Days per year under the ACT/365 convention.
const DAYS_PER_YEAR: f64 = 365.0;

/// Smallest time to expiry (in years) produced by [`time_to_expiry`].
///
/// Expiry on or before the valuation date maps to this value instead of
/// zero so that the σ√T terms stay away from division by zero.
pub const MIN_TIME_TO_EXPIRY: f64 = 1e-4;

/// Year fraction between two dates (ACT/365).
///
/// Negative if `expiry` precedes `valuation`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::year_fraction;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert!((year_fraction(start, end) - 366.0 / 365.0).abs() < 1e-12);
/// assert!(year_fraction(end, start) < 0.0);
/// ```
pub fn year_fraction(valuation: NaiveDate, expiry: NaiveDate) -> f64 {
    let days = (expiry - valuation).num_days();
    days as f64 / DAYS_PER_YEAR
}

/// Time to expiry in years, clamped below at [`MIN_TIME_TO_EXPIRY`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::{time_to_expiry, MIN_TIME_TO_EXPIRY};
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(time_to_expiry(today, today), MIN_TIME_TO_EXPIRY);
/// ```
pub fn time_to_expiry(valuation: NaiveDate, expiry: NaiveDate) -> f64 {
    year_fraction(valuation, expiry).max(MIN_TIME_TO_EXPIRY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_fraction_known_dates() {
        // 2024-01-01 to 2024-07-01 is 182 days
        let result = year_fraction(date(2024, 1, 1), date(2024, 7, 1));
        assert_relative_eq!(result, 182.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_fraction_negative_when_expired() {
        let result = year_fraction(date(2024, 7, 1), date(2024, 1, 1));
        assert_relative_eq!(result, -182.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_to_expiry_passthrough() {
        let t = time_to_expiry(date(2024, 1, 1), date(2024, 1, 31));
        assert_relative_eq!(t, 30.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_to_expiry_same_day_clamped() {
        let t = time_to_expiry(date(2024, 1, 1), date(2024, 1, 1));
        assert_eq!(t, MIN_TIME_TO_EXPIRY);
    }

    #[test]
    fn test_time_to_expiry_expired_clamped() {
        let t = time_to_expiry(date(2024, 6, 1), date(2024, 1, 1));
        assert_eq!(t, MIN_TIME_TO_EXPIRY);
    }

    proptest! {
        #[test]
        fn prop_time_to_expiry_is_positive(offset in -5000i64..5000) {
            let valuation = date(2024, 1, 1);
            let expiry = valuation + chrono::Duration::days(offset);
            let t = time_to_expiry(valuation, expiry);
            prop_assert!(t >= MIN_TIME_TO_EXPIRY);
            if offset > 0 {
                prop_assert!((t - offset as f64 / 365.0).abs() < 1e-12);
            }
        }
    }
}
