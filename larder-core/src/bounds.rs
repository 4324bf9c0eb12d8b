//! Range checks shared by every stage that consumes a raw number.

use crate::RankingError;

/// Inclusive lower bound of every percentage-like value.
pub const PERCENT_MIN: f64 = 0.0;
/// Inclusive upper bound of every percentage-like value.
pub const PERCENT_MAX: f64 = 100.0;

const PERCENT_CONSTRAINT: &str = "must be a finite value within 0..=100";

/// Return `value` when it is a finite percentage in `0.0..=100.0`.
///
/// # Errors
/// Returns [`RankingError::InvalidArgument`] naming `argument` otherwise.
///
/// # Examples
/// ```
/// use larder_core::bounds::ensure_percent;
///
/// assert_eq!(ensure_percent("freshness_percent", 42.0), Ok(42.0));
/// assert!(ensure_percent("freshness_percent", 100.5).is_err());
/// ```
pub fn ensure_percent(argument: &'static str, value: f64) -> Result<f64, RankingError> {
    if value.is_finite() && (PERCENT_MIN..=PERCENT_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(RankingError::invalid(argument, value, PERCENT_CONSTRAINT))
    }
}

/// Return `value` when it is finite and not negative.
///
/// # Errors
/// Returns [`RankingError::InvalidArgument`] naming `argument` otherwise.
pub fn ensure_non_negative(argument: &'static str, value: f64) -> Result<f64, RankingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RankingError::invalid(
            argument,
            value,
            "must be a finite value >= 0",
        ))
    }
}

/// Return `value` when it is finite and strictly positive.
///
/// # Errors
/// Returns [`RankingError::InvalidArgument`] naming `argument` otherwise.
pub fn ensure_positive(argument: &'static str, value: f64) -> Result<f64, RankingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RankingError::invalid(
            argument,
            value,
            "must be a finite value > 0",
        ))
    }
}
