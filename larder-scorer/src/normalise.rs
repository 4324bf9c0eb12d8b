//! Normalisation of raw metrics onto the shared `0..=100` score scale.
//!
//! Proximity decays linearly with distance: a score of 50 means "halfway to
//! the radius". Anything at or beyond the radius scores exactly zero, so the
//! radius acts as a hard boundary even when normalisation runs on its own.
//!
//! Freshness is already a percentage and currently passes through unchanged.
//! It still goes through [`normalise_freshness`] so a non-linear curve can be
//! introduced in one place.

use larder_core::RankingError;
use larder_core::bounds::{PERCENT_MAX, ensure_non_negative, ensure_percent, ensure_positive};

/// Number of decimal places kept on normalised scores.
///
/// Rounding is half away from zero.
///
/// # Examples
/// ```
/// use larder_scorer::Precision;
///
/// assert_eq!(Precision::default().decimals(), 2);
/// assert_eq!(Precision::default().round(12.3456), 12.35);
/// assert_eq!(Precision::new(0).map(|p| p.round(-2.5)), Ok(-3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(u8);

impl Precision {
    /// Precision applied when callers do not choose one.
    pub const DEFAULT: Self = Self(2);
    /// Largest supported number of decimal places.
    pub const MAX_DECIMALS: u8 = 12;

    /// Validate and construct a [`Precision`].
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidArgument`] when `decimals` exceeds
    /// [`Precision::MAX_DECIMALS`].
    pub fn new(decimals: u8) -> Result<Self, RankingError> {
        if decimals > Self::MAX_DECIMALS {
            return Err(RankingError::invalid(
                "decimals",
                decimals,
                "must be at most 12",
            ));
        }
        Ok(Self(decimals))
    }

    /// Number of decimal places kept.
    #[must_use]
    pub const fn decimals(self) -> u8 {
        self.0
    }

    /// Round `value` half away from zero to this precision.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "decimal rounding scales, rounds, and rescales"
    )]
    pub fn round(self, value: f64) -> f64 {
        let factor = 10.0_f64.powi(i32::from(self.0));
        (value * factor).round() / factor
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Convert a distance into a proximity score.
///
/// The score is `100 * (1 - distance_km / max_radius_km)`, floored at zero
/// for any distance at or beyond the radius.
///
/// # Errors
/// Returns [`RankingError::InvalidArgument`] when `distance_km` is negative
/// or not finite, or when `max_radius_km` is not strictly positive.
///
/// # Examples
/// ```
/// use larder_scorer::{Precision, normalise_proximity};
///
/// # fn main() -> Result<(), larder_core::RankingError> {
/// assert_eq!(normalise_proximity(0.0, 50.0, Precision::default())?, 100.0);
/// assert_eq!(normalise_proximity(25.0, 50.0, Precision::default())?, 50.0);
/// assert_eq!(normalise_proximity(80.0, 50.0, Precision::default())?, 0.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "proximity decays linearly across the radius"
)]
pub fn normalise_proximity(
    distance_km: f64,
    max_radius_km: f64,
    precision: Precision,
) -> Result<f64, RankingError> {
    let distance = ensure_non_negative("distance_km", distance_km)?;
    let radius = ensure_positive("max_radius_km", max_radius_km)?;
    if distance >= radius {
        return Ok(0.0);
    }
    Ok(precision.round(PERCENT_MAX * (1.0 - distance / radius)))
}

/// Convert a freshness percentage into a freshness score.
///
/// # Errors
/// Returns [`RankingError::InvalidArgument`] when `freshness_percent` lies
/// outside `0..=100`.
///
/// # Examples
/// ```
/// use larder_scorer::{Precision, normalise_freshness};
///
/// assert_eq!(normalise_freshness(72.5, Precision::default()), Ok(72.5));
/// assert!(normalise_freshness(101.0, Precision::default()).is_err());
/// ```
pub fn normalise_freshness(
    freshness_percent: f64,
    precision: Precision,
) -> Result<f64, RankingError> {
    let percent = ensure_percent("freshness_percent", freshness_percent)?;
    Ok(precision.round(percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0)]
    #[case(50.0)]
    #[case(0.25)]
    fn proximity_boundaries_are_exact(#[case] radius: f64) {
        let precision = Precision::default();
        assert_eq!(normalise_proximity(0.0, radius, precision), Ok(100.0));
        assert_eq!(normalise_proximity(radius, radius, precision), Ok(0.0));
        assert_eq!(normalise_proximity(radius * 3.0, radius, precision), Ok(0.0));
    }

    #[rstest]
    #[case(10.0, 30.0, 66.67)]
    #[case(20.0, 30.0, 33.33)]
    #[case(1.0, 8.0, 87.5)]
    fn proximity_rounds_to_two_decimals(
        #[case] distance: f64,
        #[case] radius: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(
            normalise_proximity(distance, radius, Precision::default()),
            Ok(expected)
        );
    }

    #[rstest]
    fn proximity_honours_custom_precision() {
        let precision = Precision::new(0).expect("valid precision");
        assert_eq!(normalise_proximity(10.0, 30.0, precision), Ok(67.0));
    }

    #[rstest]
    #[case(-0.5, 10.0, "distance_km")]
    #[case(f64::NAN, 10.0, "distance_km")]
    #[case(1.0, 0.0, "max_radius_km")]
    #[case(1.0, -3.0, "max_radius_km")]
    fn proximity_rejects_invalid_arguments(
        #[case] distance: f64,
        #[case] radius: f64,
        #[case] expected: &str,
    ) {
        let err = normalise_proximity(distance, radius, Precision::default())
            .expect_err("invalid argument");
        match err {
            RankingError::InvalidArgument { argument, .. } => assert_eq!(argument, expected),
            other => panic!("expected InvalidArgument, found {other:?}"),
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(33.33)]
    #[case(100.0)]
    fn freshness_is_identity(#[case] percent: f64) {
        assert_eq!(normalise_freshness(percent, Precision::default()), Ok(percent));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(100.01)]
    fn freshness_rejects_out_of_range(#[case] percent: f64) {
        assert!(normalise_freshness(percent, Precision::default()).is_err());
    }

    #[rstest]
    fn precision_is_capped() {
        assert!(Precision::new(Precision::MAX_DECIMALS).is_ok());
        assert!(Precision::new(13).is_err());
    }

    #[rstest]
    #[case(0.125, 0.13)]
    #[case(-0.125, -0.13)]
    #[case(7.5, 7.5)]
    fn rounding_is_half_away_from_zero(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(Precision::default().round(value), expected);
    }
}
