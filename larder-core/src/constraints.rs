//! Hard constraints applied before any scoring.
//!
//! Every stage is configured explicitly: a numeric bound of `None` disables
//! that check and `exclude_expired` must be chosen by the caller. The
//! evaluation instant is carried on the constraints rather than read from the
//! clock, so a filter pass is a pure function of its inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RankingError;
use crate::bounds::{ensure_percent, ensure_positive};

/// Constraints a candidate must satisfy to be ranked at all.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use larder_core::FilterConstraints;
///
/// let constraints = FilterConstraints {
///     max_radius_km: Some(25.0),
///     min_freshness_percent: None,
///     exclude_expired: true,
///     now: Utc::now(),
/// };
/// assert!(constraints.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConstraints {
    /// Furthest distance accepted, inclusive. `None` disables the check.
    pub max_radius_km: Option<f64>,
    /// Lowest freshness accepted, inclusive. `None` disables the check.
    pub min_freshness_percent: Option<f64>,
    /// Whether expired candidates are removed.
    pub exclude_expired: bool,
    /// Instant against which expiration is judged.
    pub now: DateTime<Utc>,
}

impl FilterConstraints {
    /// Constraints with every stage disabled, evaluated at `now`.
    ///
    /// Filtering with these constraints is an identity pass-through.
    #[must_use]
    pub const fn unconstrained(now: DateTime<Utc>) -> Self {
        Self {
            max_radius_km: None,
            min_freshness_percent: None,
            exclude_expired: false,
            now,
        }
    }

    /// Set the maximum radius while returning `self` for chaining.
    #[must_use]
    pub const fn with_max_radius_km(mut self, max_radius_km: f64) -> Self {
        self.max_radius_km = Some(max_radius_km);
        self
    }

    /// Set the freshness floor while returning `self` for chaining.
    #[must_use]
    pub const fn with_min_freshness_percent(mut self, min_freshness_percent: f64) -> Self {
        self.min_freshness_percent = Some(min_freshness_percent);
        self
    }

    /// Choose whether expired candidates are removed.
    #[must_use]
    pub const fn excluding_expired(mut self, exclude_expired: bool) -> Self {
        self.exclude_expired = exclude_expired;
        self
    }

    /// Validate the enabled bounds and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidArgument`] when the radius is not a
    /// positive finite number or the freshness floor lies outside `0..=100`.
    pub fn validate(self) -> Result<Self, RankingError> {
        if let Some(radius) = self.max_radius_km {
            ensure_positive("max_radius_km", radius)?;
        }
        if let Some(floor) = self.min_freshness_percent {
            ensure_percent("min_freshness_percent", floor)?;
        }
        Ok(self)
    }
}
