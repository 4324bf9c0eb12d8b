//! Shelf-life arithmetic feeding the freshness metric.
//!
//! Freshness is the share of the total shelf life still remaining. An item is
//! expired once the evaluation instant reaches its expiration instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while deriving shelf-life figures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfLifeError {
    /// A shelf life must span at least one day.
    #[error("total shelf life must be at least one day")]
    ZeroTotalDays,
    /// The expiration instant precedes the production instant.
    #[error("expiration {expires_at} precedes production {produced_at}")]
    ExpiresBeforeProduced {
        /// When the goods were produced or packed.
        produced_at: DateTime<Utc>,
        /// When the goods expire.
        expires_at: DateTime<Utc>,
    },
}

/// Total and consumed shelf life in whole days.
///
/// # Examples
/// ```
/// use larder_core::ShelfLife;
///
/// # fn main() -> Result<(), larder_core::ShelfLifeError> {
/// let shelf = ShelfLife::new(10, 4)?;
/// assert_eq!(shelf.remaining_days(), 6);
/// assert_eq!(shelf.freshness_percent(), 60.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLife {
    total_days: u32,
    used_days: u32,
}

impl ShelfLife {
    /// Validate and construct a [`ShelfLife`].
    ///
    /// # Errors
    /// Returns [`ShelfLifeError::ZeroTotalDays`] when `total_days` is zero.
    pub const fn new(total_days: u32, used_days: u32) -> Result<Self, ShelfLifeError> {
        if total_days == 0 {
            return Err(ShelfLifeError::ZeroTotalDays);
        }
        Ok(Self {
            total_days,
            used_days,
        })
    }

    /// Derive a shelf life from production and expiration instants as seen
    /// at `now`.
    ///
    /// Partial days are truncated. A `now` before `produced_at` counts as no
    /// days used.
    ///
    /// # Errors
    /// Returns [`ShelfLifeError::ExpiresBeforeProduced`] when the dates are
    /// inverted and [`ShelfLifeError::ZeroTotalDays`] when they fall within
    /// the same day.
    pub fn between(
        produced_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, ShelfLifeError> {
        if expires_at < produced_at {
            return Err(ShelfLifeError::ExpiresBeforeProduced {
                produced_at,
                expires_at,
            });
        }
        let total_days = whole_days(expires_at - produced_at);
        let used_days = whole_days(now - produced_at);
        Self::new(total_days, used_days)
    }

    /// Total shelf life in days.
    #[must_use]
    pub const fn total_days(self) -> u32 {
        self.total_days
    }

    /// Days already consumed.
    #[must_use]
    pub const fn used_days(self) -> u32 {
        self.used_days
    }

    /// Days left before the shelf life is exhausted.
    #[must_use]
    pub const fn remaining_days(self) -> u32 {
        self.total_days.saturating_sub(self.used_days)
    }

    /// Remaining shelf life as a percentage in `0.0..=100.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "freshness is a ratio of remaining to total days"
    )]
    pub fn freshness_percent(self) -> f64 {
        let remaining = f64::from(self.remaining_days());
        let total = f64::from(self.total_days);
        (remaining / total * 100.0).clamp(0.0, 100.0)
    }
}

/// Compute the freshness percentage for a shelf life of `total_days` with
/// `used_days` consumed.
///
/// # Errors
/// Returns [`ShelfLifeError::ZeroTotalDays`] when `total_days` is zero.
///
/// # Examples
/// ```
/// use larder_core::freshness_percent;
///
/// assert_eq!(freshness_percent(4, 1), Ok(75.0));
/// assert_eq!(freshness_percent(4, 9), Ok(0.0));
/// ```
pub fn freshness_percent(total_days: u32, used_days: u32) -> Result<f64, ShelfLifeError> {
    ShelfLife::new(total_days, used_days).map(ShelfLife::freshness_percent)
}

/// Report whether goods expiring at `expires_at` are expired at `now`.
///
/// The expiration instant itself counts as expired.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use larder_core::is_expired;
///
/// let expiry = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
/// assert!(is_expired(expiry, expiry));
/// assert!(!is_expired(expiry, Utc.with_ymd_and_hms(2024, 4, 30, 23, 0, 0).unwrap()));
/// ```
#[must_use]
pub fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expires_at <= now
}

fn whole_days(span: chrono::TimeDelta) -> u32 {
    u32::try_from(span.num_days().max(0)).unwrap_or(u32::MAX)
}
