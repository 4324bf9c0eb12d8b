//! Per-request weighting between proximity and freshness.
//!
//! Weights are percentages. In [`WeightMode::Strict`] they must total
//! exactly 100, which keeps the combined score on the same `0..=100` scale
//! as its inputs. [`WeightMode::Relaxed`] permits other totals for
//! exploratory weighting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bounds::{PERCENT_MAX, ensure_percent};
use crate::{ConfigurationError, RankingError};

/// Absolute tolerance applied when checking the strict weight total.
///
/// Weights such as `33.3 + 66.7` do not sum to exactly `100.0` in binary
/// floating point.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// How strictly the weight total is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightMode {
    /// Weights must sum to 100.
    #[default]
    Strict,
    /// Any total is accepted provided each weight is within `0..=100`.
    Relaxed,
}

/// Relative importance of proximity and freshness.
///
/// # Examples
/// ```
/// use larder_core::{WeightMode, WeightPair};
///
/// let weights = WeightPair::new(70.0, 30.0);
/// assert!(weights.validate(WeightMode::Strict).is_ok());
/// assert!(WeightPair::new(60.0, 50.0).validate(WeightMode::Strict).is_err());
/// assert!(WeightPair::new(60.0, 50.0).validate(WeightMode::Relaxed).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    /// Weight applied to the proximity score.
    pub proximity: f64,
    /// Weight applied to the freshness score.
    pub freshness: f64,
}

impl WeightPair {
    /// Construct a weight pair without validating it.
    #[must_use]
    pub const fn new(proximity: f64, freshness: f64) -> Self {
        Self {
            proximity,
            freshness,
        }
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidArgument`] when either weight lies
    /// outside `0..=100`, and [`ConfigurationError::WeightSum`] when `mode`
    /// is strict and the total differs from 100.
    pub fn validate(self, mode: WeightMode) -> Result<Self, RankingError> {
        ensure_percent("proximity_weight", self.proximity)?;
        ensure_percent("freshness_weight", self.freshness)?;
        if mode == WeightMode::Strict && !self.sums_to_hundred() {
            return Err(ConfigurationError::WeightSum {
                proximity: self.proximity,
                freshness: self.freshness,
            }
            .into());
        }
        Ok(self)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "strict validation compares the weight total with 100"
    )]
    fn sums_to_hundred(self) -> bool {
        ((self.proximity + self.freshness) - PERCENT_MAX).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

impl Default for WeightPair {
    fn default() -> Self {
        WeightPreset::Balanced.weights()
    }
}

impl From<WeightPreset> for WeightPair {
    fn from(preset: WeightPreset) -> Self {
        preset.weights()
    }
}

/// Named weightings offered to buyers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPreset {
    /// Proximity and freshness count equally.
    #[default]
    Balanced,
    /// Favour listings close to the buyer.
    Nearby,
    /// Favour listings with the most shelf life left.
    Fresh,
}

impl WeightPreset {
    /// Every preset, in display order.
    pub const ALL: [Self; 3] = [Self::Balanced, Self::Nearby, Self::Fresh];

    /// Return the weights the preset stands for.
    #[must_use]
    pub const fn weights(self) -> WeightPair {
        match self {
            Self::Balanced => WeightPair::new(50.0, 50.0),
            Self::Nearby => WeightPair::new(70.0, 30.0),
            Self::Fresh => WeightPair::new(30.0, 70.0),
        }
    }

    /// Return the preset name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Nearby => "nearby",
            Self::Fresh => "fresh",
        }
    }
}

impl fmt::Display for WeightPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightPreset {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == name)
            .ok_or_else(|| {
                RankingError::invalid("weight_preset", s, "must be one of balanced, nearby, fresh")
            })
    }
}
