//! Candidates: perishable listings awaiting a rank.
//!
//! A [`Candidate`] separates raw metrics, supplied by the distance and
//! shelf-life collaborators, from the [`CandidateScores`] derived from them.
//! Changing a raw metric clears every derived score, so a stale score can
//! never outlive the value it was computed from.

use chrono::{DateTime, Utc};
use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::distance::distance_km;

/// A listing that can be filtered, scored, and sorted.
///
/// Pass-through attributes (`name`, `price`, `expires_at`, `location`) are
/// never interpreted by the pipeline except when sorting or filtering on
/// expiration.
///
/// # Examples
/// ```
/// use larder_core::Candidate;
///
/// let candidate = Candidate::new("apples", 2.5, 80.0).with_price(3.2);
/// assert_eq!(candidate.distance_km(), 2.5);
/// assert_eq!(candidate.price, Some(3.2));
/// assert!(candidate.scores().combined().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Caller-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Listing price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Instant after which the goods are no longer sellable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// WGS84 position with `x = longitude` and `y = latitude`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coord<f64>>,
    distance_km: f64,
    freshness_percent: f64,
    #[serde(default, skip_deserializing)]
    scores: CandidateScores,
}

impl Candidate {
    /// Construct a candidate from its identifier and raw metrics.
    ///
    /// Metrics are validated when the candidate enters a filter pass, not
    /// here, so the error names the offending metric and listing.
    #[must_use]
    pub fn new(id: impl Into<String>, distance_km: f64, freshness_percent: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            price: None,
            expires_at: None,
            location: None,
            distance_km,
            freshness_percent,
            scores: CandidateScores::default(),
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Attach an expiration instant.
    #[must_use]
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Place the candidate at `location` and derive its distance from
    /// `buyer` using the haversine formula.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use larder_core::Candidate;
    ///
    /// let buyer = Coord { x: -0.1276, y: 51.5072 };
    /// let candidate = Candidate::new("pears", 0.0, 90.0).located_at(buyer, buyer);
    /// assert_eq!(candidate.distance_km(), 0.0);
    /// ```
    #[must_use]
    pub fn located_at(mut self, location: Coord<f64>, buyer: Coord<f64>) -> Self {
        self.location = Some(location);
        self.set_distance_km(distance_km(buyer, location));
        self
    }

    /// Distance from the buyer in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Remaining shelf life as a percentage of the total.
    #[must_use]
    pub const fn freshness_percent(&self) -> f64 {
        self.freshness_percent
    }

    /// Derived scores, if the candidate has been through the scorer.
    #[must_use]
    pub const fn scores(&self) -> &CandidateScores {
        &self.scores
    }

    /// Replace the distance and discard every derived score.
    pub fn set_distance_km(&mut self, distance_km: f64) {
        self.distance_km = distance_km;
        self.scores = CandidateScores::default();
    }

    /// Replace the freshness percentage and discard every derived score.
    pub fn set_freshness_percent(&mut self, freshness_percent: f64) {
        self.freshness_percent = freshness_percent;
        self.scores = CandidateScores::default();
    }

    /// Record precomputed component scores, clearing any combined score
    /// computed from earlier components.
    ///
    /// Components recorded this way carry no [`ScoreBasis`] and are reused by
    /// every later scoring pass.
    pub fn record_components(&mut self, proximity: f64, freshness: f64) {
        self.scores = CandidateScores {
            proximity: Some(proximity),
            freshness: Some(freshness),
            combined: None,
            basis: None,
        };
    }

    /// Record component scores normalised under `basis`.
    ///
    /// A later pass with a different basis recomputes them from the raw
    /// metrics.
    pub fn record_normalised(&mut self, proximity: f64, freshness: f64, basis: ScoreBasis) {
        self.record_components(proximity, freshness);
        self.scores.basis = Some(basis);
    }

    /// Record the combined score.
    pub fn record_combined(&mut self, combined: f64) {
        self.scores.combined = Some(combined);
    }
}

/// Scores derived from a candidate's raw metrics, each in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    proximity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    freshness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    combined: Option<f64>,
    #[serde(skip)]
    basis: Option<ScoreBasis>,
}

/// Inputs a proximity score depends on besides the raw distance.
///
/// # Examples
/// ```
/// use larder_core::{Candidate, ScoreBasis};
///
/// let mut candidate = Candidate::new("plums", 5.0, 70.0);
/// candidate.record_normalised(95.0, 70.0, ScoreBasis::new(100.0, 2));
/// assert!(candidate.scores().is_current_for(ScoreBasis::new(100.0, 2)));
/// assert!(!candidate.scores().is_current_for(ScoreBasis::new(10.0, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBasis {
    max_radius_km: f64,
    decimals: u8,
}

impl ScoreBasis {
    /// Basis for scores normalised against `max_radius_km` and rounded to
    /// `decimals` places.
    #[must_use]
    pub const fn new(max_radius_km: f64, decimals: u8) -> Self {
        Self {
            max_radius_km,
            decimals,
        }
    }

    /// Radius the proximity score was normalised against.
    #[must_use]
    pub const fn max_radius_km(self) -> f64 {
        self.max_radius_km
    }

    /// Decimal places the components were rounded to.
    #[must_use]
    pub const fn decimals(self) -> u8 {
        self.decimals
    }
}

impl CandidateScores {
    /// Normalised proximity score.
    #[must_use]
    pub const fn proximity(&self) -> Option<f64> {
        self.proximity
    }

    /// Normalised freshness score.
    #[must_use]
    pub const fn freshness(&self) -> Option<f64> {
        self.freshness
    }

    /// Weighted blend of the component scores.
    #[must_use]
    pub const fn combined(&self) -> Option<f64> {
        self.combined
    }

    /// Report whether both component scores are present.
    #[must_use]
    pub const fn has_components(&self) -> bool {
        self.proximity.is_some() && self.freshness.is_some()
    }

    /// Basis the components were normalised under, when the scorer
    /// produced them.
    #[must_use]
    pub const fn basis(&self) -> Option<ScoreBasis> {
        self.basis
    }

    /// Report whether the components can be reused for a pass under
    /// `basis`. Precomputed components without a recorded basis always can.
    #[must_use]
    pub fn is_current_for(&self, basis: ScoreBasis) -> bool {
        self.has_components() && self.basis.is_none_or(|recorded| recorded == basis)
    }
}
