//! Error taxonomy shared by every ranking stage.
//!
//! Failures are reported synchronously at the point of detection. Nothing in
//! the pipeline retries or substitutes a default value.

use thiserror::Error;

/// Errors raised while normalising, combining, filtering, or sorting
/// candidates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// A single value violated a domain constraint.
    #[error("invalid {argument} {value}: {constraint}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Rendered offending value.
        value: String,
        /// Constraint the value failed to satisfy.
        constraint: &'static str,
    },
    /// A candidate lacks a field the requested operation depends on.
    #[error("candidate {candidate} is missing {field}")]
    MissingField {
        /// Identifier of the affected candidate.
        candidate: String,
        /// Name of the absent field.
        field: &'static str,
    },
    /// Request-level configuration is internally inconsistent.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl RankingError {
    /// Build an [`RankingError::InvalidArgument`] from any displayable value.
    ///
    /// # Examples
    /// ```
    /// use larder_core::RankingError;
    ///
    /// let err = RankingError::invalid("distance_km", -1.0, "must be >= 0");
    /// assert_eq!(err.to_string(), "invalid distance_km -1: must be >= 0");
    /// ```
    #[must_use]
    pub fn invalid(
        argument: &'static str,
        value: impl std::fmt::Display,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidArgument {
            argument,
            value: value.to_string(),
            constraint,
        }
    }

    /// Build a [`RankingError::MissingField`] for a candidate.
    #[must_use]
    pub fn missing(candidate: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            candidate: candidate.into(),
            field,
        }
    }
}

/// Inconsistent per-request configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Strict weighting requires the two weights to total exactly 100.
    #[error("weights must sum to 100 in strict mode, got {proximity} + {freshness}")]
    WeightSum {
        /// Weight applied to the proximity score.
        proximity: f64,
        /// Weight applied to the freshness score.
        freshness: f64,
    },
    /// Ranking mode was requested without a radius to normalise proximity.
    #[error("ranking requires a maximum radius to normalise proximity")]
    MissingRadius,
}
