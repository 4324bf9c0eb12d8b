//! Facade crate for the Larder ranking engine.
//!
//! This crate re-exports the domain types from `larder-core` and the
//! pipeline stages from `larder-scorer`, so callers can depend on a single
//! crate. Enable the `test-support` feature for deterministic fixtures.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use larder_engine::{Candidate, FilterConstraints, SortField, WeightPreset, filter_and_sort, rank};
//!
//! # fn main() -> Result<(), larder_engine::RankingError> {
//! let shelf = [
//!     Candidate::new("yoghurt", 4.0, 30.0).with_price(1.1),
//!     Candidate::new("cheese", 1.0, 90.0).with_price(3.4),
//! ];
//! let constraints = FilterConstraints::unconstrained(Utc::now()).with_max_radius_km(5.0);
//!
//! let ranked = rank(&shelf, &constraints, WeightPreset::Fresh.weights())?;
//! assert_eq!(ranked.ids(), vec!["cheese", "yoghurt"]);
//!
//! let cheapest = filter_and_sort(&shelf, &constraints, SortField::Price, None)?;
//! assert_eq!(cheapest.ids(), vec!["yoghurt", "cheese"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use larder_core::{
    Candidate, CandidateScores, ConfigurationError, FilterConstraints, FilterStats, RankingError,
    RankingMode, RankingResult, ScoreBasis, ShelfLife, ShelfLifeError, SortField, SortOrder,
    WeightMode, WeightPair, WeightPreset, distance_km, freshness_percent, is_expired,
};

pub use larder_scorer::{
    FilterOutcome, Precision, Ranker, apply_filters, combine, combine_batch, filter_and_sort,
    normalise_freshness, normalise_proximity, rank, sort_by_field,
};

#[cfg(feature = "test-support")]
pub use larder_core::test_support;
