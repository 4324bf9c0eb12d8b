//! Core domain types for the Larder ranking engine.
//!
//! Larder ranks perishable listings for a buyer by blending proximity with
//! remaining shelf life. This crate holds the vocabulary every stage shares:
//!
//! - [`Candidate`] and its derived [`CandidateScores`].
//! - Per-request configuration: [`FilterConstraints`], [`WeightPair`],
//!   [`WeightPreset`], and [`WeightMode`].
//! - Output: [`RankingResult`] with its [`FilterStats`].
//! - The [`RankingError`] taxonomy.
//! - The raw-metric collaborators: [`distance_km`] for geography and
//!   [`ShelfLife`], [`freshness_percent`], and [`is_expired`] for shelf life.
//!
//! The scoring pipeline itself lives in `larder-scorer`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bounds;
mod candidate;
mod constraints;
mod distance;
mod error;
mod result;
mod shelf_life;
mod sorting;
mod weights;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{Candidate, CandidateScores, ScoreBasis};
pub use constraints::FilterConstraints;
pub use distance::distance_km;
pub use error::{ConfigurationError, RankingError};
pub use result::{FilterStats, RankingMode, RankingResult};
pub use shelf_life::{ShelfLife, ShelfLifeError, freshness_percent, is_expired};
pub use sorting::{SortField, SortOrder};
pub use weights::{WEIGHT_SUM_TOLERANCE, WeightMode, WeightPair, WeightPreset};
