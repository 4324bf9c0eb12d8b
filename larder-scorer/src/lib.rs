//! Scoring pipeline for Larder.
//!
//! The pipeline has four stages, each usable on its own:
//! - **Normaliser**: [`normalise_proximity`] and [`normalise_freshness`] map
//!   raw metrics onto a `0..=100` score with a configurable [`Precision`].
//! - **Combiner**: [`combine`] and [`combine_batch`] blend the two scores
//!   using a [`WeightPair`](larder_core::WeightPair).
//! - **Filter**: [`apply_filters`] removes candidates that fail hard
//!   constraints and reports per-stage removal counts.
//! - **Ranker**: [`rank`] (or a configured [`Ranker`]) filters, scores, and
//!   orders by combined score, while [`filter_and_sort`] filters and orders
//!   by a single raw attribute without scoring.
//!
//! Every operation is a pure function of its arguments. The evaluation
//! instant travels on [`FilterConstraints`](larder_core::FilterConstraints),
//! so nothing here reads the clock.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use larder_core::{Candidate, FilterConstraints, WeightPreset};
//! use larder_scorer::rank;
//!
//! # fn main() -> Result<(), larder_core::RankingError> {
//! let constraints = FilterConstraints::unconstrained(Utc::now())
//!     .with_max_radius_km(50.0)
//!     .excluding_expired(true);
//! let shelf = [
//!     Candidate::new("item2", 25.0, 50.0),
//!     Candidate::new("item1", 0.0, 100.0),
//! ];
//! let result = rank(&shelf, &constraints, WeightPreset::Balanced.weights())?;
//! assert_eq!(result.ids(), vec!["item1", "item2"]);
//! assert_eq!(result.stats.final_count, 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod combine;
mod filter;
mod normalise;
mod rank;
mod sort;

pub use combine::{combine, combine_batch};
pub use filter::{FilterOutcome, apply_filters};
pub use normalise::{Precision, normalise_freshness, normalise_proximity};
pub use rank::{Ranker, rank};
pub use sort::{filter_and_sort, sort_by_field};
