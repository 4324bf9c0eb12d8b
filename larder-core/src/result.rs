//! Ranked output together with the filter provenance behind it.

use serde::{Deserialize, Serialize};

use crate::{Candidate, SortField, SortOrder};

/// Removal counts recorded by a filter pass.
///
/// A candidate is counted only at the first stage that rejects it, so
/// `initial_count` always equals `final_count` plus every removal count.
///
/// # Examples
/// ```
/// use larder_core::FilterStats;
///
/// let stats = FilterStats::starting_with(3);
/// assert_eq!(stats.final_count, 3);
/// assert!(stats.is_conserved());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Candidates entering the filter.
    pub initial_count: usize,
    /// Candidates removed because they had expired.
    pub removed_by_expiration: usize,
    /// Candidates removed for lying beyond the radius.
    pub removed_by_radius: usize,
    /// Candidates removed for falling below the freshness floor.
    pub removed_by_freshness: usize,
    /// Candidates surviving every stage.
    pub final_count: usize,
}

impl FilterStats {
    /// Stats for a pass over `initial_count` candidates before any removal.
    #[must_use]
    pub const fn starting_with(initial_count: usize) -> Self {
        Self {
            initial_count,
            removed_by_expiration: 0,
            removed_by_radius: 0,
            removed_by_freshness: 0,
            final_count: initial_count,
        }
    }

    /// Total candidates removed across all stages.
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.removed_by_expiration
            .saturating_add(self.removed_by_radius)
            .saturating_add(self.removed_by_freshness)
    }

    /// Report whether every initial candidate is accounted for.
    #[must_use]
    pub const fn is_conserved(&self) -> bool {
        self.initial_count == self.final_count.saturating_add(self.removed())
    }
}

/// Terminal stage that produced a [`RankingResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RankingMode {
    /// Ordered by combined score, highest first.
    Ranked,
    /// Ordered by a single raw attribute.
    Sorted {
        /// Attribute sorted on.
        field: SortField,
        /// Direction applied.
        order: SortOrder,
    },
}

/// Ordered candidates plus the statistics of the filter pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Surviving candidates in output order.
    pub candidates: Vec<Candidate>,
    /// Filter provenance.
    pub stats: FilterStats,
    /// Terminal stage that ordered the candidates.
    #[serde(flatten)]
    pub mode: RankingMode,
}

impl RankingResult {
    /// Number of candidates returned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Report whether no candidates survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Identifiers in output order.
    ///
    /// # Examples
    /// ```
    /// use larder_core::{Candidate, FilterStats, RankingMode, RankingResult};
    ///
    /// let result = RankingResult {
    ///     candidates: vec![Candidate::new("a", 1.0, 90.0), Candidate::new("b", 2.0, 80.0)],
    ///     stats: FilterStats::starting_with(2),
    ///     mode: RankingMode::Ranked,
    /// };
    /// assert_eq!(result.ids(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .map(|candidate| candidate.id.as_str())
            .collect()
    }
}
