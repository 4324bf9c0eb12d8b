//! Hard-constraint filtering ahead of scoring.
//!
//! Stages run in a fixed order: expiration, radius, then freshness. A
//! candidate is counted against the first stage that rejects it and later
//! stages never see it, so [`FilterStats`] always balances.

use std::fmt;

use larder_core::bounds::{ensure_non_negative, ensure_percent};
use larder_core::{Candidate, FilterConstraints, FilterStats, RankingError, is_expired};
use log::{debug, trace};

/// Survivors of a filter pass together with its removal counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Candidates that passed every enabled stage, in input order.
    pub filtered: Vec<Candidate>,
    /// Per-stage removal counts.
    pub stats: FilterStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Expiration,
    Radius,
    Freshness,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Expiration => "expiration",
            Self::Radius => "radius",
            Self::Freshness => "freshness",
        })
    }
}

/// Remove candidates that fail the enabled constraints.
///
/// The input slice is never modified; survivors are cloned into the
/// outcome. Every candidate's raw metrics are checked before any stage runs,
/// whichever stages are enabled, so one malformed listing aborts the pass.
/// Candidates without an expiration instant never count as expired.
///
/// # Errors
/// Returns [`RankingError::InvalidArgument`] when the constraints themselves
/// are out of range, or when any candidate carries a negative distance or an
/// out-of-range freshness percentage.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use larder_core::{Candidate, FilterConstraints};
/// use larder_scorer::apply_filters;
///
/// # fn main() -> Result<(), larder_core::RankingError> {
/// let constraints = FilterConstraints::unconstrained(Utc::now()).with_max_radius_km(50.0);
/// let outcome = apply_filters(&[Candidate::new("far", 60.0, 90.0)], &constraints)?;
/// assert!(outcome.filtered.is_empty());
/// assert_eq!(outcome.stats.removed_by_radius, 1);
/// # Ok(())
/// # }
/// ```
pub fn apply_filters(
    candidates: &[Candidate],
    constraints: &FilterConstraints,
) -> Result<FilterOutcome, RankingError> {
    let checked = constraints.validate()?;
    candidates.iter().try_for_each(ensure_metrics)?;
    let mut stats = FilterStats::starting_with(candidates.len());
    let mut survivors: Vec<&Candidate> = candidates.iter().collect();

    if checked.exclude_expired {
        let now = checked.now;
        survivors = run_stage(
            Stage::Expiration,
            survivors,
            &mut stats.removed_by_expiration,
            |candidate| Ok(candidate.expires_at.is_some_and(|at| is_expired(at, now))),
        )?;
    }
    if let Some(radius) = checked.max_radius_km {
        survivors = run_stage(
            Stage::Radius,
            survivors,
            &mut stats.removed_by_radius,
            |candidate| Ok(candidate.distance_km() > radius),
        )?;
    }
    if let Some(floor) = checked.min_freshness_percent {
        survivors = run_stage(
            Stage::Freshness,
            survivors,
            &mut stats.removed_by_freshness,
            |candidate| Ok(candidate.freshness_percent() < floor),
        )?;
    }

    stats.final_count = survivors.len();
    debug!(
        "filter kept {} of {} candidates",
        stats.final_count, stats.initial_count
    );
    Ok(FilterOutcome {
        filtered: survivors.into_iter().cloned().collect(),
        stats,
    })
}

fn ensure_metrics(candidate: &Candidate) -> Result<(), RankingError> {
    ensure_non_negative("distance_km", candidate.distance_km())?;
    ensure_percent("freshness_percent", candidate.freshness_percent())?;
    Ok(())
}

fn run_stage<'a, F>(
    stage: Stage,
    survivors: Vec<&'a Candidate>,
    removed: &mut usize,
    mut rejects: F,
) -> Result<Vec<&'a Candidate>, RankingError>
where
    F: FnMut(&Candidate) -> Result<bool, RankingError>,
{
    let before = survivors.len();
    let mut kept = Vec::with_capacity(before);
    for candidate in survivors {
        if rejects(candidate)? {
            trace!("{stage} stage rejected candidate {}", candidate.id);
        } else {
            kept.push(candidate);
        }
    }
    *removed = before.saturating_sub(kept.len());
    debug!("{stage} stage removed {removed} of {before} candidates");
    Ok(kept)
}
