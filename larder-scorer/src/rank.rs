//! Ranking mode: filter, score, and order by combined score.

use larder_core::{
    Candidate, ConfigurationError, FilterConstraints, RankingError, RankingMode, RankingResult,
    ScoreBasis, WeightMode, WeightPair,
};
use log::{debug, trace};

use crate::combine::combine_batch;
use crate::filter::{FilterOutcome, apply_filters};
use crate::normalise::{Precision, normalise_freshness, normalise_proximity};

/// Scoring configuration for ranking requests.
///
/// A ranker pairs the request's weights with the validation mode and the
/// precision applied to normalised scores.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use larder_core::{Candidate, FilterConstraints, WeightMode, WeightPreset};
/// use larder_scorer::Ranker;
///
/// # fn main() -> Result<(), larder_core::RankingError> {
/// let ranker = Ranker::new(WeightPreset::Nearby.weights()).with_mode(WeightMode::Relaxed);
/// let constraints = FilterConstraints::unconstrained(Utc::now()).with_max_radius_km(10.0);
/// let shelf = [Candidate::new("far", 8.0, 100.0), Candidate::new("near", 1.0, 40.0)];
/// assert_eq!(ranker.rank(&shelf, &constraints)?.ids(), vec!["near", "far"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranker {
    weights: WeightPair,
    mode: WeightMode,
    precision: Precision,
}

impl Ranker {
    /// Create a strict ranker with the default precision.
    #[must_use]
    pub const fn new(weights: WeightPair) -> Self {
        Self {
            weights,
            mode: WeightMode::Strict,
            precision: Precision::DEFAULT,
        }
    }

    /// Set the weight validation mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: WeightMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the precision applied to normalised scores.
    #[must_use]
    pub const fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Weights blended by this ranker.
    #[must_use]
    pub const fn weights(&self) -> WeightPair {
        self.weights
    }

    /// Validation mode applied to the weights.
    #[must_use]
    pub const fn mode(&self) -> WeightMode {
        self.mode
    }

    /// Precision applied to normalised scores.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Filter `candidates`, score the survivors, and order them by combined
    /// score, highest first.
    ///
    /// Equal scores keep their input order.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::MissingRadius`] when the constraints
    /// carry no radius, even if nothing would survive the filter. Any error
    /// from [`apply_filters`] or [`Ranker::score_candidates`] aborts the
    /// request.
    pub fn rank(
        &self,
        candidates: &[Candidate],
        constraints: &FilterConstraints,
    ) -> Result<RankingResult, RankingError> {
        let radius = constraints
            .max_radius_km
            .ok_or(ConfigurationError::MissingRadius)?;
        self.weights.validate(self.mode)?;

        let FilterOutcome { filtered, stats } = apply_filters(candidates, constraints)?;
        let scored = self.score_candidates(filtered, radius)?;
        let ranked = order_by_combined(scored)?;
        debug!(
            "ranked {} of {} candidates",
            stats.final_count, stats.initial_count
        );
        Ok(RankingResult {
            candidates: ranked,
            stats,
            mode: RankingMode::Ranked,
        })
    }

    /// Normalise and combine scores for every candidate.
    ///
    /// Precomputed components are kept, as are components this ranker's
    /// precision produced against the same `max_radius_km`. Everything else,
    /// including components normalised under another radius or precision,
    /// is recomputed from the raw metrics. Every candidate leaves with a
    /// combined score.
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidArgument`] for a malformed metric,
    /// radius, or weight, and a configuration error for strict weights that
    /// do not total 100.
    pub fn score_candidates(
        &self,
        candidates: Vec<Candidate>,
        max_radius_km: f64,
    ) -> Result<Vec<Candidate>, RankingError> {
        let basis = ScoreBasis::new(max_radius_km, self.precision.decimals());
        let normalised = candidates
            .into_iter()
            .map(|mut candidate| {
                if !candidate.scores().is_current_for(basis) {
                    let proximity = normalise_proximity(
                        candidate.distance_km(),
                        max_radius_km,
                        self.precision,
                    )?;
                    let freshness =
                        normalise_freshness(candidate.freshness_percent(), self.precision)?;
                    trace!(
                        "candidate {} normalised to proximity {proximity}, freshness {freshness}",
                        candidate.id
                    );
                    candidate.record_normalised(proximity, freshness, basis);
                }
                Ok(candidate)
            })
            .collect::<Result<Vec<_>, RankingError>>()?;
        combine_batch(normalised, self.weights, self.mode)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(WeightPair::default())
    }
}

/// Rank `candidates` with strict `weights` and the default precision.
///
/// # Errors
/// See [`Ranker::rank`].
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use larder_core::{Candidate, FilterConstraints, WeightPair};
/// use larder_scorer::rank;
///
/// # fn main() -> Result<(), larder_core::RankingError> {
/// let constraints = FilterConstraints::unconstrained(Utc::now()).with_max_radius_km(50.0);
/// let shelf = [Candidate::new("item2", 25.0, 50.0), Candidate::new("item1", 0.0, 100.0)];
/// let result = rank(&shelf, &constraints, WeightPair::new(50.0, 50.0))?;
/// assert_eq!(result.ids(), vec!["item1", "item2"]);
/// # Ok(())
/// # }
/// ```
pub fn rank(
    candidates: &[Candidate],
    constraints: &FilterConstraints,
    weights: WeightPair,
) -> Result<RankingResult, RankingError> {
    Ranker::new(weights).rank(candidates, constraints)
}

fn order_by_combined(candidates: Vec<Candidate>) -> Result<Vec<Candidate>, RankingError> {
    let mut keyed = candidates
        .into_iter()
        .map(|candidate| {
            let score = candidate
                .scores()
                .combined()
                .ok_or_else(|| RankingError::missing(&candidate.id, "combined_score"))?;
            Ok((score, candidate))
        })
        .collect::<Result<Vec<_>, RankingError>>()?;
    // `sort_by` is stable, so ties keep their input order.
    keyed.sort_by(|(left, _), (right, _)| right.total_cmp(left));
    Ok(keyed.into_iter().map(|(_, candidate)| candidate).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::test_support::{fixed_now, mixed_shelf, mixed_shelf_constraints, radius_only};
    use rstest::{fixture, rstest};

    #[fixture]
    fn balanced() -> Ranker {
        Ranker::default()
    }

    fn combined_scores(result: &RankingResult) -> Vec<f64> {
        result
            .candidates
            .iter()
            .filter_map(|candidate| candidate.scores().combined())
            .collect()
    }

    #[rstest]
    fn scores_and_orders_the_end_to_end_pair(balanced: Ranker) {
        let shelf = [
            Candidate::new("item1", 0.0, 100.0),
            Candidate::new("item2", 25.0, 50.0),
        ];
        let result = balanced.rank(&shelf, &radius_only(50.0)).expect("rank");
        assert_eq!(result.ids(), vec!["item1", "item2"]);
        let first = result.candidates.first().expect("first").scores();
        assert_eq!(first.proximity(), Some(100.0));
        assert_eq!(first.freshness(), Some(100.0));
        assert_eq!(combined_scores(&result), vec![100.0, 50.0]);
        assert_eq!(result.mode, RankingMode::Ranked);
    }

    #[rstest]
    fn ties_preserve_input_order(balanced: Ranker) {
        let shelf = [
            Candidate::new("first", 5.0, 50.0),
            Candidate::new("best", 0.0, 100.0),
            Candidate::new("second", 5.0, 50.0),
            Candidate::new("third", 5.0, 50.0),
        ];
        let result = balanced.rank(&shelf, &radius_only(10.0)).expect("rank");
        assert_eq!(result.ids(), vec!["best", "first", "second", "third"]);
    }

    #[rstest]
    fn ranking_uses_filter_survivors(balanced: Ranker) {
        let result = balanced
            .rank(&mixed_shelf(), &mixed_shelf_constraints())
            .expect("rank");
        assert_eq!(result.stats.final_count, 3);
        assert_eq!(result.ids(), vec!["strawberries", "honey", "bread"]);
    }

    #[rstest]
    fn missing_radius_is_a_configuration_error(balanced: Ranker) {
        let err = balanced
            .rank(&[], &FilterConstraints::unconstrained(fixed_now()))
            .expect_err("radius required");
        assert_eq!(
            err,
            RankingError::Configuration(ConfigurationError::MissingRadius)
        );
    }

    #[rstest]
    fn strict_weights_are_checked_before_filtering() {
        let ranker = Ranker::new(WeightPair::new(60.0, 50.0));
        let err = ranker
            .rank(&[], &radius_only(10.0))
            .expect_err("weights sum to 110");
        assert!(matches!(err, RankingError::Configuration(_)));
    }

    #[rstest]
    fn precomputed_scores_are_kept(balanced: Ranker) {
        let mut prescored = Candidate::new("prescored", 9.0, 10.0);
        prescored.record_components(90.0, 90.0);
        let shelf = [Candidate::new("fresh", 1.0, 80.0), prescored];
        let result = balanced.rank(&shelf, &radius_only(10.0)).expect("rank");
        assert_eq!(result.ids(), vec!["prescored", "fresh"]);
        assert_eq!(combined_scores(&result), vec![90.0, 85.0]);
    }

    #[rstest]
    fn reranking_under_a_new_radius_rescores_from_raw_metrics(balanced: Ranker) {
        let shelf = [Candidate::new("plums", 5.0, 70.0)];
        let wide = balanced.rank(&shelf, &radius_only(100.0)).expect("wide rank");
        let first = wide.candidates.first().expect("ranked").scores();
        assert_eq!(first.proximity(), Some(95.0));

        let narrow = balanced
            .rank(&wide.candidates, &radius_only(10.0))
            .expect("narrow rank");
        let rescored = narrow.candidates.first().expect("ranked").scores();
        assert_eq!(rescored.proximity(), Some(50.0));
        assert_eq!(rescored.combined(), Some(60.0));
    }

    #[rstest]
    fn reranking_under_a_new_precision_rescores(balanced: Ranker) {
        let shelf = [Candidate::new("third", 10.0, 50.0)];
        let fine = balanced.rank(&shelf, &radius_only(30.0)).expect("fine rank");
        assert_eq!(
            fine.candidates.first().expect("ranked").scores().proximity(),
            Some(66.67)
        );

        let coarse = balanced.with_precision(Precision::new(0).expect("precision"));
        let rounded = coarse
            .rank(&fine.candidates, &radius_only(30.0))
            .expect("coarse rank");
        assert_eq!(
            rounded.candidates.first().expect("ranked").scores().proximity(),
            Some(67.0)
        );
    }

    #[rstest]
    fn reranking_under_the_same_basis_is_stable(balanced: Ranker) {
        let first = balanced
            .rank(&mixed_shelf(), &mixed_shelf_constraints())
            .expect("first rank");
        let second = balanced
            .rank(&first.candidates, &mixed_shelf_constraints())
            .expect("second rank");
        assert_eq!(second.candidates, first.candidates);
    }

    #[rstest]
    fn precision_applies_to_normalised_scores() {
        let ranker = Ranker::default().with_precision(Precision::new(0).expect("precision"));
        let scored = ranker
            .score_candidates(vec![Candidate::new("third", 10.0, 50.0)], 30.0)
            .expect("score");
        let scores = scored.first().expect("scored").scores();
        assert_eq!(scores.proximity(), Some(67.0));
    }

    #[rstest]
    fn weights_shift_the_order() {
        let shelf = [
            Candidate::new("near-stale", 1.0, 30.0),
            Candidate::new("far-fresh", 9.0, 100.0),
        ];
        let nearby = Ranker::new(WeightPair::new(90.0, 10.0))
            .rank(&shelf, &radius_only(10.0))
            .expect("rank");
        let fresh = Ranker::new(WeightPair::new(10.0, 90.0))
            .rank(&shelf, &radius_only(10.0))
            .expect("rank");
        assert_eq!(nearby.ids(), vec!["near-stale", "far-fresh"]);
        assert_eq!(fresh.ids(), vec!["far-fresh", "near-stale"]);
    }

    #[rstest]
    fn invalid_metric_aborts_the_batch(balanced: Ranker) {
        let shelf = [
            Candidate::new("fine", 1.0, 50.0),
            Candidate::new("broken", 1.0, 150.0),
        ];
        let err = balanced
            .rank(&shelf, &radius_only(10.0))
            .expect_err("freshness out of range");
        assert!(matches!(
            err,
            RankingError::InvalidArgument {
                argument: "freshness_percent",
                ..
            }
        ));
    }
}
