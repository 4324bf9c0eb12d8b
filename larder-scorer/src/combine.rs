//! Weighted combination of proximity and freshness scores.
//!
//! With weights totalling 100 the blend is a convex combination: the result
//! never leaves the interval spanned by its two inputs.

use larder_core::bounds::{PERCENT_MAX, ensure_percent};
use larder_core::{Candidate, RankingError, WeightMode, WeightPair};
use log::trace;

/// Blend two normalised scores using `weights`.
///
/// The result is `(proximity_weight * proximity + freshness_weight *
/// freshness) / 100`.
///
/// # Errors
/// Returns [`RankingError::InvalidArgument`] when a score or weight lies
/// outside `0..=100`, and a configuration error when `mode` is strict and
/// the weights do not total 100.
///
/// # Examples
/// ```
/// use larder_core::{WeightMode, WeightPair};
/// use larder_scorer::combine;
///
/// # fn main() -> Result<(), larder_core::RankingError> {
/// let weights = WeightPair::new(70.0, 30.0);
/// assert_eq!(combine(100.0, 0.0, weights, WeightMode::Strict)?, 70.0);
/// assert!(combine(80.0, 40.0, WeightPair::new(60.0, 50.0), WeightMode::Strict).is_err());
/// # Ok(())
/// # }
/// ```
pub fn combine(
    proximity: f64,
    freshness: f64,
    weights: WeightPair,
    mode: WeightMode,
) -> Result<f64, RankingError> {
    let validated = weights.validate(mode)?;
    blend(proximity, freshness, validated, mode)
}

/// Combine the component scores of every candidate.
///
/// Weights are validated once for the whole batch. The batch fails fast: the
/// first candidate without both component scores aborts the call and no
/// partial output is returned.
///
/// # Errors
/// Returns [`RankingError::MissingField`] naming the first candidate that
/// lacks a component score, and any error [`combine`] would raise.
pub fn combine_batch(
    candidates: Vec<Candidate>,
    weights: WeightPair,
    mode: WeightMode,
) -> Result<Vec<Candidate>, RankingError> {
    let validated = weights.validate(mode)?;
    candidates
        .into_iter()
        .map(|mut candidate| {
            let scores = candidate.scores();
            let proximity = scores
                .proximity()
                .ok_or_else(|| RankingError::missing(&candidate.id, "proximity_score"))?;
            let freshness = scores
                .freshness()
                .ok_or_else(|| RankingError::missing(&candidate.id, "freshness_score"))?;
            let combined = blend(proximity, freshness, validated, mode)?;
            trace!(
                "candidate {} combined {proximity} and {freshness} into {combined}",
                candidate.id
            );
            candidate.record_combined(combined);
            Ok(candidate)
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "the blend is a weighted average of percentages"
)]
fn blend(
    proximity: f64,
    freshness: f64,
    weights: WeightPair,
    mode: WeightMode,
) -> Result<f64, RankingError> {
    let proximity_score = ensure_percent("proximity_score", proximity)?;
    let freshness_score = ensure_percent("freshness_score", freshness)?;
    let proximity_share = weights.proximity / PERCENT_MAX;
    let freshness_share = weights.freshness / PERCENT_MAX;
    let combined = proximity_share * proximity_score + freshness_share * freshness_score;
    match mode {
        // Rounding in the shares must not push the result outside its inputs.
        WeightMode::Strict => Ok(combined.clamp(
            proximity_score.min(freshness_score),
            proximity_score.max(freshness_score),
        )),
        WeightMode::Relaxed => Ok(combined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::ConfigurationError;
    use rstest::rstest;

    const BALANCED: WeightPair = WeightPair::new(50.0, 50.0);

    fn scored(id: &str, proximity: f64, freshness: f64) -> Candidate {
        let mut candidate = Candidate::new(id, 0.0, freshness);
        candidate.record_components(proximity, freshness);
        candidate
    }

    #[rstest]
    #[case(100.0, 100.0, 100.0)]
    #[case(50.0, 50.0, 50.0)]
    #[case(80.0, 20.0, 50.0)]
    #[case(0.0, 0.0, 0.0)]
    fn balanced_weights_average(
        #[case] proximity: f64,
        #[case] freshness: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(
            combine(proximity, freshness, BALANCED, WeightMode::Strict),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(0.1, 0.3)]
    #[case(66.67, 12.5)]
    fn extreme_weights_select_one_input(#[case] proximity: f64, #[case] freshness: f64) {
        let all_proximity = WeightPair::new(100.0, 0.0);
        let all_freshness = WeightPair::new(0.0, 100.0);
        assert_eq!(
            combine(proximity, freshness, all_proximity, WeightMode::Strict),
            Ok(proximity)
        );
        assert_eq!(
            combine(proximity, freshness, all_freshness, WeightMode::Strict),
            Ok(freshness)
        );
    }

    #[rstest]
    fn strict_mode_rejects_weights_not_totalling_hundred() {
        let err = combine(80.0, 40.0, WeightPair::new(60.0, 50.0), WeightMode::Strict)
            .expect_err("weights sum to 110");
        assert!(matches!(
            err,
            RankingError::Configuration(ConfigurationError::WeightSum { .. })
        ));
    }

    #[rstest]
    fn relaxed_mode_accepts_other_totals() {
        let combined = combine(80.0, 40.0, WeightPair::new(60.0, 50.0), WeightMode::Relaxed)
            .expect("relaxed weights");
        assert!((combined - 68.0).abs() < 1e-9, "got {combined}");
    }

    #[rstest]
    #[case(-1.0, 50.0, "proximity_score")]
    #[case(50.0, 100.5, "freshness_score")]
    fn scores_must_be_percentages(
        #[case] proximity: f64,
        #[case] freshness: f64,
        #[case] expected: &str,
    ) {
        let err = combine(proximity, freshness, BALANCED, WeightMode::Strict)
            .expect_err("score out of range");
        match err {
            RankingError::InvalidArgument { argument, .. } => assert_eq!(argument, expected),
            other => panic!("expected InvalidArgument, found {other:?}"),
        }
    }

    #[rstest]
    fn batch_records_combined_scores() {
        let batch = vec![scored("a", 100.0, 100.0), scored("b", 50.0, 50.0)];
        let combined = combine_batch(batch, BALANCED, WeightMode::Strict).expect("combine batch");
        let scores: Vec<_> = combined
            .iter()
            .map(|candidate| candidate.scores().combined())
            .collect();
        assert_eq!(scores, vec![Some(100.0), Some(50.0)]);
    }

    #[rstest]
    fn batch_fails_fast_on_unscored_candidate() {
        let batch = vec![
            scored("a", 100.0, 100.0),
            Candidate::new("raw", 1.0, 90.0),
            scored("c", 10.0, 10.0),
        ];
        let err = combine_batch(batch, BALANCED, WeightMode::Strict).expect_err("missing scores");
        assert_eq!(err, RankingError::missing("raw", "proximity_score"));
    }

    #[rstest]
    fn batch_validates_weights_even_when_empty() {
        let err = combine_batch(Vec::new(), WeightPair::new(10.0, 10.0), WeightMode::Strict)
            .expect_err("invalid weights");
        assert!(matches!(err, RankingError::Configuration(_)));
    }
}
