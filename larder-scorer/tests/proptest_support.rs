//! Proptest strategies for the scoring pipeline property tests.
//!
//! Generated candidates always carry valid raw metrics: distances are
//! non-negative and freshness stays within `0..=100`, so any failure points at
//! the pipeline rather than the inputs.

use chrono::TimeDelta;
use larder_core::test_support::fixed_now;
use larder_core::{Candidate, FilterConstraints, WeightPair};
use proptest::prelude::*;

/// Strategy for a percentage in `0..=100`.
pub fn percent() -> impl Strategy<Value = f64> {
    0.0_f64..=100.0_f64
}

/// Strategy for a strictly positive radius in kilometres.
pub fn radius_km() -> impl Strategy<Value = f64> {
    0.01_f64..500.0_f64
}

/// Strategy for a weight pair totalling exactly 100.
///
/// The proximity weight is a whole number so the complement is exact.
pub fn strict_weights() -> impl Strategy<Value = WeightPair> {
    (0_u8..=100_u8).prop_map(|proximity| {
        let complement = 100_u8.saturating_sub(proximity);
        WeightPair::new(f64::from(proximity), f64::from(complement))
    })
}

/// Strategy for a single candidate, optionally expiring within a fortnight
/// either side of the fixed evaluation instant.
fn candidate() -> impl Strategy<Value = Candidate> {
    (
        0.0_f64..100.0_f64,
        percent(),
        proptest::option::of(-14_i64..=14_i64),
    )
        .prop_map(|(distance, freshness, expiry)| {
            let mut candidate = Candidate::new("", distance, freshness);
            candidate.expires_at = expiry.map(|days| fixed_now() + TimeDelta::days(days));
            candidate
        })
}

/// Strategy for a shelf of `min..=max` candidates with unique identifiers.
pub fn shelf_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Candidate>> {
    proptest::collection::vec(candidate(), min..=max).prop_map(|candidates| {
        candidates
            .into_iter()
            .enumerate()
            .map(|(index, mut candidate)| {
                candidate.id = format!("listing-{index}");
                candidate
            })
            .collect()
    })
}

/// Strategy for constraints with each check independently enabled.
pub fn constraints_strategy() -> impl Strategy<Value = FilterConstraints> {
    (
        proptest::option::of(radius_km()),
        proptest::option::of(percent()),
        any::<bool>(),
    )
        .prop_map(|(max_radius_km, min_freshness_percent, exclude_expired)| {
            FilterConstraints {
                max_radius_km,
                min_freshness_percent,
                exclude_expired,
                now: fixed_now(),
            }
        })
}
