//! Filter+sort mode: order survivors by one raw attribute.

use std::cmp::Ordering;

use larder_core::{
    Candidate, FilterConstraints, RankingError, RankingMode, RankingResult, SortField, SortOrder,
};
use log::debug;

use crate::filter::{FilterOutcome, apply_filters};

/// Filter `candidates` and order the survivors by `field`.
///
/// No scores are computed. When `order` is `None` the field's default
/// direction applies: ascending for price, distance, and expiration, and
/// descending for freshness. Equal keys keep their input order.
///
/// # Errors
/// Returns [`RankingError::MissingField`] when a survivor lacks the sorted
/// attribute, and any error [`apply_filters`] raises, including
/// [`RankingError::InvalidArgument`] for a candidate with a negative distance
/// or an out-of-range freshness percentage.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use larder_core::{Candidate, FilterConstraints, SortField};
/// use larder_scorer::filter_and_sort;
///
/// # fn main() -> Result<(), larder_core::RankingError> {
/// let shelf = [
///     Candidate::new("dear", 1.0, 90.0).with_price(5.0),
///     Candidate::new("cheap", 2.0, 70.0).with_price(1.5),
/// ];
/// let constraints = FilterConstraints::unconstrained(Utc::now());
/// let result = filter_and_sort(&shelf, &constraints, SortField::Price, None)?;
/// assert_eq!(result.ids(), vec!["cheap", "dear"]);
/// # Ok(())
/// # }
/// ```
pub fn filter_and_sort(
    candidates: &[Candidate],
    constraints: &FilterConstraints,
    field: SortField,
    order: Option<SortOrder>,
) -> Result<RankingResult, RankingError> {
    let direction = order.unwrap_or_else(|| field.default_order());
    let FilterOutcome { filtered, stats } = apply_filters(candidates, constraints)?;
    let sorted = sort_by_field(filtered, field, direction)?;
    debug!(
        "sorted {} of {} candidates by {field} {direction}",
        stats.final_count, stats.initial_count
    );
    Ok(RankingResult {
        candidates: sorted,
        stats,
        mode: RankingMode::Sorted {
            field,
            order: direction,
        },
    })
}

/// Stable sort of `candidates` by a raw attribute.
///
/// # Errors
/// Returns [`RankingError::MissingField`] naming the first candidate without
/// a price or expiration instant when sorting on that attribute.
pub fn sort_by_field(
    candidates: Vec<Candidate>,
    field: SortField,
    order: SortOrder,
) -> Result<Vec<Candidate>, RankingError> {
    match field {
        SortField::Price => sort_keyed(
            candidates,
            order,
            |candidate| {
                candidate
                    .price
                    .ok_or_else(|| RankingError::missing(&candidate.id, "price"))
            },
            f64::total_cmp,
        ),
        SortField::Distance => sort_keyed(
            candidates,
            order,
            |candidate| Ok(candidate.distance_km()),
            f64::total_cmp,
        ),
        SortField::Freshness => sort_keyed(
            candidates,
            order,
            |candidate| Ok(candidate.freshness_percent()),
            f64::total_cmp,
        ),
        SortField::Expiration => sort_keyed(
            candidates,
            order,
            |candidate| {
                candidate
                    .expires_at
                    .ok_or_else(|| RankingError::missing(&candidate.id, "expires_at"))
            },
            Ord::cmp,
        ),
    }
}

fn sort_keyed<K, F, C>(
    candidates: Vec<Candidate>,
    order: SortOrder,
    key: F,
    compare: C,
) -> Result<Vec<Candidate>, RankingError>
where
    F: Fn(&Candidate) -> Result<K, RankingError>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut keyed = candidates
        .into_iter()
        .map(|candidate| Ok((key(&candidate)?, candidate)))
        .collect::<Result<Vec<_>, RankingError>>()?;
    keyed.sort_by(|(left, _), (right, _)| match order {
        SortOrder::Ascending => compare(left, right),
        SortOrder::Descending => compare(right, left),
    });
    Ok(keyed.into_iter().map(|(_, candidate)| candidate).collect())
}
