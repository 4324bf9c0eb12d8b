//! Deterministic fixtures shared by unit, behaviour, and property tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::{Candidate, FilterConstraints};

/// Fixed evaluation instant used across test suites.
///
/// # Panics
/// Never in practice; the timestamp literal is valid.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "the literal timestamp is always representable"
)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("fixed timestamp is valid")
}

/// Build a candidate expiring `days` after [`fixed_now`]; negative values
/// produce an already expired candidate.
#[must_use]
pub fn expiring_in(id: &str, distance_km: f64, freshness_percent: f64, days: i64) -> Candidate {
    Candidate::new(id, distance_km, freshness_percent)
        .with_expiry(fixed_now() + TimeDelta::days(days))
}

/// Constraints evaluated at [`fixed_now`] with a radius and no other stage.
#[must_use]
pub fn radius_only(max_radius_km: f64) -> FilterConstraints {
    FilterConstraints::unconstrained(fixed_now()).with_max_radius_km(max_radius_km)
}

/// A small shelf of listings covering every filter stage.
///
/// Against a 10 km radius, a 50% freshness floor, and expiry exclusion at
/// [`fixed_now`], `sour-milk` is expired, `far-cheese` is out of range,
/// `limp-lettuce` is too stale, and the remaining three survive.
#[must_use]
pub fn mixed_shelf() -> Vec<Candidate> {
    vec![
        expiring_in("strawberries", 2.0, 90.0, 3).with_price(4.5),
        expiring_in("sour-milk", 1.0, 95.0, -1).with_price(1.2),
        expiring_in("far-cheese", 42.0, 80.0, 20).with_price(7.0),
        expiring_in("limp-lettuce", 3.0, 20.0, 1).with_price(0.9),
        expiring_in("bread", 8.0, 60.0, 2).with_price(2.2),
        Candidate::new("honey", 10.0, 100.0).with_price(6.0),
    ]
}

/// Constraints matching the [`mixed_shelf`] description.
#[must_use]
pub fn mixed_shelf_constraints() -> FilterConstraints {
    FilterConstraints::unconstrained(fixed_now())
        .with_max_radius_km(10.0)
        .with_min_freshness_percent(50.0)
        .excluding_expired(true)
}
