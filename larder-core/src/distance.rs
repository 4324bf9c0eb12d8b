//! Great-circle distance between buyer and listing.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, matching
//! the convention used by [`geo`].

use geo::{Coord, Distance, Haversine, Point};

const METRES_PER_KILOMETRE: f64 = 1_000.0;

/// Return the haversine distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use larder_core::distance_km;
///
/// let london = Coord { x: -0.1276, y: 51.5072 };
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let km = distance_km(london, paris);
/// assert!((340.0..350.0).contains(&km));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting metres to kilometres divides by a constant"
)]
pub fn distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(from), Point::from(to)) / METRES_PER_KILOMETRE
}
