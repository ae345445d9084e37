//! Great-circle distance between stop coordinates.
//!
//! Uses the spherical law of cosines on a sphere of radius
//! [`EARTH_RADIUS_M`].

use crate::models::types::Coordinates;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the great-circle distance between two points in meters.
///
/// Symmetric in its arguments and exactly zero for identical points.
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }

    let from_lat = from.lat.to_radians();
    let to_lat = to.lat.to_radians();
    let delta_lng = (from.lng - to.lng).abs().to_radians();

    let cos_angle =
        from_lat.sin() * to_lat.sin() + from_lat.cos() * to_lat.cos() * delta_lng.cos();

    // Rounding can push nearly coincident points just past 1.0
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
}
