//! Great-circle distance between map pins.

use super::domain::Coordinate;

/// Mean Earth radius in meters, as used by the haversine convention.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance in meters between two positions.
///
/// Symmetric, zero only for identical positions, and finite for every
/// in-range coordinate pair including antipodes and the poles. Callers are
/// responsible for supplying validated coordinates; out-of-range input is a
/// contract violation, not an error condition.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let half_dlat = ((b.latitude - a.latitude).to_radians() / 2.0).sin();
    let half_dlng = ((b.longitude - a.longitude).to_radians() / 2.0).sin();

    let h = half_dlat * half_dlat + lat_a.cos() * lat_b.cos() * half_dlng * half_dlng;

    // Rounding can push h a hair past 1.0 for near-antipodal pairs; clamp
    // so asin stays defined.
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}
