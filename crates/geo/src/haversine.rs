//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;
use std::f64::consts::PI;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use aroundin_geo::{haversine_distance, Coordinate};
///
/// let nairobi = Coordinate::new(-1.2921, 36.8219);
/// let mombasa = Coordinate::new(-4.0435, 39.6682);
///
/// let distance = haversine_distance(&nairobi, &mombasa);
/// assert!((distance - 440.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    EARTH_RADIUS_KM * central_angle(from, to)
}

/// Calculates the great-circle distance between two coordinates in meters.
///
/// The kilometer result is scaled to meters as the last step, so values are
/// bit-for-bit stable with `6371 * c * 1000`.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    EARTH_RADIUS_KM * central_angle(from, to) * 1000.0
}

#[inline]
fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Central angle between two points, in radians.
#[inline]
fn central_angle(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = deg_to_rad(to.latitude - from.latitude);
    let d_lon = deg_to_rad(to.longitude - from.longitude);

    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();

    let a = half_lat * half_lat
        + deg_to_rad(from.latitude).cos() * deg_to_rad(to.latitude).cos() * half_lon * half_lon;

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
