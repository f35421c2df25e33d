use crate::domain::{Distance, GeoPoint};
use std::f64::consts::PI;

/// Mean radius of the Earth, treated as a sphere.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the great-circle distance in kilometers between two points given in degrees.
///
/// Any real input is accepted; non-finite input yields a non-finite result.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let delta_lat = (lat2 - lat1) * PI / 180.0;
    let delta_lng = (lng2 - lng1) * PI / 180.0;

    // Rounding can push `a` just outside [0, 1] near the poles and antipodes
    let a = ((delta_lat / 2.0).sin().powi(2)
        + (lat1 * PI / 180.0).cos() * (lat2 * PI / 180.0).cos() * (delta_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn distance(from: &GeoPoint, to: &GeoPoint) -> Distance {
    Distance::from_kilometers(haversine_km(from.latitude, from.longitude, to.latitude, to.longitude))
}

/// Returns the distance between two points formatted for display, e.g. `"500 m"` or `"1.11 km"`.
pub fn format_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> String {
    Distance::from_kilometers(haversine_km(lat1, lng1, lat2, lng2)).to_string()
}
