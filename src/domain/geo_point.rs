use crate::domain::Distance;
use crate::geo::haversine;
use std::fmt;
use thiserror::Error;

/// A latitude/longitude pair in signed degrees.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point without any range checks, any real input is accepted.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    /// Creates a point, rejecting non-finite values and coordinates outside the geographic range.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, InvalidGeoPoint> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidGeoPoint::Latitude(latitude));
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidGeoPoint::Longitude(longitude));
        }

        Ok(GeoPoint { latitude, longitude })
    }

    pub fn distance_to(&self, other: &GeoPoint) -> Distance {
        haversine::distance(self, other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidGeoPoint {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    Latitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    Longitude(f64),
}
