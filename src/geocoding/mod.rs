mod fixed_region;
mod gazetteer;
mod place_record;
mod resolver;

use crate::domain::{Address, GeoPoint, Region};
use async_trait::async_trait;
use std::io;
use thiserror::Error;

pub use fixed_region::FixedRegion;
pub use gazetteer::Gazetteer;
pub use resolver::resolve_address;

/// Resolves a point into a structured address.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, point: GeoPoint) -> Result<Address, GeocodingError>;
}

/// Determines the coarse region the user is in, independent of the position.
#[async_trait]
pub trait RegionLookup: Send + Sync {
    async fn region(&self) -> Result<Region, GeocodingError>;
}

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("could not read places: {0}")]
    Io(#[from] io::Error),
    #[error("invalid place on line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
    #[error("no known place near {point}")]
    NotFound { point: GeoPoint },
    #[error("geocoder unavailable: {0}")]
    Unavailable(String),
}
