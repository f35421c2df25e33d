use crate::domain::Region;
use crate::geocoding::{GeocodingError, RegionLookup};
use async_trait::async_trait;

/// A region lookup answering with a configured country.
#[derive(Clone, Debug)]
pub struct FixedRegion {
    region: Region,
}

impl FixedRegion {
    pub fn new(region: Region) -> Self {
        FixedRegion { region }
    }
}

#[async_trait]
impl RegionLookup for FixedRegion {
    async fn region(&self) -> Result<Region, GeocodingError> {
        if self.region.country.is_none() && self.region.country_code.is_none() {
            return Err(GeocodingError::Unavailable("no region configured".to_string()));
        }
        Ok(self.region.clone())
    }
}
