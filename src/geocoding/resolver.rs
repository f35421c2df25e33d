use crate::domain::{Address, GeoPoint};
use crate::geocoding::{GeocodingError, RegionLookup, ReverseGeocoder};
use tracing::{instrument, warn};

/// Looks up the address and the region concurrently; only a failing address lookup fails the resolution.
#[instrument(skip(geocoder, region_lookup))]
pub async fn resolve_address(
    geocoder: &dyn ReverseGeocoder,
    region_lookup: &dyn RegionLookup,
    point: GeoPoint,
) -> Result<Address, GeocodingError> {
    let (address, region) = futures::join!(geocoder.reverse(point), region_lookup.region());

    let address = address?;
    match region {
        Ok(region) => Ok(address.with_country_fallback(&region)),
        Err(e) => {
            warn!("⚠️ Region lookup failed: {}", e);
            Ok(address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;
    use crate::geocoding::FixedRegion;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use test_log::test;

    struct StaticGeocoder(Option<Address>);

    #[async_trait]
    impl ReverseGeocoder for StaticGeocoder {
        async fn reverse(&self, point: GeoPoint) -> Result<Address, GeocodingError> {
            self.0.clone().ok_or(GeocodingError::NotFound { point })
        }
    }

    fn mexico() -> FixedRegion {
        FixedRegion::new(Region {
            country: Some("México".to_string()),
            country_code: Some("mx".to_string()),
        })
    }

    fn street() -> Address {
        Address {
            road: Some("Calle de Madero".to_string()),
            ..Default::default()
        }
    }

    #[test(tokio::test)]
    async fn resolve_address_fills_the_country_from_the_region() -> Result<(), GeocodingError> {
        let address = resolve_address(&StaticGeocoder(Some(street())), &mexico(), GeoPoint::new(19.43, -99.13)).await?;

        assert_eq!(address.simple_address(), "Calle de Madero, City not specified, México");
        assert_eq!(address.flag(), "🇲🇽");
        Ok(())
    }

    #[test(tokio::test)]
    async fn resolve_address_tolerates_a_failing_region_lookup() -> Result<(), GeocodingError> {
        let unknown = FixedRegion::new(Region::default());

        let address = resolve_address(&StaticGeocoder(Some(street())), &unknown, GeoPoint::new(19.43, -99.13)).await?;

        assert_eq!(address, street());
        Ok(())
    }

    #[test(tokio::test)]
    async fn resolve_address_fails_when_the_address_lookup_fails() {
        let result = resolve_address(&StaticGeocoder(None), &mexico(), GeoPoint::new(19.43, -99.13)).await;

        assert!(matches!(result, Err(GeocodingError::NotFound { .. })));
    }
}
