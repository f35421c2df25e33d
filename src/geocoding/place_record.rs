use crate::domain::{Address, GeoPoint, PlaceCategory, PlaceTags};
use serde::Deserialize;

/// A gazetteer entry, one per line in the places file.
#[derive(Debug, Deserialize)]
pub struct PlaceRecord {
    #[serde(flatten)]
    pub point: GeoPoint,
    pub address: AddressRecord,
}

/// Address keys as emitted by OpenStreetMap based geocoders, several of which are aliases.
#[derive(Default, Debug, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    house_number: Option<String>,
    road: Option<String>,
    street: Option<String>,
    neighbourhood: Option<String>,
    suburb: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    state_district: Option<String>,
    state: Option<String>,
    province: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    postcode: Option<String>,
    shop: Option<String>,
    amenity: Option<String>,
    highway: Option<String>,
    natural: Option<String>,
    leisure: Option<String>,
}

pub fn map_address(record: AddressRecord) -> Address {
    let tags = PlaceTags {
        house_number: record.house_number.clone(),
        shop: record.shop,
        amenity: record.amenity,
        highway: record.highway,
        natural: record.natural,
        leisure: record.leisure,
    };

    Address {
        house_number: non_empty(record.house_number),
        road: non_empty(record.road).or(non_empty(record.street)),
        neighbourhood: non_empty(record.neighbourhood).or(non_empty(record.suburb)),
        city: non_empty(record.city)
            .or(non_empty(record.town))
            .or(non_empty(record.village))
            .or(non_empty(record.municipality)),
        county: non_empty(record.county).or(non_empty(record.state_district)),
        state: non_empty(record.state).or(non_empty(record.province)),
        country: non_empty(record.country),
        country_code: non_empty(record.country_code),
        postcode: non_empty(record.postcode),
        category: PlaceCategory::classify(&tags),
    }
}

// Geocoders report absent parts as empty strings as often as they omit them
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn map_address_resolves_aliased_keys() -> Result<(), serde_json::Error> {
        let record: AddressRecord = serde_json::from_str(
            r#"{"street": "Keizersgracht", "suburb": "Grachtengordel", "village": "Amsterdam", "state_district": "Amsterdam", "province": "Noord-Holland", "country_code": "nl"}"#,
        )?;

        let address = map_address(record);

        assert_eq!(
            address,
            Address {
                house_number: None,
                road: Some("Keizersgracht".to_string()),
                neighbourhood: Some("Grachtengordel".to_string()),
                city: Some("Amsterdam".to_string()),
                county: Some("Amsterdam".to_string()),
                state: Some("Noord-Holland".to_string()),
                country: None,
                country_code: Some("nl".to_string()),
                postcode: None,
                category: PlaceCategory::General,
            }
        );
        Ok(())
    }

    #[test]
    fn map_address_prefers_the_primary_key() -> Result<(), serde_json::Error> {
        let record: AddressRecord = serde_json::from_str(r#"{"road": "Main Street", "street": "Other Street", "city": "", "town": "Springfield"}"#)?;

        let address = map_address(record);

        assert_eq!(address.road.as_deref(), Some("Main Street"));
        assert_eq!(address.city.as_deref(), Some("Springfield"));
        Ok(())
    }

    #[test]
    fn map_address_classifies_the_place() -> Result<(), serde_json::Error> {
        let record: AddressRecord = serde_json::from_str(r#"{"road": "Avenida Juárez", "amenity": "bank"}"#)?;

        assert_eq!(map_address(record).category, PlaceCategory::Bank);
        Ok(())
    }

    #[test]
    fn place_record_reads_the_point_and_address() -> Result<(), serde_json::Error> {
        let record: PlaceRecord = serde_json::from_str(r#"{"latitude": 19.4326, "longitude": -99.1332, "address": {"road": "Zócalo"}}"#)?;

        assert_eq!(record.point, GeoPoint::new(19.4326, -99.1332));
        assert_eq!(map_address(record.address).road.as_deref(), Some("Zócalo"));
        Ok(())
    }
}
