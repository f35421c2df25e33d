use crate::domain::{Address, Distance, GeoPoint};
use crate::geocoding::place_record::{PlaceRecord, map_address};
use crate::geocoding::{GeocodingError, ReverseGeocoder};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument};

#[derive(Clone, Debug)]
struct Place {
    point: GeoPoint,
    address: Address,
}

/// An offline reverse geocoder answering with the nearest known place.
#[derive(Debug)]
pub struct Gazetteer {
    places: Vec<Place>,
    max_distance: Distance,
}

impl Gazetteer {
    pub fn new(max_distance: Distance) -> Self {
        Gazetteer {
            places: Vec::new(),
            max_distance,
        }
    }

    /// Loads places from a newline delimited JSON file, blank lines are skipped.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>, max_distance: Distance) -> Result<Self, GeocodingError> {
        info!("🗺️ Loading places...");
        let file = File::open(path.as_ref()).await?;
        let mut lines = LinesStream::new(BufReader::new(file).lines());

        let mut gazetteer = Gazetteer::new(max_distance);
        let mut line_number = 0;
        while let Some(line) = lines.next().await {
            line_number += 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let record: PlaceRecord = serde_json::from_str(&line).map_err(|source| GeocodingError::Parse {
                line: line_number,
                source,
            })?;
            gazetteer.insert(record.point, map_address(record.address));
        }

        info!("🗺️ Loading places... OK, {} loaded", gazetteer.len());
        Ok(gazetteer)
    }

    pub fn insert(&mut self, point: GeoPoint, address: Address) {
        self.places.push(Place { point, address });
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn nearest(&self, point: &GeoPoint) -> Option<(&Place, Distance)> {
        self.places
            .iter()
            .map(|place| (place, place.point.distance_to(point)))
            .filter(|(_, distance)| *distance <= self.max_distance)
            .min_by(|(_, a), (_, b)| a.kilometers().total_cmp(&b.kilometers()))
    }
}

#[async_trait]
impl ReverseGeocoder for Gazetteer {
    async fn reverse(&self, point: GeoPoint) -> Result<Address, GeocodingError> {
        let (place, distance) = self.nearest(&point).ok_or(GeocodingError::NotFound { point })?;
        debug!(distance = %distance, "Resolved {} to '{}'", point, place.address.simple_address());
        Ok(place.address.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlaceCategory;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use test_log::test;

    fn places_path(name: &str) -> PathBuf {
        PathBuf::from(format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), name))
    }

    fn named(road: &str) -> Address {
        Address {
            road: Some(road.to_string()),
            ..Default::default()
        }
    }

    #[test(tokio::test)]
    async fn reverse_returns_the_nearest_place() -> Result<(), GeocodingError> {
        let mut gazetteer = Gazetteer::new(Distance::from_kilometers(5.0));
        gazetteer.insert(GeoPoint::new(19.4326, -99.1332), named("Zócalo"));
        gazetteer.insert(GeoPoint::new(19.4204, -99.1819), named("Bosque de Chapultepec"));

        let address = gazetteer.reverse(GeoPoint::new(19.4300, -99.1400)).await?;

        assert_eq!(address.road.as_deref(), Some("Zócalo"));
        Ok(())
    }

    #[test(tokio::test)]
    async fn reverse_on_an_empty_gazetteer_returns_not_found() {
        let gazetteer = Gazetteer::new(Distance::from_kilometers(5.0));

        assert!(gazetteer.is_empty());
        assert!(matches!(gazetteer.reverse(GeoPoint::new(0.0, 0.0)).await, Err(GeocodingError::NotFound { .. })));
    }

    #[test(tokio::test)]
    async fn reverse_returns_not_found_beyond_the_maximum_distance() {
        let mut gazetteer = Gazetteer::new(Distance::from_kilometers(1.0));
        gazetteer.insert(GeoPoint::new(19.4326, -99.1332), named("Zócalo"));

        let result = gazetteer.reverse(GeoPoint::new(19.5326, -99.1332)).await;

        assert!(matches!(result, Err(GeocodingError::NotFound { .. })));
    }

    #[test(tokio::test)]
    async fn load_reads_all_places() -> Result<(), GeocodingError> {
        let gazetteer = Gazetteer::load(places_path("places.ndjson"), Distance::from_kilometers(2.0)).await?;

        assert_eq!(gazetteer.len(), 3);
        assert!(!gazetteer.is_empty());

        let address = gazetteer.reverse(GeoPoint::new(19.4327, -99.1333)).await?;
        assert_eq!(address.simple_address(), "Plaza de la Constitución, Ciudad de México, México");
        assert_eq!(address.category, PlaceCategory::Recreational);
        Ok(())
    }

    #[test(tokio::test)]
    async fn load_reports_the_line_of_an_invalid_place() {
        let result = Gazetteer::load(places_path("invalid_places.ndjson"), Distance::from_kilometers(2.0)).await;

        assert!(matches!(result, Err(GeocodingError::Parse { line: 2, .. })), "found {:?}", result);
    }

    #[test(tokio::test)]
    async fn load_fails_for_a_missing_file() {
        let result = Gazetteer::load(places_path("missing.ndjson"), Distance::from_kilometers(2.0)).await;

        assert!(matches!(result, Err(GeocodingError::Io(_))));
    }
}
