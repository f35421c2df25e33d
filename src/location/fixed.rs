use crate::domain::{GeoPoint, Position};
use crate::location::{LocationError, LocationSource};
use async_trait::async_trait;
use chrono::Utc;

/// A location source that always reports the same point.
#[derive(Clone, Debug)]
pub struct FixedLocationSource {
    point: GeoPoint,
    accuracy_m: f64,
}

impl FixedLocationSource {
    pub fn new(point: GeoPoint, accuracy_m: f64) -> Self {
        FixedLocationSource { point, accuracy_m }
    }
}

#[async_trait]
impl LocationSource for FixedLocationSource {
    async fn current_position(&self) -> Result<Position, LocationError> {
        Ok(Position::new(self.point, Utc::now()).with_accuracy(self.accuracy_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn current_position_returns_the_configured_point() -> Result<(), LocationError> {
        let source = FixedLocationSource::new(GeoPoint::new(19.4326, -99.1332), 25.0);

        let position = source.current_position().await?;

        assert_eq!(position.point, GeoPoint::new(19.4326, -99.1332));
        assert_eq!(position.accuracy_m, Some(25.0));
        Ok(())
    }
}
