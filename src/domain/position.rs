use crate::domain::GeoPoint;
use chrono::{DateTime, Utc};

/// A single location fix as reported by a location source.
#[derive(Clone, PartialEq, Debug)]
pub struct Position {
    pub point: GeoPoint,
    pub accuracy_m: Option<f64>,
    pub speed_mps: Option<f64>,
    pub heading_deg: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    pub fn new(point: GeoPoint, timestamp: DateTime<Utc>) -> Self {
        Position {
            point,
            accuracy_m: None,
            speed_mps: None,
            heading_deg: None,
            timestamp,
        }
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    /// Speed in km/h, `None` when the source reported no speed or a standstill.
    pub fn speed_kmh(&self) -> Option<f64> {
        self.speed_mps.filter(|speed| *speed != 0.0).map(|speed| speed * 3.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(0.0), None)]
    #[case(Some(10.0), Some(36.0))]
    fn speed_kmh_converts_meters_per_second(#[case] speed_mps: Option<f64>, #[case] expected: Option<f64>) {
        let position = Position {
            speed_mps,
            ..Position::new(GeoPoint::new(0.0, 0.0), Utc::now())
        };

        assert_eq!(position.speed_kmh(), expected);
    }
}
