use crate::domain::{Distance, GeoPoint, Region};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    location: Location,
    tracking: Tracking,
    geocoding: Geocoding,
    share: Share,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn tracking(&self) -> &Tracking {
        &self.tracking
    }

    pub fn geocoding(&self) -> &Geocoding {
        &self.geocoding
    }

    pub fn share(&self) -> &Share {
        &self.share
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Location {
    start: GeoPoint,
    accuracy_m: f64,
    track_file: Option<String>,
    #[serde(with = "humantime_serde")]
    locate_timeout: Duration,
}

impl Location {
    /// The point reported when no track file is configured.
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn accuracy_m(&self) -> f64 {
        self.accuracy_m
    }

    pub fn track_file(&self) -> Option<&str> {
        self.track_file.as_deref()
    }

    pub fn locate_timeout(&self) -> Duration {
        self.locate_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracking {
    #[serde(with = "humantime_serde")]
    interval: Duration,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Tracking {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoding {
    places_file: String,
    max_distance_km: f64,
    country: Option<String>,
    country_code: Option<String>,
}

impl Geocoding {
    pub fn places_file(&self) -> &str {
        &self.places_file
    }

    pub fn max_distance(&self) -> Distance {
        Distance::from_kilometers(self.max_distance_km)
    }

    /// The region used when an address lacks its country.
    pub fn region(&self) -> Region {
        Region {
            country: self.country.clone(),
            country_code: self.country_code.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Share {
    maps_url: String,
}

impl Share {
    pub fn maps_url(&self) -> &str {
        &self.maps_url
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { event_buffer_size: 16 },
                location: Location {
                    start: GeoPoint::new(19.4326, -99.1332),
                    accuracy_m: 25.0,
                    track_file: None,
                    locate_timeout: Duration::from_secs(10),
                },
                tracking: Tracking {
                    interval: Duration::from_secs(5),
                    timeout: Duration::from_secs(5),
                },
                geocoding: Geocoding {
                    places_file: "places.ndjson".to_string(),
                    max_distance_km: 2.0,
                    country: Some("México".to_string()),
                    country_code: Some("mx".to_string()),
                },
                share: Share {
                    maps_url: "https://www.google.com/maps".to_string(),
                },
            },
        }
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
