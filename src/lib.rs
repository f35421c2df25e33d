pub mod app_config;
pub mod console;
pub mod domain;
pub mod geo;
mod geo_point_deserializer;
pub mod geocoding;
pub mod location;
pub mod session;
pub mod share;
pub mod snapshot_listener;
pub mod view;
