mod address;
mod distance;
pub mod events;
mod geo_point;
mod place_category;
mod position;

pub use address::{Address, Region, flag_emoji};
pub use distance::Distance;
pub use geo_point::{GeoPoint, InvalidGeoPoint};
pub use place_category::{PlaceCategory, PlaceTags};
pub use position::Position;
