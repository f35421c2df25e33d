pub mod haversine;
mod route;

pub use route::{Bounds, Route};
