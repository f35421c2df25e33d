use crate::domain::GeoPoint;
use thiserror::Error;

pub fn share_link(maps_url: &str, point: &GeoPoint) -> String {
    format!("{}?q={},{}", maps_url, point.latitude, point.longitude)
}

/// Builds the text shared for the most recent location of the history.
pub fn share_text(maps_url: &str, history: &[GeoPoint]) -> Result<String, ShareError> {
    let last = history.last().ok_or(ShareError::NoLocation)?;
    Ok(format!("My current location: {}", share_link(maps_url, last)))
}

#[derive(Error, Debug, PartialEq)]
pub enum ShareError {
    #[error("no location available to share")]
    NoLocation,
}
