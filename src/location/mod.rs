mod fixed;
mod track_file;

use crate::domain::Position;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, instrument};

pub use fixed::FixedLocationSource;
pub use track_file::TrackFileSource;

/// Provides the current position of the user.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_position(&self) -> Result<Position, LocationError>;
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location information unavailable")]
    PositionUnavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("unknown location error: {0}")]
    Unknown(String),
}

/// Requests the current position, giving up after `max_wait`.
#[instrument(skip(source))]
pub async fn acquire(source: &dyn LocationSource, max_wait: Duration) -> Result<Position, LocationError> {
    let position = timeout(max_wait, source.current_position())
        .await
        .map_err(|_| LocationError::Timeout)??;
    debug!(accuracy_m = ?position.accuracy_m, "📡 Acquired position {}", position.point);
    Ok(position)
}
