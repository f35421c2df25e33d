use crate::domain::{GeoPoint, Position};
use crate::location::{LocationError, LocationSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
struct FixRecord {
    #[serde(flatten)]
    point: GeoPoint,
    accuracy_m: Option<f64>,
    speed_mps: Option<f64>,
    heading_deg: Option<f64>,
    timestamp: Option<DateTime<Utc>>,
}

/// Replays a recorded track, one fix per request, starting over after the last fix.
#[derive(Debug)]
pub struct TrackFileSource {
    fixes: Vec<FixRecord>,
    next: AtomicUsize,
}

impl TrackFileSource {
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, TrackFileError> {
        info!("🛰️ Loading track...");
        let file = File::open(path.as_ref()).await?;
        let mut lines = LinesStream::new(BufReader::new(file).lines());

        let mut fixes = Vec::new();
        let mut line_number = 0;
        while let Some(line) = lines.next().await {
            line_number += 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fix = serde_json::from_str(&line).map_err(|source| TrackFileError::Parse {
                line: line_number,
                source,
            })?;
            fixes.push(fix);
        }

        info!("🛰️ Loading track... OK, {} fixes", fixes.len());
        Ok(TrackFileSource {
            fixes,
            next: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl LocationSource for TrackFileSource {
    async fn current_position(&self) -> Result<Position, LocationError> {
        if self.fixes.is_empty() {
            return Err(LocationError::PositionUnavailable);
        }

        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.fixes.len();
        let fix = &self.fixes[index];
        Ok(Position {
            point: fix.point,
            accuracy_m: fix.accuracy_m,
            speed_mps: fix.speed_mps,
            heading_deg: fix.heading_deg,
            timestamp: fix.timestamp.unwrap_or_else(Utc::now),
        })
    }
}

#[derive(Error, Debug)]
pub enum TrackFileError {
    #[error("could not read track: {0}")]
    Io(#[from] io::Error),
    #[error("invalid fix on line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
}
