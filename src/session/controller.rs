use crate::app_config::AppConfig;
use crate::domain::GeoPoint;
use crate::domain::events::{Event, Subject};
use crate::location::{LocationSource, acquire};
use crate::session::address_lookup::AddressLookup;
use crate::session::snapshot::SessionSnapshot;
use crate::session::tracker::Tracker;
use crate::share::{ShareError, share_text};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::Sender;
use tracing::instrument;

/// Turns user commands into location requests and session events.
pub struct Controller {
    source: Arc<dyn LocationSource>,
    lookup: AddressLookup,
    tx: Sender<Event>,
    locate_timeout: Duration,
    tracking_interval: Duration,
    tracking_timeout: Duration,
    maps_url: String,
    tracker: Option<Tracker>,
}

impl Controller {
    pub fn new(config: &AppConfig, source: Arc<dyn LocationSource>, lookup: AddressLookup, tx: Sender<Event>) -> Self {
        Controller {
            source,
            lookup,
            tx,
            locate_timeout: config.location().locate_timeout(),
            tracking_interval: config.tracking().interval(),
            tracking_timeout: config.tracking().timeout(),
            maps_url: config.share().maps_url().to_string(),
            tracker: None,
        }
    }

    /// Requests the current position once and resolves its address.
    #[instrument(skip(self))]
    pub async fn locate(&self) -> Result<(), ControllerError> {
        match acquire(self.source.as_ref(), self.locate_timeout).await {
            Ok(position) => {
                let point = position.point;
                self.send(Event::LocationUpdated(position)).await?;
                self.lookup.spawn(Subject::User, point);
            }
            Err(e) => self.send(Event::LocationFailed(e)).await?,
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn select(&self, point: GeoPoint) -> Result<(), ControllerError> {
        self.send(Event::PointSelected(point)).await?;
        self.lookup.spawn(Subject::Target, point);
        Ok(())
    }

    /// Starts tracking when stopped and the other way around, returns whether tracking is now on.
    #[instrument(skip(self))]
    pub async fn toggle_tracking(&mut self) -> Result<bool, ControllerError> {
        let tracking = match self.tracker.take() {
            Some(tracker) => {
                tracker.stop();
                false
            }
            None => {
                self.tracker = Some(Tracker::start(
                    self.source.clone(),
                    self.lookup.clone(),
                    self.tx.clone(),
                    self.tracking_interval,
                    self.tracking_timeout,
                ));
                true
            }
        };
        self.send(Event::TrackingChanged(tracking)).await?;
        Ok(tracking)
    }

    pub fn share(&self, snapshot: &SessionSnapshot) -> Result<String, ShareError> {
        share_text(&self.maps_url, &snapshot.history_points())
    }

    pub fn shutdown(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            tracker.stop();
        }
    }

    async fn send(&self, event: Event) -> Result<(), ControllerError> {
        self.tx.send(event).await.map_err(|_| ControllerError::SessionClosed)
    }
}

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("the session is no longer running")]
    SessionClosed,
}
