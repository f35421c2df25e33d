use crate::domain::events::{Event, Subject};
use crate::domain::{Address, GeoPoint};
use crate::geo::Route;
use crate::session::snapshot::{HistoryEntry, SessionSnapshot, Target};
use chrono::Utc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

/// Owns the application state, which only changes through events.
#[derive(Debug)]
pub struct Session {
    state: SessionSnapshot,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<SessionSnapshot>,
    notifier_rx: WatchReceiver<SessionSnapshot>,
}

impl Session {
    pub fn new(rx: Receiver<Event>) -> Self {
        let state = SessionSnapshot::default();
        let (notifier_tx, notifier_rx) = watch::channel(state.clone());

        Session {
            state,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<SessionSnapshot> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            self.apply(event);
            self.notifier_tx.send(self.state.clone()).unwrap_or_default();
        }
        info!("🔵 Event channel closed, session ended");
    }

    fn apply(&mut self, event: Event) {
        let state = &mut self.state;
        match event {
            Event::LocationUpdated(position) => {
                let now = Utc::now();
                state.update_count += 1;
                state.record(HistoryEntry {
                    point: position.point,
                    timestamp: now,
                });
                info!(update = state.update_count, "🟢 Location updated to {}", position.point);

                state.position = Some(position);
                state.location_active = true;
                state.last_error = None;
                state.last_update = Some(now);
            }
            Event::LocationFailed(error) => {
                warn!("⚠️ Could not determine location: {}", error);
                state.location_active = false;
                state.last_error = Some(error.to_string());
            }
            Event::AddressResolved { subject, point, address } => self.resolve_address(subject, point, Ok(address)),
            Event::AddressFailed { subject, point, reason } => self.resolve_address(subject, point, Err(reason)),
            Event::PointSelected(point) => {
                state.route = state.current_point().map(|from| Route::between(from, point));
                match &state.route {
                    Some(route) => info!(distance = %route.distance, "📍 Selected {}", point),
                    None => info!("📍 Selected {}, own location still unknown", point),
                }
                state.target = Some(Target::new(point));
            }
            Event::TrackingChanged(tracking) => {
                info!(tracking, "🛰️ Tracking {}", if tracking { "started" } else { "stopped" });
                state.tracking = tracking;
            }
        }
    }

    fn resolve_address(&mut self, subject: Subject, point: GeoPoint, result: Result<Address, String>) {
        let state = &mut self.state;
        match subject {
            Subject::User => {
                if state.current_point() != Some(point) {
                    debug!("Discarding address for outdated location {}", point);
                    return;
                }
                state.address_active = result.is_ok();
                match result {
                    Ok(address) => {
                        state.address = Some(address);
                        state.address_error = None;
                    }
                    Err(reason) => {
                        state.address = None;
                        state.address_error = Some(reason);
                    }
                }
            }
            Subject::Target => {
                let Some(target) = state.target.as_mut().filter(|target| target.point == point) else {
                    debug!("Discarding address for deselected point {}", point);
                    return;
                };
                match result {
                    Ok(address) => target.address = Some(address),
                    Err(reason) => target.address_error = Some(reason),
                }
            }
        }
    }
}
