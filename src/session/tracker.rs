use crate::domain::events::{Event, Subject};
use crate::location::{LocationSource, acquire};
use crate::session::address_lookup::AddressLookup;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::{self, JoinHandle};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

/// Polls a location source on a fixed interval until stopped.
#[derive(Debug)]
pub struct Tracker {
    handle: JoinHandle<()>,
}

impl Tracker {
    pub fn start(source: Arc<dyn LocationSource>, lookup: AddressLookup, tx: Sender<Event>, interval: Duration, max_wait: Duration) -> Self {
        info!(interval = ?interval, "🛰️ Starting tracker...");
        let handle = task::spawn(async move {
            let mut ticks = time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;
                let event = match acquire(source.as_ref(), max_wait).await {
                    Ok(position) => {
                        let point = position.point;
                        if tx.send(Event::LocationUpdated(position)).await.is_err() {
                            break;
                        }
                        lookup.spawn(Subject::User, point);
                        continue;
                    }
                    Err(e) => Event::LocationFailed(e),
                };
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            debug!("🛰️ Tracker stopped, session closed");
        });

        Tracker { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
        info!("🛰️ Tracker stopped");
    }
}
