use crate::domain::GeoPoint;
use crate::domain::events::{Event, Subject};
use crate::geocoding::{RegionLookup, ReverseGeocoder, resolve_address};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio::task::{self, JoinHandle};
use tracing::warn;

/// Resolves addresses in the background and reports them to the session.
#[derive(Clone)]
pub struct AddressLookup {
    geocoder: Arc<dyn ReverseGeocoder>,
    region_lookup: Arc<dyn RegionLookup>,
    tx: Sender<Event>,
}

impl AddressLookup {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>, region_lookup: Arc<dyn RegionLookup>, tx: Sender<Event>) -> Self {
        AddressLookup {
            geocoder,
            region_lookup,
            tx,
        }
    }

    /// Only the user's own location falls back to the region for its country, a selected point shows what the geocoder knows.
    pub fn spawn(&self, subject: Subject, point: GeoPoint) -> JoinHandle<()> {
        let lookup = self.clone();
        task::spawn(async move {
            let result = match subject {
                Subject::User => resolve_address(lookup.geocoder.as_ref(), lookup.region_lookup.as_ref(), point).await,
                Subject::Target => lookup.geocoder.reverse(point).await,
            };
            let event = match result {
                Ok(address) => Event::AddressResolved { subject, point, address },
                Err(e) => {
                    warn!(?subject, "⚠️ Could not resolve address for {}: {}", point, e);
                    Event::AddressFailed {
                        subject,
                        point,
                        reason: e.to_string(),
                    }
                }
            };
            // The session is gone when the application shuts down
            let _ = lookup.tx.send(event).await;
        })
    }
}
