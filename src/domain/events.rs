use crate::domain::{Address, GeoPoint, Position};
use crate::location::LocationError;

/// The point an address lookup was made for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Subject {
    User,
    Target,
}

#[derive(Debug)]
pub enum Event {
    LocationUpdated(Position),
    LocationFailed(LocationError),
    AddressResolved { subject: Subject, point: GeoPoint, address: Address },
    AddressFailed { subject: Subject, point: GeoPoint, reason: String },
    PointSelected(GeoPoint),
    TrackingChanged(bool),
}
