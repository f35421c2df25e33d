mod address_lookup;
mod controller;
mod session;
mod snapshot;
mod tracker;

pub use address_lookup::AddressLookup;
pub use controller::{Controller, ControllerError};
pub use session::Session;
pub use snapshot::{HistoryEntry, SessionSnapshot, Target};
