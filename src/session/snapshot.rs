use crate::domain::{Address, GeoPoint, Position};
use crate::geo::Route;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Number of fixes kept in the history, older fixes are dropped first.
pub const HISTORY_LIMIT: usize = 100;

/// A point the user selected, with its address once resolved.
#[derive(Clone, PartialEq, Debug)]
pub struct Target {
    pub point: GeoPoint,
    pub address: Option<Address>,
    pub address_error: Option<String>,
}

impl Target {
    pub fn new(point: GeoPoint) -> Self {
        Target {
            point,
            address: None,
            address_error: None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct HistoryEntry {
    pub point: GeoPoint,
    pub timestamp: DateTime<Utc>,
}

/// Everything the session knows, published after every change.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct SessionSnapshot {
    pub position: Option<Position>,
    pub location_active: bool,
    pub last_error: Option<String>,
    pub address: Option<Address>,
    pub address_active: bool,
    pub address_error: Option<String>,
    pub tracking: bool,
    pub update_count: u64,
    pub last_update: Option<DateTime<Utc>>,
    pub history: VecDeque<HistoryEntry>,
    pub target: Option<Target>,
    pub route: Option<Route>,
}

impl SessionSnapshot {
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(entry);
    }

    pub fn history_points(&self) -> Vec<GeoPoint> {
        self.history.iter().map(|entry| entry.point).collect()
    }

    pub fn current_point(&self) -> Option<GeoPoint> {
        self.position.as_ref().map(|position| position.point)
    }
}
