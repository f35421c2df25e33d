use crate::session::SessionSnapshot;
use crate::view;
use tokio::sync::watch::Receiver;
use tracing::{info, instrument, warn};

/// Reports what changed between consecutive session snapshots.
#[instrument(skip_all)]
pub async fn snapshot_listener(mut rx: Receiver<SessionSnapshot>) {
    let mut previous = rx.borrow().clone();
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        for change in changes(&previous, &snapshot) {
            info!("{}", change);
        }
        if snapshot.last_error.is_some() && snapshot.last_error != previous.last_error {
            warn!("🔴 {}", snapshot.last_error.as_deref().unwrap_or_default());
        }
        previous = snapshot;
    }
}

fn changes(previous: &SessionSnapshot, current: &SessionSnapshot) -> Vec<String> {
    let mut changes = Vec::new();

    if current.address != previous.address {
        if let Some(address) = &current.address {
            changes.push(format!("🏠 {} {}", address.flag(), address.simple_address()));
        }
    }

    if current.route != previous.route {
        if let Some(route) = &current.route {
            changes.push(format!("{} to {}", view::route_label(route), route.to));
        }
    }

    let target_address = |snapshot: &SessionSnapshot| snapshot.target.as_ref().and_then(|target| target.address.clone());
    if target_address(current) != target_address(previous) {
        if let Some(address) = target_address(current) {
            changes.push(format!("📍 Selected location: {} ({})", address.simple_address(), address.category.label()));
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, GeoPoint};
    use crate::geo::Route;
    use crate::session::Target;
    use pretty_assertions::assert_eq;

    #[test]
    fn changes_reports_a_new_route() {
        let previous = SessionSnapshot::default();
        let current = SessionSnapshot {
            route: Some(Route::between(GeoPoint::new(19.4326, -99.1332), GeoPoint::new(19.4426, -99.1332))),
            target: Some(Target::new(GeoPoint::new(19.4426, -99.1332))),
            ..Default::default()
        };

        assert_eq!(changes(&previous, &current), vec!["📏 1.11 km to 19.442600, -99.133200".to_string()]);
    }

    #[test]
    fn changes_reports_a_resolved_target_address() {
        let point = GeoPoint::new(19.4426, -99.1332);
        let previous = SessionSnapshot {
            target: Some(Target::new(point)),
            ..Default::default()
        };
        let current = SessionSnapshot {
            target: Some(Target {
                address: Some(Address {
                    road: Some("Zócalo".to_string()),
                    ..Default::default()
                }),
                ..Target::new(point)
            }),
            ..Default::default()
        };

        assert_eq!(
            changes(&previous, &current),
            vec!["📍 Selected location: Zócalo, City not specified, Country not specified (📍 General location)".to_string()]
        );
    }

    #[test]
    fn changes_is_empty_for_identical_snapshots() {
        let snapshot = SessionSnapshot::default();

        assert!(changes(&snapshot, &snapshot.clone()).is_empty());
    }
}
