use crate::domain::{Address, Position};
use crate::geo::Route;
use crate::session::{SessionSnapshot, Target};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

const NOT_AVAILABLE: &str = "N/A";

pub type Row = (&'static str, String);

pub fn position_rows(position: &Position) -> Vec<Row> {
    vec![
        ("Latitude", format!("{:.6}°", position.point.latitude)),
        ("Longitude", format!("{:.6}°", position.point.longitude)),
        (
            "Accuracy",
            position
                .accuracy_m
                .map_or(NOT_AVAILABLE.to_string(), |accuracy| format!("{:.0} m", accuracy)),
        ),
        (
            "Speed",
            position
                .speed_kmh()
                .map_or(NOT_AVAILABLE.to_string(), |speed| format!("{:.1} km/h", speed)),
        ),
        (
            "Heading",
            position
                .heading_deg
                .map_or(NOT_AVAILABLE.to_string(), |heading| format!("{:.0}°", heading)),
        ),
        ("Time", local_time(&position.timestamp)),
    ]
}

/// The simple address first, then every optional detail that is known.
pub fn address_rows(address: &Address) -> Vec<Row> {
    let mut rows = vec![("Address", address.simple_address())];
    let details = [
        ("Neighbourhood", &address.neighbourhood),
        ("County", &address.county),
        ("State", &address.state),
        ("Postcode", &address.postcode),
    ];
    rows.extend(
        details
            .into_iter()
            .filter_map(|(label, value)| value.as_ref().map(|value| (label, value.clone()))),
    );
    rows.push(("Place type", address.category.label().to_string()));
    rows
}

pub fn target_rows(target: &Target) -> Vec<Row> {
    let mut rows = Vec::with_capacity(3);
    match &target.address {
        Some(address) => rows.push(("Address", address.simple_address())),
        None if target.address_error.is_some() => rows.push(("Address", "No detailed information available".to_string())),
        None => rows.push(("Address", "Resolving...".to_string())),
    }
    rows.push(("Coordinates", target.point.to_string()));
    if let Some(address) = &target.address {
        rows.push(("Place type", address.category.label().to_string()));
    }
    rows
}

pub fn stats_rows(snapshot: &SessionSnapshot) -> Vec<Row> {
    let accuracy = snapshot
        .position
        .as_ref()
        .and_then(|position| position.accuracy_m)
        .map_or("--".to_string(), |accuracy| format!("{:.0}", accuracy));

    vec![
        ("Accuracy", accuracy),
        ("Updates", snapshot.update_count.to_string()),
        ("Last update", snapshot.last_update.as_ref().map_or("--".to_string(), local_time)),
        ("Country", snapshot.address.as_ref().map_or("🌍".to_string(), Address::flag)),
    ]
}

pub fn route_label(route: &Route) -> String {
    format!("📏 {}", route.distance)
}

/// Renders the whole session as text panels.
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut output = String::new();

    let location_title = format!("Location {}", status_dot(snapshot.location_active));
    match (&snapshot.position, &snapshot.last_error) {
        (_, Some(error)) => write_panel(&mut output, &location_title, &[("Error", error.clone())]),
        (Some(position), None) => write_panel(&mut output, &location_title, &position_rows(position)),
        (None, None) => write_panel(&mut output, &location_title, &[("Status", "Waiting for location...".to_string())]),
    }

    let address_title = format!("Address {}", status_dot(snapshot.address_active));
    match (&snapshot.address, &snapshot.address_error) {
        (Some(address), _) => write_panel(&mut output, &address_title, &address_rows(address)),
        (None, Some(error)) => write_panel(&mut output, &address_title, &[("Error", error.clone())]),
        (None, None) => write_panel(&mut output, &address_title, &[("Status", "Resolving address...".to_string())]),
    }

    write_panel(&mut output, "Statistics", &stats_rows(snapshot));

    if let Some(target) = &snapshot.target {
        let mut rows = target_rows(target);
        if let Some(route) = &snapshot.route {
            rows.push(("Distance", route_label(route)));
        }
        write_panel(&mut output, "Selected location", &rows);
    }

    let tracking = if snapshot.tracking { "on" } else { "off" };
    write_panel(&mut output, "Tracking", &[("Live tracking", tracking.to_string())]);

    output
}

fn write_panel(output: &mut String, title: &str, rows: &[Row]) {
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    // Writing to a String cannot fail
    let _ = writeln!(output, "── {} ──", title);
    for (label, value) in rows {
        let _ = writeln!(output, "  {:<width$}  {}", format!("{}:", label), value, width = width + 1);
    }
}

fn status_dot(active: bool) -> &'static str {
    if active { "🟢" } else { "🔴" }
}

fn local_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}
