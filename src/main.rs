use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;
use waypoint::app_config::AppConfig;
use waypoint::console;
use waypoint::domain::events::Event;
use waypoint::geocoding::{FixedRegion, Gazetteer};
use waypoint::location::{FixedLocationSource, LocationSource, TrackFileSource};
use waypoint::session::{AddressLookup, Controller, Session};
use waypoint::snapshot_listener::snapshot_listener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let source: Arc<dyn LocationSource> = match config.location().track_file() {
        Some(path) => Arc::new(TrackFileSource::load(path).await?),
        None => Arc::new(FixedLocationSource::new(config.location().start(), config.location().accuracy_m())),
    };
    info!("✅  Initialized location source");

    let gazetteer = Gazetteer::load(config.geocoding().places_file(), config.geocoding().max_distance()).await?;
    let region = FixedRegion::new(config.geocoding().region());
    info!("✅  Initialized geocoder");

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let mut session = Session::new(rx);
    let notifier_rx = session.notifier();

    let listener_rx = notifier_rx.clone();
    task::spawn(async move {
        snapshot_listener(listener_rx).await;
    });
    info!("✅  Initialized snapshot listener");

    task::spawn(async move {
        session.listen().await;
    });
    info!("✅  Initialized session");

    let lookup = AddressLookup::new(Arc::new(gazetteer), Arc::new(region), tx.clone());
    let mut controller = Controller::new(&config, source, lookup, tx);
    controller.locate().await?;

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    console::run(&mut controller, notifier_rx).await?;

    Ok(())
}
