use crate::domain::{GeoPoint, InvalidGeoPoint};
use crate::session::{Controller, ControllerError, SessionSnapshot};
use crate::view;
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::watch::Receiver;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, instrument, warn};

pub const HELP: &str = "\
Commands:
  locate               request the current location once
  select <lat> <lng>   select a point and show the distance to it (alias: click)
  track                start or stop live tracking
  share                print a link to the latest location
  status               show the current session
  help                 show this help
  quit                 exit";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    Locate,
    Select(GeoPoint),
    Track,
    Share,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match name.to_lowercase().as_str() {
            "locate" => Command::Locate,
            "select" | "click" => {
                let latitude = words.next().ok_or(CommandError::MissingCoordinates)?.parse::<f64>()?;
                let longitude = words.next().ok_or(CommandError::MissingCoordinates)?.parse::<f64>()?;
                Command::Select(GeoPoint::try_new(latitude, longitude)?)
            }
            "track" => Command::Track,
            "share" => Command::Share,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    Unknown(String),
    #[error("expected a latitude and a longitude")]
    MissingCoordinates,
    #[error("invalid coordinate: {0}")]
    InvalidNumber(#[from] ParseFloatError),
    #[error(transparent)]
    InvalidPoint(#[from] InvalidGeoPoint),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Reads commands from stdin until `quit` or the end of input.
#[instrument(skip_all)]
pub async fn run(controller: &mut Controller, snapshots: Receiver<SessionSnapshot>) -> Result<(), ControllerError> {
    println!("{}", HELP);
    let mut lines = LinesStream::new(BufReader::new(io::stdin()).lines());

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("⚠️ Could not read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Locate => controller.locate().await?,
            Command::Select(point) => controller.select(point).await?,
            Command::Track => {
                let tracking = controller.toggle_tracking().await?;
                println!("Live tracking {}", if tracking { "started" } else { "stopped" });
            }
            Command::Share => match controller.share(&snapshots.borrow()) {
                Ok(text) => println!("{}", text),
                Err(e) => println!("{}", e),
            },
            Command::Status => print!("{}", view::render(&snapshots.borrow())),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    controller.shutdown();
    info!("👋 Console closed");
    Ok(())
}
