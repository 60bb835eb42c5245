//! # CLI Module
//!
//! Command handlers behind the `jukebox` binary. Each handler is one explicit
//! user action: it builds the clients from [`Settings`], runs the steps it
//! needs in order, and reports the outcome on the console.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the Spotify authorization once to check credentials
//! - [`genres`] - Lists the seed genres Spotify accepts
//! - [`route`] - Geocodes a destination and prints the travel time, no Spotify
//!   access needed
//! - [`trip`] - The full workflow: origin, authorization, destination, genres,
//!   playlist
//!
//! ## Error Handling
//!
//! Handlers follow a log-and-stop policy. Library calls return
//! [`crate::error::JourneyError`]; handlers turn fatal ones into `error!`
//! (which exits with status 1) and soft ones into `warning!`. Nothing is
//! retried.
//!
//! ## Origin
//!
//! The trip starts at `--origin lat,lng` or `--origin-address text`. Passing
//! neither is handled like a denied location permission.

mod auth;
mod genres;
mod route;
mod trip;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::auth;
pub use genres::genres;
pub use route::route;
pub use trip::trip;

use crate::{
    config::Settings,
    location::{AddressLocation, FixedLocation, LocationProvider, NoLocation},
    maps::MapsClient,
    types::Coordinate,
};

/// Where the user said the trip starts.
#[derive(Debug, Clone, Default)]
pub struct Origin {
    pub coordinate: Option<Coordinate>,
    pub address: Option<String>,
}

fn location_provider(maps: &MapsClient, origin: Origin) -> Box<dyn LocationProvider> {
    match (origin.coordinate, origin.address) {
        (Some(coordinate), _) => Box::new(FixedLocation::new(coordinate)),
        (None, Some(address)) => Box::new(AddressLocation::new(maps.clone(), address)),
        (None, None) => Box::new(NoLocation),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

fn load_settings() -> Settings {
    match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => crate::error!("{}\nSee .env.example in the jukebox data directory.", e),
    }
}
