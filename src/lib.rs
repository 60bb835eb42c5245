//! Jukebox: curate your journey.
//!
//! Library behind the `jukebox` command. It resolves a destination with
//! Google Maps, estimates the travel time, authorizes against Spotify, and
//! builds a public playlist just long enough to last the trip.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `cli` - Command handlers behind the binary's subcommands
//! - `config` - `.env` loading and [`config::Settings`]
//! - `error` - The [`error::JourneyError`] taxonomy
//! - `genres` - Set-like genre selection
//! - `journey` - Orchestration of the trip-to-playlist workflow
//! - `location` - Where the trip starts
//! - `maps` - Google Maps geocoding and directions client
//! - `server` - Local HTTP server for OAuth callbacks
//! - `session` - Immutable session state and the authorization state machine
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and wire types
//! - `utils` - Track accumulation and formatting helpers
//!
//! # Example
//!
//! ```
//! use jukebox::{config, journey::Journey, maps::MapsClient, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> jukebox::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     let journey = Journey::new(
//!         MapsClient::from_settings(&settings),
//!         SpotifyClient::from_settings(&settings),
//!     );
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod genres;
pub mod journey;
pub mod location;
pub mod maps;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed error alias for setup code (configuration loading, `main`).
///
/// Workflow code returns [`error::JourneyError`] instead so callers can tell
/// failure classes apart.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// ```
/// info!("Destination resolved to {}", destination);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green checkmark.
///
/// ```
/// success!("Added {} tracks", tracks.len());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only the command layer uses this; library code returns errors instead.
///
/// ```
/// error!("Authentication failed: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr and carries on.
///
/// ```
/// warning!("No location found for '{}'", address);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
