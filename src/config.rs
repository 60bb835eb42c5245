//! Configuration management for Jukebox.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the local data directory (`jukebox/.env`)
//! 3. `.env` in the current working directory
//! 4. Built-in defaults for endpoints and the callback address
//!
//! The three secrets (Spotify client id and secret, Google Maps key) have no
//! default and must be supplied.

use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::{Res, error::JourneyError};

pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_GOOGLE_MAPS_API_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "user-read-email user-library-read user-read-recently-played user-top-read playlist-read-private playlist-read-collaborative playlist-modify-public";

/// Loads environment variables from `.env` files.
///
/// Creates the `jukebox` directory inside the platform local data directory if
/// needed, then reads `jukebox/.env` from it when present. A `.env` in the
/// working directory is read as well. Variables already set in the process
/// environment are never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/jukebox/.env`
/// - macOS: `~/Library/Application Support/jukebox/.env`
/// - Windows: `%LOCALAPPDATA%/jukebox/.env`
///
/// # Errors
///
/// Fails if the directory cannot be created or an existing `.env` file cannot
/// be parsed.
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    load_env_file(&path)?;
    load_env_file(Path::new(".env"))
}

/// Reads `path` into the process environment.
///
/// A missing file is skipped. Any other failure, such as a malformed line, is
/// returned.
pub fn load_env_file(path: &Path) -> Res<()> {
    match dotenv::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("jukebox/.env");
    path
}

/// Everything the application needs to reach Spotify and Google Maps.
#[derive(Debug, Clone)]
pub struct Settings {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_redirect_uri: String,
    pub spotify_scope: String,
    pub spotify_auth_url: String,
    pub spotify_token_url: String,
    pub spotify_api_url: String,
    pub google_maps_api_key: String,
    pub google_maps_api_url: String,
    pub server_addr: String,
}

impl Settings {
    /// Builds settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Config` naming the first required variable that
    /// is missing or blank.
    pub fn from_env() -> Result<Self, JourneyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, JourneyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| JourneyError::Config(format!("{key} must be set")))
        };
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            spotify_client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            google_maps_api_key: required("GOOGLE_MAPS_API_KEY")?,
            spotify_redirect_uri: or_default("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            spotify_scope: or_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            spotify_auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL),
            spotify_token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            spotify_api_url: trim_slash(or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)),
            google_maps_api_url: trim_slash(or_default(
                "GOOGLE_MAPS_API_URL",
                DEFAULT_GOOGLE_MAPS_API_URL,
            )),
            server_addr: or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
        })
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
