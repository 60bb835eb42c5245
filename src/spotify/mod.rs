//! # Spotify Integration Module
//!
//! Interface to the parts of the Spotify Web API that Jukebox uses. The
//! module handles authorization, catalog queries, and playlist publishing and
//! keeps HTTP details away from the orchestration layer.
//!
//! ## Architecture
//!
//! ```text
//! Orchestration (journey, CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 authorization code)
//!     ├── Genres (available seed genres)
//!     ├── Recommendations (duration-sized track selection)
//!     └── Playlist Operations (create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Authorization-code flow: browser launch, loopback callback,
//!   and the back-channel code-for-token exchange (client secret in the form
//!   body, no PKCE)
//! - [`genres`] - Lists the seed genres accepted by the recommendation endpoint
//! - [`recommendations`] - Fetches up to 50 recommended tracks and keeps the
//!   shortest prefix that covers the travel time
//! - [`playlist`] - Creates a public playlist and appends track URIs
//!
//! ## Error Handling
//!
//! Every call returns `Result<_, JourneyError>`. Non-2xx answers become
//! `JourneyError::Api` with the response body as message. Nothing is retried
//! and no partial work is undone: a playlist created before a failing track
//! upload stays on the account.
//!
//! ## Tokens
//!
//! Tokens live in memory for a single run. There is no refresh and no
//! persistence; an expired token simply makes the remote calls fail.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization code exchange
//! - `GET /recommendations/available-genre-seeds` - Seed genres
//! - `GET /recommendations` - Track recommendations
//! - `POST /me/playlists` - Create playlist for the current user
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks

pub mod auth;
pub mod genres;
pub mod playlist;
pub mod recommendations;

use reqwest::{Client, Response};

use crate::{config::Settings, error::JourneyError};

const SERVICE: &str = "Spotify";

/// HTTP client bound to the Web API base URL.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.spotify_api_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{uri}/{path}", uri = self.api_url, path = path)
    }
}

async fn ensure_success(response: Response) -> Result<Response, JourneyError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(JourneyError::from_response(SERVICE, response).await)
    }
}
