use thiserror::Error;

use crate::session::AuthState;

/// Every way a trip-to-playlist run can stop.
///
/// Failures are never retried. The CLI logs them and ends the run, so the
/// variants mostly exist to keep the messages precise and to let tests tell
/// the failure classes apart.
#[derive(Debug, Error)]
pub enum JourneyError {
    #[error("Permission to access location was denied")]
    PermissionDenied,

    #[error("Current position is unavailable: {0}")]
    LocationUnavailable(String),

    #[error("No destination has been resolved yet")]
    MissingDestination,

    #[error("Current position is not known")]
    MissingPosition,

    #[error("No routes found (directions status: {status})")]
    NoRouteFound { status: String },

    #[error("Not authenticated with Spotify, run the authorization first")]
    Unauthenticated,

    #[error("Authorization was denied: {0}")]
    AuthDenied(String),

    #[error("Authorization timed out while waiting for the browser callback")]
    AuthTimeout,

    #[error("Authorization callback carried an unexpected state value")]
    StateMismatch,

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("Cannot move session from {from:?} to {to:?}")]
    InvalidTransition { from: AuthState, to: AuthState },

    #[error("No songs matched the selected genres")]
    NoSongs,

    #[error("Playlist {playlist_id} was created but tracks could not be added: {source}")]
    PartialPublish {
        playlist_id: String,
        #[source]
        source: Box<JourneyError>,
    },

    #[error("{service} API error: {status} {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid coordinate '{0}', expected 'lat,lng'")]
    InvalidCoordinate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Callback server failed: {0}")]
    Server(String),
}

impl JourneyError {
    /// Reads a non-2xx response into an `Api` error, keeping the body text.
    pub(crate) async fn from_response(service: &'static str, response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            body
        };

        JourneyError::Api {
            service,
            status: status.as_u16(),
            message,
        }
    }
}
