//! Session state threaded through a trip-to-playlist run.
//!
//! `SessionState` is a plain value. Every step takes the current state and
//! returns a new one, which keeps the authorization state machine and the
//! orchestration order testable without a terminal or a browser.

use crate::{
    error::JourneyError,
    genres::GenreSelection,
    types::{AuthToken, Coordinate, TravelEstimate},
};

/// Authorization progress. Only moves forward; there is no refresh and no way
/// back to `Unauthenticated` short of starting a new process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    AuthorizationRequested,
    TokenExchangePending,
    Authenticated,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current_position: Option<Coordinate>,
    destination: Option<Coordinate>,
    auth: AuthState,
    token: Option<AuthToken>,
    genres: GenreSelection,
    travel_time: Option<TravelEstimate>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_position(&self) -> Option<Coordinate> {
        self.current_position
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthState::Authenticated && self.token.is_some()
    }

    /// The bearer token, or `Unauthenticated` if the flow never completed.
    pub fn token(&self) -> Result<&AuthToken, JourneyError> {
        match (&self.auth, &self.token) {
            (AuthState::Authenticated, Some(token)) => Ok(token),
            _ => Err(JourneyError::Unauthenticated),
        }
    }

    pub fn genres(&self) -> &GenreSelection {
        &self.genres
    }

    pub fn travel_time(&self) -> Option<TravelEstimate> {
        self.travel_time
    }

    pub fn with_position(self, position: Coordinate) -> Self {
        Self {
            current_position: Some(position),
            ..self
        }
    }

    pub fn with_destination(self, destination: Coordinate) -> Self {
        Self {
            destination: Some(destination),
            ..self
        }
    }

    pub fn with_genres(self, genres: GenreSelection) -> Self {
        Self { genres, ..self }
    }

    pub fn with_travel_time(self, travel_time: TravelEstimate) -> Self {
        Self {
            travel_time: Some(travel_time),
            ..self
        }
    }

    pub fn request_authorization(self) -> Result<Self, JourneyError> {
        self.transition(AuthState::Unauthenticated, AuthState::AuthorizationRequested)
    }

    pub fn begin_token_exchange(self) -> Result<Self, JourneyError> {
        self.transition(
            AuthState::AuthorizationRequested,
            AuthState::TokenExchangePending,
        )
    }

    pub fn authenticated(self, token: AuthToken) -> Result<Self, JourneyError> {
        let next = self.transition(AuthState::TokenExchangePending, AuthState::Authenticated)?;
        Ok(Self {
            token: Some(token),
            ..next
        })
    }

    fn transition(self, expected: AuthState, to: AuthState) -> Result<Self, JourneyError> {
        if self.auth != expected {
            return Err(JourneyError::InvalidTransition {
                from: self.auth,
                to,
            });
        }
        Ok(Self { auth: to, ..self })
    }
}
