//! Trip-to-playlist orchestration.
//!
//! Each command takes the current [`SessionState`] and returns the next one.
//! Steps run strictly one after the other and the first failure ends the run;
//! nothing is retried and nothing already done on the remote side is undone.

use crate::{
    error::JourneyError,
    info,
    maps::MapsClient,
    session::SessionState,
    spotify::SpotifyClient,
    types::{Coordinate, PublishedPlaylist},
    utils, warning,
};

pub struct Journey {
    maps: MapsClient,
    spotify: SpotifyClient,
}

impl Journey {
    pub fn new(maps: MapsClient, spotify: SpotifyClient) -> Self {
        Self { maps, spotify }
    }

    /// Geocodes `address` and stores the first match as destination.
    ///
    /// When nothing matches the session comes back unchanged, so a previously
    /// resolved destination stays in place and an unset one stays unset.
    pub async fn submit_destination(
        &self,
        session: SessionState,
        address: &str,
    ) -> Result<SessionState, JourneyError> {
        match self.maps.geocode(address).await? {
            Some(destination) => {
                info!("Destination resolved to {}", destination);
                Ok(session.with_destination(destination))
            }
            None => {
                warning!("No location found for '{}'", address);
                Ok(session)
            }
        }
    }

    /// Resolves `address` like [`Journey::submit_destination`], but fails with
    /// `MissingDestination` when nothing matches.
    ///
    /// Only the geocoder is called, so this works on a session that has not
    /// logged in yet.
    pub async fn require_destination(
        &self,
        session: SessionState,
        address: &str,
    ) -> Result<SessionState, JourneyError> {
        let session = self.submit_destination(session, address).await?;
        if session.destination().is_none() {
            return Err(JourneyError::MissingDestination);
        }
        Ok(session)
    }

    /// Computes the travel time between the current position and the destination.
    pub async fn estimate(&self, session: SessionState) -> Result<SessionState, JourneyError> {
        let (origin, destination) = endpoints(&session)?;
        let travel_time = self.maps.travel_time(origin, destination).await?;
        Ok(session.with_travel_time(travel_time))
    }

    /// Runs the whole workflow: estimate, pick songs, describe, publish.
    ///
    /// Requires a destination, a current position, and an authenticated
    /// session; these are checked before any request is sent. An empty song
    /// selection stops the run with `NoSongs` instead of publishing an empty
    /// playlist. Reverse geocoding only feeds the description, so its failure
    /// falls back to raw coordinates.
    pub async fn create_playlist(
        &self,
        session: SessionState,
    ) -> Result<(SessionState, PublishedPlaylist), JourneyError> {
        let (origin, destination) = endpoints(&session)?;
        session.token()?;

        let travel_time = self.maps.travel_time(origin, destination).await?;
        let session = session.with_travel_time(travel_time);
        info!(
            "Estimated travel time: {}",
            utils::format_duration(travel_time.seconds)
        );

        let token = session.token()?;
        let tracks = self
            .spotify
            .songs_for_trip(token, travel_time, session.genres())
            .await?;
        if tracks.is_empty() {
            return Err(JourneyError::NoSongs);
        }

        let description = utils::playlist_description(
            &self.address_or_coordinate(origin).await,
            &self.address_or_coordinate(destination).await,
        );
        let playlist = self.spotify.publish(token, &description, &tracks).await?;

        let published = PublishedPlaylist {
            playlist,
            travel_time,
            tracks,
        };
        Ok((session, published))
    }

    async fn address_or_coordinate(&self, coordinate: Coordinate) -> String {
        match self.maps.reverse_geocode(coordinate).await {
            Ok(Some(address)) => address,
            Ok(None) => coordinate.to_string(),
            Err(e) => {
                warning!("Error fetching address for {}: {}", coordinate, e);
                coordinate.to_string()
            }
        }
    }
}

fn endpoints(session: &SessionState) -> Result<(Coordinate, Coordinate), JourneyError> {
    let destination = session
        .destination()
        .ok_or(JourneyError::MissingDestination)?;
    let origin = session
        .current_position()
        .ok_or(JourneyError::MissingPosition)?;
    Ok((origin, destination))
}
