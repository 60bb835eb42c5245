use tabled::Table;

use crate::{
    error,
    error::JourneyError,
    genres::{DEFAULT_SEED_GENRES, GenreSelection},
    info,
    journey::Journey,
    location,
    maps::MapsClient,
    session::SessionState,
    spotify::{self, SpotifyClient},
    success, utils, warning,
};

use super::Origin;

pub async fn trip(origin: Origin, destination: String, genres: Vec<String>) {
    let settings = super::load_settings();
    let maps = MapsClient::from_settings(&settings);
    let spotify_client = SpotifyClient::from_settings(&settings);
    let journey = Journey::new(maps.clone(), spotify_client.clone());

    let provider = super::location_provider(&maps, origin);
    let position = match location::acquire_position(provider.as_ref()).await {
        Ok(position) => position,
        Err(e) => error!("{}", e),
    };
    info!("Starting from {}", position);
    let session = SessionState::new().with_position(position);

    let session = match journey.require_destination(session, &destination).await {
        Ok(session) => session,
        Err(JourneyError::MissingDestination) => {
            error!("Destination '{}' could not be resolved", destination)
        }
        Err(e) => error!("Error fetching the destination coordinates: {}", e),
    };

    let session = match spotify::auth::authenticate(&settings, session).await {
        Ok(session) => {
            success!("Authentication successful!");
            session
        }
        Err(e) => error!("Authentication failed: {}", e),
    };

    let mut selection = GenreSelection::from_tags(&genres);
    if !selection.is_empty() {
        if let Ok(token) = session.token() {
            match spotify_client.available_genres(token).await {
                Ok(available) => {
                    let rejected = selection.retain_available(&available);
                    if !rejected.is_empty() {
                        warning!("Ignoring unknown genres: {}", rejected.join(", "));
                    }
                }
                Err(e) => warning!("Cannot verify genres: {}", e),
            }
        }
    }
    if selection.is_empty() {
        info!(
            "No genres selected, using {}",
            DEFAULT_SEED_GENRES.join(", ")
        );
    }
    let session = session.with_genres(selection);

    let published = match journey.create_playlist(session).await {
        Ok((_, published)) => published,
        Err(e) => error!("Playlist creation failed: {}", e),
    };

    let total_ms = utils::total_duration_ms(&published.tracks);
    println!("{}", Table::new(utils::track_table_rows(&published.tracks)));
    success!(
        "Playlist '{}' created with {} tracks ({} of music for a {} trip)",
        published.playlist.name,
        published.tracks.len(),
        utils::format_duration(total_ms / 1000),
        utils::format_duration(published.travel_time.seconds)
    );
    info!("https://open.spotify.com/playlist/{}", published.playlist.id);
}
