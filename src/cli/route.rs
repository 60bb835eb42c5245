use crate::{
    error,
    error::JourneyError,
    info,
    journey::Journey,
    location,
    maps::MapsClient,
    session::SessionState,
    spotify::SpotifyClient,
    success, utils,
};

use super::Origin;

pub async fn route(origin: Origin, destination: String) {
    let settings = super::load_settings();
    let maps = MapsClient::from_settings(&settings);
    let journey = Journey::new(maps.clone(), SpotifyClient::from_settings(&settings));

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

    let pb = super::spinner("Estimating travel time...");
    let result = journey.estimate(session).await;
    pb.finish_and_clear();

    match result.map(|s| s.travel_time()) {
        Ok(Some(travel_time)) => success!(
            "Travel time to {}: {}",
            destination,
            utils::format_duration(travel_time.seconds)
        ),
        Ok(None) => error!("No travel time available"),
        Err(e) => error!("Error fetching travel time: {}", e),
    }
}
