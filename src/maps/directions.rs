use crate::{
    error::JourneyError,
    types::{Coordinate, DirectionsResponse, TravelEstimate},
    warning,
};

use super::MapsClient;

impl MapsClient {
    /// Estimates the travel duration between two coordinates.
    ///
    /// Requests a route and reads the duration of the first leg of the first
    /// route. No alternative routes are considered and nothing is retried.
    ///
    /// # Arguments
    ///
    /// * `origin` - Starting point, sent as `lat,lng`
    /// * `destination` - End point, sent as `lat,lng`
    ///
    /// # Returns
    ///
    /// - `Ok(TravelEstimate)` - Leg duration in seconds
    /// - `Err(JourneyError::NoRouteFound)` - Status other than `OK`, an empty
    ///   route list, or a route without legs
    /// - `Err(JourneyError::Api | JourneyError::Http)` - Transport failures
    ///
    /// # API Endpoint
    ///
    /// `GET {maps}/directions/json?origin={origin}&destination={destination}&key={key}`
    pub async fn travel_time(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<TravelEstimate, JourneyError> {
        let origin = origin.to_string();
        let destination = destination.to_string();

        let response: DirectionsResponse = self
            .get_json(
                "directions",
                &[
                    ("origin", origin.as_str()),
                    ("destination", destination.as_str()),
                ],
            )
            .await?;

        if response.status != "OK" {
            warning!(
                "Error in response from Directions API: {} {}",
                response.status,
                response.error_message.as_deref().unwrap_or_default()
            );
            return Err(JourneyError::NoRouteFound {
                status: response.status,
            });
        }

        response
            .routes
            .first()
            .and_then(|route| route.legs.first())
            .map(|leg| TravelEstimate {
                seconds: leg.duration.value,
            })
            .ok_or(JourneyError::NoRouteFound {
                status: response.status,
            })
    }
}
