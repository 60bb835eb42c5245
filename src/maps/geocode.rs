use crate::{
    error::JourneyError,
    types::{Coordinate, GeocodeResponse},
    warning,
};

use super::MapsClient;

impl MapsClient {
    /// Resolves a free-text address to the coordinate of the first match.
    ///
    /// # Arguments
    ///
    /// * `address` - Free-text destination as typed by the user
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Coordinate))` - Location of the first geocoding result
    /// - `Ok(None)` - No result matched. This is a soft failure: the caller
    ///   keeps its destination unset and carries on
    /// - `Err(JourneyError)` - Network failure or a non-2xx answer
    ///
    /// A status other than `OK` or `ZERO_RESULTS` (for example `REQUEST_DENIED`
    /// on a bad key) is logged as a warning and also yields `None`.
    ///
    /// # API Endpoint
    ///
    /// `GET {maps}/geocode/json?address={address}&key={key}`
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, JourneyError> {
        let response: GeocodeResponse = self
            .get_json("geocode", &[("address", address)])
            .await?;

        warn_on_status(&response);

        Ok(response
            .results
            .first()
            .map(|result| Coordinate::from(result.geometry.location)))
    }

    /// Looks up the formatted address of a coordinate.
    ///
    /// Returns the first result's `formatted_address`, or `None` when nothing
    /// was found.
    ///
    /// # API Endpoint
    ///
    /// `GET {maps}/geocode/json?latlng={lat},{lng}&key={key}`
    pub async fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<String>, JourneyError> {
        let latlng = coordinate.to_string();
        let response: GeocodeResponse = self
            .get_json("geocode", &[("latlng", latlng.as_str())])
            .await?;

        warn_on_status(&response);

        Ok(response
            .results
            .into_iter()
            .map(|result| result.formatted_address)
            .find(|address| !address.is_empty()))
    }
}

fn warn_on_status(response: &GeocodeResponse) {
    match response.status.as_str() {
        "OK" | "ZERO_RESULTS" | "" => {}
        status => warning!(
            "Geocoding answered with status {}: {}",
            status,
            response.error_message.as_deref().unwrap_or("no details")
        ),
    }
}
