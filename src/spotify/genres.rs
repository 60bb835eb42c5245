use crate::{
    error::JourneyError,
    types::{AuthToken, AvailableGenresResponse},
};

use super::{SpotifyClient, ensure_success};

impl SpotifyClient {
    /// Lists the genre tags accepted as `seed_genres` by the recommendation
    /// endpoint.
    ///
    /// # API Endpoint
    ///
    /// `GET /recommendations/available-genre-seeds`
    pub async fn available_genres(&self, token: &AuthToken) -> Result<Vec<String>, JourneyError> {
        let response = self
            .client
            .get(self.url("recommendations/available-genre-seeds"))
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let json = ensure_success(response)
            .await?
            .json::<AvailableGenresResponse>()
            .await?;

        Ok(json.genres)
    }
}
