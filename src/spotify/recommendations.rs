use crate::{
    error::JourneyError,
    genres::{GenreSelection, MAX_SEED_GENRES},
    types::{AuthToken, RecommendationsResponse, Track, TravelEstimate},
    utils, warning,
};

use super::{SpotifyClient, ensure_success};

/// Maximum number of candidates requested from the catalog.
pub const RECOMMENDATION_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Fetches recommended tracks for the given seed genres.
    ///
    /// Tracks come back in the order the catalog returned them; callers rely
    /// on that order when selecting a prefix.
    ///
    /// # Arguments
    ///
    /// * `token` - Bearer token of the authenticated user
    /// * `seed_genres` - Genre tags, joined with `,` into `seed_genres`
    /// * `limit` - Number of candidates to request (the API caps this at 100)
    ///
    /// # API Endpoint
    ///
    /// `GET /recommendations?limit={limit}&seed_genres={genres}`
    pub async fn recommendations(
        &self,
        token: &AuthToken,
        seed_genres: &[String],
        limit: u32,
    ) -> Result<Vec<Track>, JourneyError> {
        let response = self
            .client
            .get(self.url("recommendations"))
            .query(&[
                ("limit", limit.to_string()),
                ("seed_genres", seed_genres.join(",")),
            ])
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let json = ensure_success(response)
            .await?
            .json::<RecommendationsResponse>()
            .await?;

        Ok(json.tracks)
    }

    /// Picks songs for a trip of the given length.
    ///
    /// Requests up to [`RECOMMENDATION_LIMIT`] tracks seeded by `genres` (the
    /// default pair when the selection is empty) and keeps the shortest prefix
    /// whose total length reaches the travel time. The last track may run
    /// past the arrival; if all candidates together are shorter than the trip,
    /// all of them are returned.
    ///
    /// # Returns
    ///
    /// - `Ok(tracks)` - Possibly empty when the catalog had no match
    /// - `Err(JourneyError)` - The request failed; this is never folded into an
    ///   empty list
    pub async fn songs_for_trip(
        &self,
        token: &AuthToken,
        travel_time: TravelEstimate,
        genres: &GenreSelection,
    ) -> Result<Vec<Track>, JourneyError> {
        if genres.len() > MAX_SEED_GENRES {
            warning!(
                "Spotify accepts at most {} seed genres, using: {}",
                MAX_SEED_GENRES,
                genres.seeds().join(", ")
            );
        }

        let candidates = self
            .recommendations(token, &genres.seeds(), RECOMMENDATION_LIMIT)
            .await?;

        Ok(utils::accumulate_tracks(candidates, travel_time))
    }
}
