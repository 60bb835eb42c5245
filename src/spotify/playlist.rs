use crate::{
    error::JourneyError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, AuthToken, CreatePlaylistRequest,
        Playlist, Track,
    },
};

use super::{SpotifyClient, ensure_success};

pub const PLAYLIST_NAME: &str = "Travel Playlist";

/// Spotify accepts at most this many URIs per add-tracks request.
const TRACKS_PER_REQUEST: usize = 100;

impl SpotifyClient {
    /// Creates a public playlist owned by the authenticated user.
    ///
    /// # API Endpoint
    ///
    /// `POST /me/playlists` with `{name, description, public: true}`
    pub async fn create_playlist(
        &self,
        token: &AuthToken,
        name: &str,
        description: &str,
    ) -> Result<Playlist, JourneyError> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: true,
        };

        let response = self
            .client
            .post(self.url("me/playlists"))
            .bearer_auth(&token.access_token)
            .json(&body)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json::<Playlist>().await?)
    }

    /// Appends tracks to a playlist, in batches of 100 URIs.
    ///
    /// Returns the snapshot id of the last batch, or `None` when there was
    /// nothing to add.
    ///
    /// # API Endpoint
    ///
    /// `POST /playlists/{playlist_id}/tracks` with `{uris}`
    pub async fn add_tracks(
        &self,
        token: &AuthToken,
        playlist_id: &str,
        tracks: &[Track],
    ) -> Result<Option<String>, JourneyError> {
        let mut snapshot_id = None;

        for chunk in tracks.chunks(TRACKS_PER_REQUEST) {
            let body = AddTrackToPlaylistRequest {
                uris: chunk.iter().map(|t| t.uri.clone()).collect(),
            };

            let response = self
                .client
                .post(self.url(&format!("playlists/{playlist_id}/tracks")))
                .bearer_auth(&token.access_token)
                .json(&body)
                .send()
                .await?;

            let json = ensure_success(response)
                .await?
                .json::<AddTrackToPlaylistResponse>()
                .await?;
            snapshot_id = Some(json.snapshot_id);
        }

        Ok(snapshot_id)
    }

    /// Creates the travel playlist and fills it.
    ///
    /// Two sequential calls with no rollback: when adding tracks fails the
    /// created playlist is left in place and the error is wrapped in
    /// `JourneyError::PartialPublish` with its id.
    pub async fn publish(
        &self,
        token: &AuthToken,
        description: &str,
        tracks: &[Track],
    ) -> Result<Playlist, JourneyError> {
        let playlist = self
            .create_playlist(token, PLAYLIST_NAME, description)
            .await?;

        if let Err(e) = self.add_tracks(token, &playlist.id, tracks).await {
            return Err(JourneyError::PartialPublish {
                playlist_id: playlist.id,
                source: Box::new(e),
            });
        }

        Ok(playlist)
    }
}
