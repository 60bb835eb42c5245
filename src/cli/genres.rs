use tabled::Table;

use crate::{
    error, session::SessionState, spotify, spotify::SpotifyClient, types::GenreTableRow,
};

pub async fn genres() {
    let settings = super::load_settings();

    let session = match spotify::auth::authenticate(&settings, SessionState::new()).await {
        Ok(session) => session,
        Err(e) => error!("Authentication failed: {}", e),
    };

    let token = match session.token() {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = super::spinner("Fetching available genres...");
    let result = SpotifyClient::from_settings(&settings)
        .available_genres(token)
        .await;
    pb.finish_and_clear();

    let rows: Vec<GenreTableRow> = match result {
        Ok(genres) => genres
            .into_iter()
            .map(|genre| GenreTableRow { genre })
            .collect(),
        Err(e) => error!("Cannot fetch genres: {}", e),
    };

    println!("{}", Table::new(rows));
}
