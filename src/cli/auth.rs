use crate::{error, session::SessionState, spotify, success, utils};

pub async fn auth() {
    let settings = super::load_settings();

    match spotify::auth::authenticate(&settings, SessionState::new()).await {
        Ok(session) => {
            let expires_in = session.token().map(|t| t.expires_in).unwrap_or_default();
            success!(
                "Authentication successful! Token valid for {}.",
                utils::format_duration(expires_in)
            );
        }
        Err(e) => error!("Authentication failed: {}", e),
    }
}
