use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{
    types::{CallbackOutcome, PendingAuthorization},
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<PendingAuthorization>>>,
) -> Html<&'static str> {
    let mut pending = shared_state.lock().await;

    // first answer wins, later hits (reloads, favicon races) are ignored
    if pending.outcome.is_some() {
        return Html("<h4>Authorization already handled.</h4>");
    }

    if params.get("state") != Some(&pending.expected_state) {
        warning!("Authorization callback carried an unexpected state value");
        pending.outcome = Some(CallbackOutcome::StateMismatch);
        return Html("<h4>Login failed: state mismatch.</h4>");
    }

    if let Some(error) = params.get("error") {
        pending.outcome = Some(CallbackOutcome::Denied(error.clone()));
        return Html("<h4>Login was cancelled.</h4>");
    }

    match params.get("code") {
        Some(code) => {
            pending.outcome = Some(CallbackOutcome::Code(code.clone()));
            Html("<h2>Authorization received.</h2><p>You can close this browser window.</p>")
        }
        None => {
            pending.outcome = Some(CallbackOutcome::Denied("missing code".to_string()));
            Html("<h4>Missing authorization code.</h4>")
        }
    }
}
