use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::Utc;
use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    config,
    error::JourneyError,
    info, server,
    session::SessionState,
    types::{AuthToken, CallbackOutcome, PendingAuthorization, TokenResponse},
    utils, warning,
};

/// How long to wait for the browser to hit the callback.
pub const AUTH_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the complete authorization-code flow and returns an authenticated session.
///
/// Steps:
/// 1. Generates a random `state` value that the callback must echo back and
///    moves the session to `AuthorizationRequested`
/// 2. Binds the loopback callback server on `SERVER_ADDRESS`
/// 3. Opens the authorization URL in the default browser
/// 4. Waits for the callback to deliver a code (at most [`AUTH_TIMEOUT`]),
///    then shuts the callback server down
/// 5. Exchanges the code for a bearer token through [`complete_authorization`]
///
/// The session moves `Unauthenticated → AuthorizationRequested →
/// TokenExchangePending → Authenticated`. Any failure ends the flow with an
/// error; the token is never set in that case and the caller must not issue
/// authorized requests.
///
/// # Errors
///
/// - `JourneyError::InvalidTransition` if the session already went through
///   authorization; the callback server is not started in that case
/// - `JourneyError::Server` if the callback address cannot be bound
/// - `JourneyError::AuthDenied` if the user declined in the browser
/// - `JourneyError::StateMismatch` if the callback carried a foreign `state`
/// - `JourneyError::AuthTimeout` if no callback arrived in time
/// - `JourneyError::TokenExchange` if the token endpoint rejected the code
pub async fn authenticate(
    settings: &config::Settings,
    session: SessionState,
) -> Result<SessionState, JourneyError> {
    let csrf_state = utils::generate_state();
    let auth_url = authorize_url(settings, &csrf_state)?;
    let session = session.request_authorization()?;
    let shared_state = Arc::new(Mutex::new(PendingAuthorization::new(csrf_state)));

    let listener = server::bind(&settings.server_addr).await?;
    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = server::serve(listener, server_state).await {
            warning!("{}", e);
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    info!("Waiting for Spotify authorization in the browser...");
    let outcome = wait_for_callback(shared_state, AUTH_TIMEOUT).await;
    server.abort();

    let code = match outcome {
        Some(CallbackOutcome::Code(code)) => code,
        Some(CallbackOutcome::Denied(reason)) => return Err(JourneyError::AuthDenied(reason)),
        Some(CallbackOutcome::StateMismatch) => return Err(JourneyError::StateMismatch),
        None => return Err(JourneyError::AuthTimeout),
    };

    let (session, result) = complete_authorization(settings, session, &code).await;
    result.map(|()| session)
}

/// Trades the authorization code for a token and advances the session.
///
/// The session is handed back in every case. On success it is
/// `Authenticated` and carries the token; when the exchange fails it stays in
/// `TokenExchangePending` without a token, so authorized calls keep failing
/// with `Unauthenticated`. A session that has not requested authorization is
/// returned unchanged together with `InvalidTransition`, and nothing is sent.
pub async fn complete_authorization(
    settings: &config::Settings,
    session: SessionState,
    code: &str,
) -> (SessionState, Result<(), JourneyError>) {
    let pending = match session.clone().begin_token_exchange() {
        Ok(pending) => pending,
        Err(e) => return (session, Err(e)),
    };

    let token = match exchange_code(settings, code).await {
        Ok(token) => token,
        Err(e) => return (pending, Err(e)),
    };

    match pending.clone().authenticated(token) {
        Ok(session) => (session, Ok(())),
        Err(e) => (pending, Err(e)),
    }
}

/// Builds the URL the user opens to grant access.
///
/// Carries `client_id`, `response_type=code`, `redirect_uri`, `scope`,
/// `show_dialog=true` (always ask, so switching accounts is possible) and the
/// CSRF `state`.
pub fn authorize_url(settings: &config::Settings, state: &str) -> Result<Url, JourneyError> {
    Url::parse_with_params(
        &settings.spotify_auth_url,
        &[
            ("client_id", settings.spotify_client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", settings.spotify_redirect_uri.as_str()),
            ("scope", settings.spotify_scope.as_str()),
            ("show_dialog", "true"),
            ("state", state),
        ],
    )
    .map_err(|e| JourneyError::Config(format!("invalid SPOTIFY_API_AUTH_URL: {e}")))
}

/// Exchanges an authorization code for a bearer token.
///
/// Posts a form-encoded body with `client_id`, `client_secret`,
/// `grant_type=authorization_code`, `code` and `redirect_uri` to the token
/// endpoint. The client secret travels in the body; this is the plain
/// authorization-code grant, not PKCE.
///
/// # Returns
///
/// - `Ok(AuthToken)` - Access token stamped with the time it was obtained
/// - `Err(JourneyError::TokenExchange)` - Non-2xx answer from the endpoint
/// - `Err(JourneyError::Http)` - Network failure or malformed JSON
pub async fn exchange_code(
    settings: &config::Settings,
    code: &str,
) -> Result<AuthToken, JourneyError> {
    let client = Client::new();
    let res = client
        .post(&settings.spotify_token_url)
        .form(&[
            ("client_id", settings.spotify_client_id.as_str()),
            ("client_secret", settings.spotify_client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", settings.spotify_redirect_uri.as_str()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(JourneyError::TokenExchange(format!("{status} {body}")));
    }

    let json: TokenResponse = res.json().await?;

    Ok(AuthToken {
        access_token: json.access_token,
        token_type: json.token_type,
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Polls the shared callback slot until an outcome arrives or `max_wait` passes.
pub async fn wait_for_callback(
    shared_state: Arc<Mutex<PendingAuthorization>>,
    max_wait: Duration,
) -> Option<CallbackOutcome> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(outcome) = &lock.outcome {
            return Some(outcome.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    None
}
