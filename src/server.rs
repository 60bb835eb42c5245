use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{api, error::JourneyError, types::PendingAuthorization};

pub fn router(state: Arc<Mutex<PendingAuthorization>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

pub async fn bind(addr: &str) -> Result<TcpListener, JourneyError> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| JourneyError::Server(format!("cannot bind {addr}: {e}")))
}

pub async fn serve(
    listener: TcpListener,
    state: Arc<Mutex<PendingAuthorization>>,
) -> Result<(), JourneyError> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| JourneyError::Server(e.to_string()))
}
