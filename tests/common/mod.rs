#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use jukebox::{
    config::Settings,
    session::SessionState,
    types::{AuthToken, Coordinate, Track, TrackArtist},
};
use serde_json::Value;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn form(&self) -> HashMap<String, String> {
        reqwest::Url::parse(&format!("http://localhost/?{}", self.body))
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Any,
    HasParam(String),
}

#[derive(Debug, Clone)]
struct Stub {
    method: Method,
    path: String,
    matcher: Matcher,
    status: StatusCode,
    body: String,
}

#[derive(Default)]
struct FakeState {
    stubs: Mutex<Vec<Stub>>,
    requests: Mutex<Vec<Recorded>>,
}

/// One local HTTP server standing in for Google Maps and Spotify at once.
pub struct FakeApi {
    pub url: String,
    state: Arc<FakeState>,
}

impl FakeApi {
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.push(method, path, Matcher::Any, status, body);
    }

    /// Like `respond`, but only for requests carrying the query parameter `key`.
    pub fn respond_with_param(&self, method: Method, path: &str, key: &str, status: u16, body: Value) {
        self.push(method, path, Matcher::HasParam(key.to_string()), status, body);
    }

    fn push(&self, method: Method, path: &str, matcher: Matcher, status: u16, body: Value) {
        self.state.stubs.lock().unwrap().push(Stub {
            method,
            path: path.to_string(),
            matcher,
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn settings(&self) -> Settings {
        let url = self.url.clone();
        Settings::from_lookup(move |key| {
            let value = match key {
                "SPOTIFY_API_AUTH_CLIENT_ID" => "client-id".to_string(),
                "SPOTIFY_API_AUTH_CLIENT_SECRET" => "client-secret".to_string(),
                "GOOGLE_MAPS_API_KEY" => "maps-key".to_string(),
                "SPOTIFY_API_AUTH_URL" => format!("{url}/authorize"),
                "SPOTIFY_API_TOKEN_URL" => format!("{url}/api/token"),
                "SPOTIFY_API_URL" => format!("{url}/v1"),
                "GOOGLE_MAPS_API_URL" => format!("{url}/maps/api"),
                _ => return None,
            };
            Some(value)
        })
        .unwrap()
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: query.clone(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let stubs = state.stubs.lock().unwrap().clone();
    let candidates: Vec<&Stub> = stubs
        .iter()
        .filter(|s| s.method == method && s.path == path)
        .collect();

    let specific = candidates.iter().find(|s| match &s.matcher {
        Matcher::HasParam(key) => query.contains_key(key),
        Matcher::Any => false,
    });
    let fallback = candidates.iter().find(|s| matches!(s.matcher, Matcher::Any));

    match specific.or(fallback) {
        Some(stub) => (
            stub.status,
            [(header::CONTENT_TYPE, "application/json")],
            stub.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, r#"{"error":"not stubbed"}"#).into_response(),
    }
}

pub fn token() -> AuthToken {
    AuthToken {
        access_token: "test-token".to_string(),
        token_type: "Bearer".to_string(),
        scope: "playlist-modify-public".to_string(),
        expires_in: 3600,
        obtained_at: 0,
    }
}

pub fn authenticated_session() -> SessionState {
    SessionState::new()
        .request_authorization()
        .unwrap()
        .begin_token_exchange()
        .unwrap()
        .authenticated(token())
        .unwrap()
}

pub fn track(id: &str, duration_ms: u64) -> Track {
    Track {
        uri: format!("spotify:track:{id}"),
        duration_ms,
        name: format!("Song {id}"),
        artists: vec![TrackArtist {
            name: "Artist".to_string(),
        }],
    }
}

pub fn track_json(id: &str, duration_ms: u64) -> Value {
    serde_json::json!({
        "id": id,
        "uri": format!("spotify:track:{id}"),
        "name": format!("Song {id}"),
        "duration_ms": duration_ms,
        "artists": [{ "name": "Artist" }]
    })
}

pub fn geocode_json(lat: f64, lng: f64, address: &str) -> Value {
    serde_json::json!({
        "status": "OK",
        "results": [{
            "formatted_address": address,
            "geometry": { "location": { "lat": lat, "lng": lng } }
        }]
    })
}

pub fn directions_json(seconds: u64) -> Value {
    serde_json::json!({
        "status": "OK",
        "routes": [{
            "legs": [{
                "duration": { "text": "10 mins", "value": seconds },
                "distance": { "text": "14 km", "value": 14000 }
            }]
        }]
    })
}

pub fn origin() -> Coordinate {
    Coordinate::new(37.0, -122.0)
}
