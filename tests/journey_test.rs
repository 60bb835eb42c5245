mod common;

use axum::http::Method;
use common::{FakeApi, authenticated_session, directions_json, geocode_json, origin, track_json};
use jukebox::{
    error::JourneyError,
    genres::GenreSelection,
    journey::Journey,
    location::{FixedLocation, NoLocation, acquire_position},
    maps::MapsClient,
    session::SessionState,
    spotify::{SpotifyClient, auth::complete_authorization},
    types::Coordinate,
};
use serde_json::json;

const GEOCODE: &str = "/maps/api/geocode/json";
const DIRECTIONS: &str = "/maps/api/directions/json";
const RECOMMENDATIONS: &str = "/v1/recommendations";
const PLAYLISTS: &str = "/v1/me/playlists";
const ADD_TRACKS: &str = "/v1/playlists/trip1/tracks";

fn journey(api: &FakeApi) -> Journey {
    let settings = api.settings();
    Journey::new(
        MapsClient::from_settings(&settings),
        SpotifyClient::from_settings(&settings),
    )
}

fn stub_trip(api: &FakeApi) {
    api.respond_with_param(
        Method::GET,
        GEOCODE,
        "address",
        200,
        geocode_json(37.1, -122.1, "Destination Ave"),
    );
    api.respond_with_param(
        Method::GET,
        GEOCODE,
        "latlng",
        200,
        geocode_json(37.0, -122.0, "1 Main St"),
    );
    api.respond(Method::GET, DIRECTIONS, 200, directions_json(600));
    api.respond(
        Method::GET,
        RECOMMENDATIONS,
        200,
        json!({
            "tracks": (1..=5).map(|i| track_json(&i.to_string(), 200_000)).collect::<Vec<_>>()
        }),
    );
    api.respond(
        Method::POST,
        PLAYLISTS,
        201,
        json!({ "id": "trip1", "name": "Travel Playlist", "public": true }),
    );
    api.respond(Method::POST, ADD_TRACKS, 201, json!({ "snapshot_id": "s1" }));
}

#[tokio::test]
async fn test_trip_end_to_end() {
    let api = FakeApi::start().await;
    stub_trip(&api);
    let journey = journey(&api);

    let position = acquire_position(&FixedLocation::new(origin())).await.unwrap();
    let session = authenticated_session()
        .with_position(position)
        .with_genres(GenreSelection::from_tags(["rock"]));

    let session = journey
        .submit_destination(session, "Destination Ave")
        .await
        .unwrap();
    assert_eq!(session.destination(), Some(Coordinate::new(37.1, -122.1)));

    let (session, published) = journey.create_playlist(session).await.unwrap();

    assert_eq!(published.travel_time.seconds, 600);
    assert_eq!(session.travel_time().map(|t| t.seconds), Some(600));
    assert_eq!(published.tracks.len(), 3);
    assert_eq!(published.playlist.id, "trip1");

    let create = api.requests_to(PLAYLISTS)[0].json();
    assert_eq!(create["name"], "Travel Playlist");
    assert_eq!(create["public"], true);
    assert_eq!(
        create["description"],
        "Playlist curated for your trip from 1 Main St to 1 Main St"
    );

    let add = api.requests_to(ADD_TRACKS)[0].json();
    assert_eq!(
        add["uris"],
        json!(["spotify:track:1", "spotify:track:2", "spotify:track:3"])
    );

    let order: Vec<String> = api.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        order,
        vec![GEOCODE, DIRECTIONS, RECOMMENDATIONS, GEOCODE, GEOCODE, PLAYLISTS, ADD_TRACKS]
    );
}

#[tokio::test]
async fn test_unknown_destination_stays_unset() {
    let api = FakeApi::start().await;
    api.respond(
        Method::GET,
        GEOCODE,
        200,
        json!({ "status": "ZERO_RESULTS", "results": [] }),
    );
    let journey = journey(&api);

    let session = journey
        .submit_destination(SessionState::new(), "Atlantis")
        .await
        .unwrap();

    assert!(session.destination().is_none());
}

#[tokio::test]
async fn test_unknown_destination_keeps_previous_one() {
    let api = FakeApi::start().await;
    api.respond(
        Method::GET,
        GEOCODE,
        200,
        json!({ "status": "ZERO_RESULTS", "results": [] }),
    );
    let journey = journey(&api);
    let previous = Coordinate::new(1.0, 2.0);

    let session = journey
        .submit_destination(SessionState::new().with_destination(previous), "Atlantis")
        .await
        .unwrap();

    assert_eq!(session.destination(), Some(previous));
}

#[tokio::test]
async fn test_require_destination_works_before_login() {
    let api = FakeApi::start().await;
    stub_trip(&api);
    let journey = journey(&api);

    let session = journey
        .require_destination(SessionState::new().with_position(origin()), "Destination Ave")
        .await
        .unwrap();

    assert_eq!(session.destination(), Some(Coordinate::new(37.1, -122.1)));
    assert!(!session.is_authenticated());
    let paths: Vec<String> = api.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec![GEOCODE]);
}

#[tokio::test]
async fn test_require_destination_rejects_unknown_address() {
    let api = FakeApi::start().await;
    api.respond(
        Method::GET,
        GEOCODE,
        200,
        json!({ "status": "ZERO_RESULTS", "results": [] }),
    );
    let journey = journey(&api);

    let result = journey
        .require_destination(SessionState::new(), "Atlantis")
        .await;

    assert!(matches!(result, Err(JourneyError::MissingDestination)));
    assert!(api.requests_to("/api/token").is_empty());
}

#[tokio::test]
async fn test_unauthenticated_session_makes_no_calls() {
    let api = FakeApi::start().await;
    stub_trip(&api);
    let journey = journey(&api);

    let session = SessionState::new()
        .with_position(origin())
        .with_destination(Coordinate::new(37.1, -122.1));

    let result = journey.create_playlist(session).await;

    assert!(matches!(result, Err(JourneyError::Unauthenticated)));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_failed_token_exchange_blocks_authorized_calls() {
    let api = FakeApi::start().await;
    stub_trip(&api);
    api.respond(Method::POST, "/api/token", 400, json!({ "error": "invalid_grant" }));
    let journey = journey(&api);

    let pending = SessionState::new()
        .with_position(origin())
        .with_destination(Coordinate::new(37.1, -122.1))
        .request_authorization()
        .unwrap();

    let (session, result) = complete_authorization(&api.settings(), pending, "code").await;
    assert!(matches!(result, Err(JourneyError::TokenExchange(_))));
    assert!(!session.is_authenticated());

    let result = journey.create_playlist(session).await;

    assert!(matches!(result, Err(JourneyError::Unauthenticated)));
    let paths: Vec<String> = api.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/api/token"]);
}

#[tokio::test]
async fn test_missing_destination_is_reported() {
    let api = FakeApi::start().await;
    let journey = journey(&api);

    let result = journey
        .create_playlist(authenticated_session().with_position(origin()))
        .await;

    assert!(matches!(result, Err(JourneyError::MissingDestination)));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_no_route_stops_before_spotify() {
    let api = FakeApi::start().await;
    api.respond(
        Method::GET,
        DIRECTIONS,
        200,
        json!({ "status": "ZERO_RESULTS", "routes": [] }),
    );
    let journey = journey(&api);

    let session = authenticated_session()
        .with_position(origin())
        .with_destination(Coordinate::new(37.1, -122.1));

    let result = journey.create_playlist(session).await;

    assert!(matches!(result, Err(JourneyError::NoRouteFound { .. })));
    let paths: Vec<String> = api.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec![DIRECTIONS]);
}

#[tokio::test]
async fn test_no_songs_publishes_nothing() {
    let api = FakeApi::start().await;
    api.respond(Method::GET, DIRECTIONS, 200, directions_json(600));
    api.respond(Method::GET, RECOMMENDATIONS, 200, json!({ "tracks": [] }));
    let journey = journey(&api);

    let session = authenticated_session()
        .with_position(origin())
        .with_destination(Coordinate::new(37.1, -122.1));

    let result = journey.create_playlist(session).await;

    assert!(matches!(result, Err(JourneyError::NoSongs)));
    assert!(api.requests_to(PLAYLISTS).is_empty());
}

#[tokio::test]
async fn test_failed_song_fetch_publishes_nothing() {
    let api = FakeApi::start().await;
    api.respond(Method::GET, DIRECTIONS, 200, directions_json(600));
    api.respond(Method::GET, RECOMMENDATIONS, 503, json!({}));
    let journey = journey(&api);

    let session = authenticated_session()
        .with_position(origin())
        .with_destination(Coordinate::new(37.1, -122.1));

    let result = journey.create_playlist(session).await;

    assert!(matches!(result, Err(JourneyError::Api { status: 503, .. })));
    assert!(api.requests_to(PLAYLISTS).is_empty());
}

#[tokio::test]
async fn test_description_falls_back_to_coordinates() {
    let api = FakeApi::start().await;
    api.respond(Method::GET, DIRECTIONS, 200, directions_json(60));
    api.respond(Method::GET, GEOCODE, 500, json!({}));
    api.respond(
        Method::GET,
        RECOMMENDATIONS,
        200,
        json!({ "tracks": [track_json("1", 200_000)] }),
    );
    api.respond(
        Method::POST,
        PLAYLISTS,
        201,
        json!({ "id": "trip1", "name": "Travel Playlist" }),
    );
    api.respond(Method::POST, ADD_TRACKS, 201, json!({ "snapshot_id": "s1" }));
    let journey = journey(&api);

    let session = authenticated_session()
        .with_position(origin())
        .with_destination(Coordinate::new(37.1, -122.1));

    journey.create_playlist(session).await.unwrap();

    let create = api.requests_to(PLAYLISTS)[0].json();
    assert_eq!(
        create["description"],
        "Playlist curated for your trip from 37,-122 to 37.1,-122.1"
    );
}

#[tokio::test]
async fn test_no_origin_means_permission_denied() {
    let result = acquire_position(&NoLocation).await;

    assert!(matches!(result, Err(JourneyError::PermissionDenied)));
}
