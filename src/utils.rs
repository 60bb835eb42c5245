use rand::{Rng, distr::Alphanumeric};

use crate::types::{Track, TrackTableRow, TravelEstimate};

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Keeps the shortest prefix of `tracks` whose total duration reaches the trip.
///
/// Tracks are added in the given order until the running sum in milliseconds
/// is no longer below `travel_time` converted to milliseconds. The last track
/// may overshoot. Nothing is reordered or skipped.
pub fn accumulate_tracks(tracks: Vec<Track>, travel_time: TravelEstimate) -> Vec<Track> {
    let target_ms = travel_time.target_ms();
    let mut total_duration: u64 = 0;
    let mut songs = Vec::new();

    for track in tracks {
        total_duration = total_duration.saturating_add(track.duration_ms);
        songs.push(track);
        if total_duration >= target_ms {
            break;
        }
    }

    songs
}

pub fn total_duration_ms(tracks: &[Track]) -> u64 {
    tracks.iter().map(|t| t.duration_ms).sum()
}

/// Formats seconds as `1h 05m`, `12m 30s` or `45s`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}

pub fn playlist_description(origin: &str, destination: &str) -> String {
    format!("Playlist curated for your trip from {origin} to {destination}")
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: t
                .artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<String>>()
                .join(", "),
            length: format_duration(t.duration_ms / 1000),
        })
        .collect()
}
