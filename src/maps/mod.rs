//! # Google Maps Integration
//!
//! Client for the two Google Maps Platform web services the trip workflow
//! needs:
//!
//! - [`geocode`] - forward geocoding of a free-text destination and reverse
//!   geocoding of coordinates to a human readable address
//! - [`directions`] - travel duration between two coordinates
//!
//! Both services answer HTTP 200 for most logical failures and report them in
//! a `status` field, so the callers inspect that field rather than relying on
//! the HTTP status alone.
//!
//! The API key is appended as the `key` query parameter on every request.

pub mod directions;
pub mod geocode;

use reqwest::Client;

use crate::{config::Settings, error::JourneyError};

/// Thin wrapper holding the HTTP client, base URL, and API key.
#[derive(Debug, Clone)]
pub struct MapsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MapsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.google_maps_api_url, &settings.google_maps_api_key)
    }

    async fn get_json<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, JourneyError>
    where
        T: serde::de::DeserializeOwned,
    {
        let api_url = format!("{base}/{path}/json", base = self.base_url, path = path);

        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("key", self.api_key.as_str()));

        let response = self.client.get(&api_url).query(&query).send().await?;
        if !response.status().is_success() {
            return Err(JourneyError::from_response("Google Maps", response).await);
        }

        Ok(response.json::<T>().await?)
    }
}
