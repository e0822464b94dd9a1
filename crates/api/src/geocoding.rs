//! Geocoder selection and the Google Geocoding API client.

use std::sync::Arc;

use async_trait::async_trait;
use places_core::geocode::{Coordinates, FixedGeocoder, GeocodeError, Geocoder};
use serde::Deserialize;

use crate::config::ServerConfig;

const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Pick the geocoder for this process: Google when an API key is configured,
/// otherwise the fixed-point fallback.
pub fn build_geocoder(config: &ServerConfig) -> Arc<dyn Geocoder> {
    match &config.google_api_key {
        Some(key) => {
            tracing::info!("Using Google Geocoding API");
            Arc::new(GoogleGeocoder::new(key.clone()))
        }
        None => {
            tracing::info!("GOOGLE_API_KEY not set, using fixed coordinates for every address");
            Arc::new(FixedGeocoder::default())
        }
    }
}

/// Resolves addresses through the Google Geocoding API.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn locate(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let response: GeocodeResponse = self
            .client
            .get(GOOGLE_GEOCODE_URL)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| GeocodeError::Request(e.to_string()))?
            .json()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        first_location(response, address)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

fn first_location(response: GeocodeResponse, address: &str) -> Result<Coordinates, GeocodeError> {
    match response.status.as_str() {
        "OK" => response
            .results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or_else(|| GeocodeError::NoResults(address.to_string())),
        "ZERO_RESULTS" => Err(GeocodeError::NoResults(address.to_string())),
        other => Err(GeocodeError::Request(format!("provider returned status {other}"))),
    }
}
