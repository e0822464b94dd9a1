//! Address to coordinate resolution.
//!
//! Handlers depend on the [`Geocoder`] trait object held in application
//! state. [`FixedGeocoder`] answers every non-blank address with the same
//! point and is the default when no external provider is configured.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Reasons an address could not be turned into coordinates.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("no location found for address '{0}'")]
    NoResults(String),

    #[error("geocoding request failed: {0}")]
    Request(String),
}

/// Resolves a free-form address into coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn locate(&self, address: &str) -> Result<Coordinates, GeocodeError>;
}

/// Geocoder that returns the same coordinates for any address.
#[derive(Debug, Clone)]
pub struct FixedGeocoder {
    coordinates: Coordinates,
}

impl FixedGeocoder {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

impl Default for FixedGeocoder {
    /// Empire State Building, New York.
    fn default() -> Self {
        Self::new(Coordinates {
            lat: 40.748_447_4,
            lng: -73.987_151_6,
        })
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn locate(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::NoResults(address.to_string()));
        }
        Ok(self.coordinates)
    }
}
