//! Place entity model and DTOs.

use places_core::geocode::Coordinates;
use places_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Image assigned to every newly created place.
pub const DEFAULT_PLACE_IMAGE: &str = "https://images.unsplash.com/photo-1555109307-f7d9da25c244?ixlib=rb-4.0.3&auto=format&fit=crop&w=2073&q=80";

/// Geocoded position of a place, stored as the `lat` / `lng` columns.
#[derive(Debug, Clone, Copy, PartialEq, FromRow, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for Location {
    fn from(c: Coordinates) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

/// A place row from the `places` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub address: String,
    #[sqlx(flatten)]
    pub location: Location,
    pub image: String,
    /// Owning user.
    pub creator: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new place.
#[derive(Debug, Clone)]
pub struct CreatePlace {
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Location,
    pub image: String,
    pub creator: DbId,
}

/// DTO for updating a place. Only the title and description are mutable.
#[derive(Debug, Clone)]
pub struct UpdatePlace {
    pub title: String,
    pub description: String,
}
