//! Response envelope types for API handlers.
//!
//! Successful responses wrap their payload under a key named after the
//! entity (`{ "place": ... }`, `{ "users": [...] }`). These structs keep the
//! key names in one place instead of ad-hoc `json!` calls.

use places_core::types::DbId;
use places_db::models::place::Place;
use places_db::models::user::UserResponse;
use serde::Serialize;

/// `{ "place": Place }`
#[derive(Debug, Serialize)]
pub struct PlaceEnvelope {
    pub place: Place,
}

/// `{ "places": [Place] }`
#[derive(Debug, Serialize)]
pub struct PlacesEnvelope {
    pub places: Vec<Place>,
}

/// `{ "user": User }`
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// `{ "users": [User] }`
#[derive(Debug, Serialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserResponse>,
}

/// `{ "message": "..." }`
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
}

/// `{ "placeId": 1, "message": "place deleted" }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDeletedEnvelope {
    pub place_id: DbId,
    pub message: &'static str,
}
