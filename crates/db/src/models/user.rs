//! User entity model and DTOs.

use places_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Image assigned to every newly signed-up user.
pub const DEFAULT_USER_IMAGE: &str =
    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg";

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image: String,
    pub password_hash: String,
    /// Ids of places created by this user, in creation order.
    pub places: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image: String,
    pub places: Vec<DbId>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            places: user.places,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub image: String,
    pub password_hash: String,
    pub places: Vec<DbId>,
}
