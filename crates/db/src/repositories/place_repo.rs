//! Repository for the `places` table.

use places_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::place::{CreatePlace, Place, UpdatePlace};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, address, lat, lng, image, creator, created_at, updated_at";

/// Provides CRUD operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place, returning the created row.
    ///
    /// Takes a connection rather than the pool so it can run inside the
    /// place-creation transaction.
    pub async fn create(conn: &mut PgConnection, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (title, description, address, lat, lng, image, creator)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.address)
            .bind(input.location.lat)
            .bind(input.location.lng)
            .bind(&input.image)
            .bind(input.creator)
            .fetch_one(conn)
            .await
    }

    /// Find a place by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every place created by the given user, oldest first.
    pub async fn list_by_creator(pool: &PgPool, creator: DbId) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE creator = $1 ORDER BY id");
        sqlx::query_as::<_, Place>(&query)
            .bind(creator)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the title and description of a place.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlace,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET title = $2, description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a place by ID. Returns `true` if a row was removed.
    ///
    /// The owning user's `places` list is left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
