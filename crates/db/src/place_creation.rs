//! The place-creation transaction.
//!
//! Creating a place is the only write that touches two tables: the new
//! `places` row and the owner's `users.places` list. Both writes share one
//! [`sqlx::Transaction`]. Any early return drops the transaction before
//! `commit()`, which rolls it back, so either both writes land or neither
//! does.

use places_core::types::DbId;
use sqlx::PgPool;

use crate::models::place::{CreatePlace, Place};
use crate::repositories::{PlaceRepo, UserRepo};

/// Failure modes of [`create_place_for_user`].
///
/// Lookup failures are kept apart from transaction failures so the caller
/// can tell "no such user" from "database unavailable". Everything that
/// goes wrong once the transaction is open collapses into [`Transaction`].
///
/// [`Transaction`]: CreatePlaceError::Transaction
#[derive(Debug, thiserror::Error)]
pub enum CreatePlaceError {
    #[error("creator {0} does not exist")]
    CreatorNotFound(DbId),

    #[error("failed to look up creator: {0}")]
    CreatorLookup(#[source] sqlx::Error),

    #[error("creator {0} disappeared before the place could be attached")]
    CreatorGone(DbId),

    #[error("place creation transaction failed: {0}")]
    Transaction(#[from] sqlx::Error),
}

/// Persist a new place and append its id to the creator's place list.
///
/// 1. Look up the creator outside the transaction.
/// 2. Open a transaction.
/// 3. Insert the place.
/// 4. Append the new id to `users.places`.
/// 5. Commit.
pub async fn create_place_for_user(
    pool: &PgPool,
    input: &CreatePlace,
) -> Result<Place, CreatePlaceError> {
    let creator = UserRepo::find_by_id(pool, input.creator)
        .await
        .map_err(CreatePlaceError::CreatorLookup)?
        .ok_or(CreatePlaceError::CreatorNotFound(input.creator))?;

    let mut tx = pool.begin().await?;

    let place = PlaceRepo::create(&mut *tx, input).await?;

    if !UserRepo::append_place(&mut *tx, creator.id, place.id).await? {
        return Err(CreatePlaceError::CreatorGone(creator.id));
    }

    tx.commit().await?;

    tracing::info!(place_id = place.id, user_id = creator.id, "Place created");
    Ok(place)
}
