//! Handlers for the `/places` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use places_core::geocode::GeocodeError;
use places_core::types::DbId;
use places_db::models::place::{CreatePlace, UpdatePlace, DEFAULT_PLACE_IMAGE};
use places_db::place_creation::{create_place_for_user, CreatePlaceError};
use places_db::repositories::PlaceRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{PlaceDeletedEnvelope, PlaceEnvelope, PlacesEnvelope};
use crate::state::AppState;

const INVALID_PLACE_DATA: &str = "Wrong place data provided. Please enter valid data";
const CREATE_FAILED: &str = "Creating place failed, please try again";
const UPDATE_FAILED: &str = "Something went wrong, could not update place";
const DELETE_FAILED: &str = "Something went wrong, cannot delete place";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/places`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 5))]
    pub description: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub creator: DbId,
}

/// Request body for `PATCH /api/places/{pid}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 5))]
    pub description: String,
}

fn check<T: Validate>(input: &T) -> AppResult<()> {
    input.validate().map_err(|errors| {
        tracing::debug!(%errors, "Rejected place payload");
        AppError::validation(INVALID_PLACE_DATA)
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/places/user/{uid}
///
/// An empty result is reported as 404 rather than an empty list.
pub async fn list_by_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<PlacesEnvelope>> {
    let places = PlaceRepo::list_by_creator(&state.pool, user_id)
        .await
        .map_err(|e| AppError::internal("Something went wrong, could not find places", e))?;

    if places.is_empty() {
        return Err(AppError::not_found(
            "Could not find places for the provided user id",
        ));
    }

    Ok(Json(PlacesEnvelope { places }))
}

/// GET /api/places/{pid}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<PlaceEnvelope>> {
    let place = PlaceRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|e| AppError::internal("Something went wrong, could not find place", e))?
        .ok_or_else(|| AppError::not_found("Could not find a place for the provided place id"))?;

    Ok(Json(PlaceEnvelope { place }))
}

/// POST /api/places
///
/// Geocodes the address, then runs the place-creation transaction that
/// inserts the place and appends it to the creator's place list.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePlaceRequest>,
) -> AppResult<(StatusCode, Json<PlaceEnvelope>)> {
    check(&input)?;

    let coordinates = state
        .geocoder
        .locate(&input.address)
        .await
        .map_err(|e| match e {
            GeocodeError::NoResults(_) => {
                AppError::validation("Could not find location for the specified address.")
            }
            GeocodeError::Request(_) => {
                AppError::internal("Could not find location for the specified address.", e)
            }
        })?;

    let new_place = CreatePlace {
        title: input.title,
        description: input.description,
        address: input.address,
        location: coordinates.into(),
        image: DEFAULT_PLACE_IMAGE.to_string(),
        creator: input.creator,
    };

    let place = create_place_for_user(&state.pool, &new_place)
        .await
        .map_err(|e| match e {
            CreatePlaceError::CreatorNotFound(_) => {
                AppError::not_found("Cannot find user for provided id")
            }
            CreatePlaceError::CreatorLookup(_)
            | CreatePlaceError::CreatorGone(_)
            | CreatePlaceError::Transaction(_) => AppError::internal(CREATE_FAILED, e),
        })?;

    Ok((StatusCode::CREATED, Json(PlaceEnvelope { place })))
}

/// PATCH /api/places/{pid}
///
/// Overwrites title and description. A missing place is a 500, not a 404:
/// the update is attempted without checking existence first.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdatePlaceRequest>,
) -> AppResult<Json<PlaceEnvelope>> {
    check(&input)?;

    let changes = UpdatePlace {
        title: input.title,
        description: input.description,
    };

    let place = PlaceRepo::update(&state.pool, id, &changes)
        .await
        .map_err(|e| AppError::internal(UPDATE_FAILED, e))?
        .ok_or_else(|| AppError::internal(UPDATE_FAILED, format!("place {id} does not exist")))?;

    Ok(Json(PlaceEnvelope { place }))
}

/// DELETE /api/places/{pid}
///
/// No ownership check, and the id stays in the creator's place list.
/// Deleting a missing place is a 500.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<PlaceDeletedEnvelope>> {
    let deleted = PlaceRepo::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::internal(DELETE_FAILED, e))?;

    if !deleted {
        return Err(AppError::internal(
            DELETE_FAILED,
            format!("place {id} does not exist"),
        ));
    }

    tracing::info!(place_id = id, "Place deleted");
    Ok(Json(PlaceDeletedEnvelope {
        place_id: id,
        message: "place deleted",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_fails_validation() {
        let input = UpdatePlaceRequest {
            title: "Tower".into(),
            description: "tiny".into(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_title_or_address_fails_validation() {
        let input = CreatePlaceRequest {
            title: String::new(),
            description: "Long enough".into(),
            address: String::new(),
            creator: 1,
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("address"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn complete_place_passes_validation() {
        let input = CreatePlaceRequest {
            title: "Empire State Building".into(),
            description: "A famous sky scraper".into(),
            address: "20 W 34th St".into(),
            creator: 1,
        };
        assert!(input.validate().is_ok());
    }
}
