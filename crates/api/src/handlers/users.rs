//! Handlers for the `/users` resource (list, signup, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use places_core::types::DbId;
use places_db::models::user::{CreateUser, UserResponse, DEFAULT_USER_IMAGE};
use places_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{MessageEnvelope, UserEnvelope, UsersEnvelope};
use crate::state::AppState;

const SIGNUP_FAILED: &str = "Signing up failed, please try again.";
const LOGIN_FAILED: &str = "Logging in failed, please try again later";
const WRONG_CREDENTIALS: &str = "Could not login, wrong email or password";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/users/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[serde(default)]
    pub places: Vec<DbId>,
}

/// Request body for `POST /api/users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<UsersEnvelope>> {
    let users = UserRepo::list(&state.pool)
        .await
        .map_err(|e| AppError::internal("Fetching users failed, please try again later", e))?;

    Ok(Json(UsersEnvelope {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// POST /api/users/signup
///
/// Email uniqueness is checked before insert; the `uq_users_email`
/// constraint catches a concurrent duplicate as an insert failure.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserEnvelope>)> {
    input.validate().map_err(|errors| {
        tracing::debug!(%errors, "Rejected signup payload");
        AppError::validation("Wrong user data provided. Please enter valid data")
    })?;

    let existing = UserRepo::find_by_email(&state.pool, &input.email)
        .await
        .map_err(|e| AppError::internal("Signing up failed, please try again later", e))?;

    if existing.is_some() {
        return Err(AppError::validation(
            "User already exists, please use different email",
        ));
    }

    let password_hash =
        hash_password(&input.password).map_err(|e| AppError::internal(SIGNUP_FAILED, e))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            image: DEFAULT_USER_IMAGE.to_string(),
            password_hash,
            places: input.places,
        },
    )
    .await
    .map_err(|e| AppError::internal(SIGNUP_FAILED, e))?;

    tracing::info!(user_id = user.id, "User signed up");
    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            user: UserResponse::from(user),
        }),
    ))
}

/// POST /api/users/login
///
/// Unknown email and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<MessageEnvelope>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await
        .map_err(|e| AppError::internal(LOGIN_FAILED, e))?
        .ok_or_else(|| AppError::unauthorized(WRONG_CREDENTIALS))?;

    let valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::internal(LOGIN_FAILED, e))?;

    if !valid {
        tracing::debug!(user_id = user.id, "Password mismatch");
        return Err(AppError::unauthorized(WRONG_CREDENTIALS));
    }

    Ok(Json(MessageEnvelope {
        message: "Logged in!",
    }))
}
