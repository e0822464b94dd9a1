pub mod health;
pub mod places;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /places/user/{uid}                               list places by creator
/// /places                                          create
/// /places/{pid}                                    get, update (PATCH), delete
///
/// /users                                           list
/// /users/signup                                    signup (POST)
/// /users/login                                     login (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/places", places::router())
        .nest("/users", users::router())
}
