//! Route definitions for the `/places` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::places;
use crate::state::AppState;

/// Routes mounted at `/places`.
///
/// ```text
/// GET    /user/{uid}     -> list_by_user
/// POST   /               -> create
/// GET    /{pid}          -> get_by_id
/// PATCH  /{pid}          -> update
/// DELETE /{pid}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(places::create))
        .route("/user/{uid}", get(places::list_by_user))
        .route(
            "/{pid}",
            get(places::get_by_id)
                .patch(places::update)
                .delete(places::delete),
        )
}
