use std::sync::Arc;

use places_core::geocode::Geocoder;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: places_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Address resolver used when creating places.
    pub geocoder: Arc<dyn Geocoder>,
}
