//! `GET /health`: liveness plus a snapshot of the Postgres pool.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PoolSnapshot {
    pub open: u32,
    pub idle: usize,
    pub max: u32,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub pool: PoolSnapshot,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match places_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool: PoolSnapshot {
            open: state.pool.size(),
            idle: state.pool.num_idle(),
            max: state.config.database_max_connections,
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
