#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use places_core::geocode::{FixedGeocoder, Geocoder};
use sqlx::PgPool;
use tower::ServiceExt;

use places_api::config::ServerConfig;
use places_api::router::build_app_router;
use places_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        google_api_key: None,
    }
}

/// Build the full application router, with the same middleware stack as
/// production, over the given pool and the fixed-point geocoder.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_geocoder(pool, Arc::new(FixedGeocoder::default()))
}

pub fn build_test_app_with_geocoder(pool: PgPool, geocoder: Arc<dyn Geocoder>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        geocoder,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Sign up a user through the API and return its id.
pub async fn signup_user(pool: &PgPool, email: &str, password: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/users/signup",
        serde_json::json!({
            "name": "Max",
            "email": email,
            "password": password,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "signup fixture failed");
    body_json(response).await["user"]["id"].as_i64().unwrap()
}

/// Create a place through the API and return its id.
pub async fn create_place(pool: &PgPool, creator: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/places",
        place_body(creator, title),
    )
    .await;
    assert_eq!(response.status(), 201, "create place fixture failed");
    body_json(response).await["place"]["id"].as_i64().unwrap()
}

pub fn place_body(creator: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "One of the most famous sky scrapers in the world",
        "address": "20 W 34th St, New York, NY 10001",
        "creator": creator,
    })
}

pub async fn count_places(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
