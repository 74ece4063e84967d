#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use personajes_service::{app, AppState, ServiceConfig};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Build a test `ServiceConfig`; the database URL is only used by the lazy pool.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        database_url: "postgres://postgres@127.0.0.1:1/unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origin: TEST_ORIGIN.to_string(),
        max_connections: 1,
        acquire_timeout_secs: 1,
        body_limit_bytes: 64 * 1024,
    }
}

/// Full router with the production middleware stack over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    app(AppState { pool }, &test_config()).unwrap()
}

/// Router whose pool never connects. Only for requests that must not reach storage.
pub fn build_offline_app() -> Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&config.database_url)
        .unwrap();
    build_test_app(pool)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
