//! Router assembly and the middleware stack shared by the binary and tests.

mod common;
mod personajes;

pub use common::common_routes;
pub use personajes::personajes_routes;

use crate::config::ServiceConfig;
use crate::error::ConfigError;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// CORS for the one configured front-end origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
        key: "CORS_ORIGIN",
        value: origin.to_string(),
    })?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Full application: probes plus character routes, with tracing, body limit and CORS.
/// Oversized bodies surface through the extractor rejection, so they get the JSON error envelope.
pub fn app(state: AppState, config: &ServiceConfig) -> Result<Router, ConfigError> {
    Ok(Router::new()
        .merge(common_routes(state.clone()))
        .merge(personajes_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors_layer(&config.cors_origin)?))
}
