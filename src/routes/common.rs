//! Common routes: health, readiness, version.

use crate::handlers::health::{health, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, GET /ready (database check), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
