//! Probes for load balancers and deploy scripts.

use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
pub struct Probe {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
}

#[derive(Serialize, Debug)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl Probe {
    /// Readiness verdict for a database that did or did not answer.
    pub fn readiness(database_up: bool) -> (StatusCode, Self) {
        if database_up {
            (StatusCode::OK, Probe { status: "ok", database: Some("ok") })
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Probe { status: "degraded", database: Some("unavailable") },
            )
        }
    }
}

/// Process is up; storage is not consulted.
pub async fn health() -> Json<Probe> {
    Json(Probe { status: "ok", database: None })
}

pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Probe>) {
    let up = store::ping(&state.pool).await;
    if !up {
        tracing::warn!("readiness check failed: database unavailable");
    }
    let (status, probe) = Probe::readiness(up);
    (status, Json(probe))
}

pub async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
