//! Character routes, all under the single `/personajes` prefix.
//! The static `/formato` segment takes precedence over the `:id` parameter.

use crate::handlers::personajes::{create, delete as delete_handler, export, list, update};
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn personajes_routes(state: AppState) -> Router {
    Router::new()
        .route("/personajes", get(list).post(create).delete(delete_handler))
        .route("/personajes/formato", post(export))
        .route("/personajes/:id", patch(update))
        .with_state(state)
}
