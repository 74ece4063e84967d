//! Shared application state for all routes.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Each request acquires its own connection for the duration of one statement.
    pub pool: PgPool,
}
