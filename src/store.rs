//! Pool construction and the `personajes` table DDL.

use crate::config::ServiceConfig;
use crate::sql::TABLE;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Connection pool sized and bounded from config. Acquisition times out instead of hanging.
pub async fn connect(config: &ServiceConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// Create the character table if it does not exist. The four field columns are NOT NULL,
/// so an insert missing any of them is refused by the database.
pub async fn ensure_personajes_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            casa TEXT NOT NULL,
            descripcion TEXT NOT NULL,
            rol TEXT NOT NULL
        )
        "#,
        TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = TABLE, "table ready");
    Ok(())
}

/// True when the database answers `SELECT 1`.
pub async fn ping(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").fetch_optional(pool).await.is_ok()
}
