//! Server binary: reads config, opens the pool, ensures the table, serves the API.

use personajes_service::{app, connect, ensure_personajes_table, AppState, ServiceConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("personajes_service=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let pool = connect(&config).await?;
    tracing::info!(max_connections = config.max_connections, "database pool created");
    ensure_personajes_table(&pool).await?;

    let router = app(AppState { pool }, &config)?;
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
