//! foody-backend server: reads settings, opens the PostgreSQL pool, serves the API.

use foody_backend::{app, AppState, PgStore, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("foody_backend=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = PgStore::connect(&config).await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");

    let app = app(AppState::new(store));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
