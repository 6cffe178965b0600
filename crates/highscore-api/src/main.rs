//! Leaderboard service binary for Highscore.
//!
//! Wires together configuration, storage selection, and the HTTP server.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment (`HOST`, `PORT`,
//!    `DATABASE_URL`)
//! 3. Select the storage backend: one `PostgreSQL` connection attempt,
//!    falling back to the in-memory leaderboard -- never fatal
//! 4. Serve HTTP until terminated

use std::sync::Arc;

use highscore_api::{start_server, ApiConfig, AppState, ServerConfig};
use highscore_db::ScoreBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point for the leaderboard service.
///
/// # Errors
///
/// Returns an error if the HTTP listener cannot bind or the server
/// encounters a fatal I/O error. Storage selection never fails startup.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("highscore-api starting");

    // 2. Load configuration.
    let config = ApiConfig::from_env();
    info!(
        host = config.host,
        port = config.port,
        "Configuration loaded"
    );

    // 3. Select the storage backend. The listener starts regardless of
    //    the outcome; an unreachable database only costs durability.
    let backend = ScoreBackend::select(&config.database_url).await;
    let state = Arc::new(AppState::new(backend));

    // 4. Serve.
    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    info!("highscore-api shutdown complete");

    Ok(())
}
