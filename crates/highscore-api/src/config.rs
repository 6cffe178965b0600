//! Configuration for the leaderboard service.
//!
//! All configuration is loaded from environment variables, read once at
//! process startup. Every variable has a default so the service starts
//! with no environment at all (and then, with no database listening on
//! the default URL, falls back to the in-memory leaderboard).

/// Default TCP port for the HTTP listener.
const DEFAULT_PORT: u16 = 3000;

/// Default bind address.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default `PostgreSQL` connection URL (local standard endpoint).
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/highscore";

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// The host address to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// `PostgreSQL` connection URL for the durable score store.
    pub database_url: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables (all optional):
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listener port (default 3000)
    /// - `DATABASE_URL` -- `PostgreSQL` connection string (default
    ///   `postgres://localhost:5432/highscore`)
    ///
    /// An unparseable `PORT` falls back to the default with a warning
    /// rather than failing startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());
        let port = std::env::var("PORT").map_or(DEFAULT_PORT, |raw| parse_port(&raw));
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        Self {
            host,
            port,
            database_url,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
        }
    }
}

/// Parse a port number, falling back to the default on bad input.
fn parse_port(raw: &str) -> u16 {
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(raw, error = %e, "Invalid PORT value, using default");
        DEFAULT_PORT
    })
}
