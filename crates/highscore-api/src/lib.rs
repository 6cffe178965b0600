//! Leaderboard API server for Highscore.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /api/leaderboard`** -- the top 10 scores, descending
//! - **`POST /api/score`** -- submit a score for a handle
//! - **Minimal HTML landing page** (`GET /`) showing the storage mode and
//!   links to the API endpoints
//!
//! # Architecture
//!
//! Handlers are thin translations between HTTP and the
//! [`ScoreBackend`](highscore_db::ScoreBackend) selected once at startup:
//! durable `PostgreSQL` when it was reachable, the in-memory fallback
//! leaderboard otherwise. Validation failures are rejected before any
//! store access; store faults surface as opaque 500 responses.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::ApiConfig;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
