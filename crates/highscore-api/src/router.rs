//! Axum router construction for the leaderboard API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so browser-hosted game clients on other origins can read and
//! submit scores.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the leaderboard server.
///
/// The router includes:
/// - `GET /` -- minimal HTML landing page
/// - `GET /api/leaderboard` -- top 10 scores, descending
/// - `POST /api/score` -- submit a score for a handle
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Landing page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .route("/api/score", post(handlers::submit_score))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
