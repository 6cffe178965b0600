//! Error types for the leaderboard API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! response bodies are fixed strings: store fault detail is logged on the
//! server and never reaches the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use highscore_db::DbError;

/// Errors that can occur in the leaderboard API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The submission was missing its handle or its score.
    #[error("handle and score are required")]
    Validation,

    /// The durable store failed while reading the leaderboard.
    #[error("failed to fetch leaderboard: {0}")]
    Fetch(#[source] DbError),

    /// The durable store failed while saving a score.
    #[error("failed to save score: {0}")]
    Save(#[source] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation => (StatusCode::BAD_REQUEST, "Handle and score are required"),
            Self::Fetch(e) => {
                tracing::error!(error = %e, "Leaderboard query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch leaderboard")
            }
            Self::Save(e) => {
                tracing::error!(error = %e, "Score submission failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save score")
            }
        };

        let body = serde_json::json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
