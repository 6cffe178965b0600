//! REST API endpoint handlers for the leaderboard server.
//!
//! All handlers go through the [`ScoreBackend`](highscore_db::ScoreBackend)
//! held in the shared [`AppState`]; none of them know (or care) whether it
//! is the durable store or the in-memory fallback.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML landing page |
//! | `GET` | `/api/leaderboard` | Top 10 scores, descending |
//! | `POST` | `/api/score` | Submit a score for a handle |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use highscore_db::LEADERBOARD_SIZE;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request body structs
// ---------------------------------------------------------------------------

/// Body of the `POST /api/score` endpoint.
///
/// Both fields are optional at the deserialization layer so that a missing
/// field becomes a validation failure (with the fixed 400 body) rather
/// than a rejected request. A score of `0` is valid; only absence is an
/// error.
#[derive(Debug, serde::Deserialize)]
pub struct ScoreSubmission {
    /// Player-chosen display name; required and non-empty.
    pub handle: Option<String>,
    /// The score to reconcile; required.
    pub score: Option<f64>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML landing page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing the storage mode and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let storage = if state.backend.is_durable() {
        "PostgreSQL"
    } else {
        "In-memory"
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Highscore</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .method {{ color: #7ee787; font-weight: bold; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Highscore</h1>
    <p class="subtitle">Leaderboard API server</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Storage</div>
            <div class="value">{storage}</div>
        </div>
        <div class="metric">
            <div class="label">Leaderboard size</div>
            <div class="value">{LEADERBOARD_SIZE}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><span class="method">GET</span> <a href="/api/leaderboard">/api/leaderboard</a> -- Top {LEADERBOARD_SIZE} scores, descending</li>
        <li><span class="method">POST</span> /api/score -- Submit {{"handle": "AAA", "score": 100}}</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/leaderboard -- top 10 scores
// ---------------------------------------------------------------------------

/// Return the top 10 scores as a JSON array of `{handle, score}` pairs,
/// descending by score. Both storage modes produce the same shape.
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state
        .backend
        .top(LEADERBOARD_SIZE)
        .await
        .map_err(ApiError::Fetch)?;

    Ok(Json(entries))
}

// ---------------------------------------------------------------------------
// POST /api/score -- submit a score
// ---------------------------------------------------------------------------

/// Reconcile a score submission for a handle.
///
/// Responds 201 whether the submission inserted a new entry, replaced a
/// lower stored score, or changed nothing because the stored score was
/// already at least as high -- the caller is not told which happened.
pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ScoreSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let handle = submission
        .handle
        .as_deref()
        .filter(|h| !h.is_empty())
        .ok_or(ApiError::Validation)?;
    let score = submission.score.ok_or(ApiError::Validation)?;

    state
        .backend
        .submit(handle, score)
        .await
        .map_err(ApiError::Save)?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Score saved successfully" })),
    ))
}
