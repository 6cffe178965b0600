//! Score records: the stored form and the wire-level projection.
//!
//! Both storage modes hold at most one entry per distinct handle; the
//! handle is the unique key, not a row id. Responses only ever carry the
//! `{handle, score}` pair -- the recorded-at timestamp stays internal.

use chrono::{DateTime, Utc};

/// Number of entries the leaderboard keeps and serves.
///
/// The in-memory fallback truncates to this size after every submission;
/// the API serves at most this many rows from the durable store.
pub const LEADERBOARD_SIZE: usize = 10;

/// A stored score record for one handle.
#[derive(Debug, Clone)]
pub struct ScoreEntry {
    /// Player-chosen display name, unique within the leaderboard.
    pub handle: String,
    /// Best score submitted for this handle so far.
    pub score: f64,
    /// When the current best score was submitted.
    pub recorded_at: DateTime<Utc>,
}

impl ScoreEntry {
    /// Create an entry recorded at the current time.
    pub fn new(handle: &str, score: f64) -> Self {
        Self {
            handle: handle.to_owned(),
            score,
            recorded_at: Utc::now(),
        }
    }
}

/// The `{handle, score}` pair served to clients.
///
/// Durable and in-memory modes both project to this shape, so callers see
/// structurally identical output regardless of the selected backend.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    /// Player-chosen display name.
    pub handle: String,
    /// Best score submitted for this handle.
    pub score: f64,
}

impl From<&ScoreEntry> for LeaderboardEntry {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            handle: entry.handle.clone(),
            score: entry.score,
        }
    }
}
