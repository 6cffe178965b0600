//! In-memory fallback leaderboard.
//!
//! Used for the whole process lifetime when `PostgreSQL` is unreachable at
//! startup. Holds an ordered sequence of score entries behind a
//! [`tokio::sync::RwLock`]; request handlers run on parallel tokio workers,
//! so every read-reconcile-truncate step happens inside one lock guard.
//!
//! The sequence is re-sorted descending and truncated to
//! [`LEADERBOARD_SIZE`] after every submission, including ones that change
//! nothing. Contents are lost on process restart.

use chrono::Utc;
use tokio::sync::RwLock;

use crate::entry::{LeaderboardEntry, ScoreEntry, LEADERBOARD_SIZE};

/// Process-local leaderboard used when no durable store is available.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    /// Entries sorted descending by score, at most [`LEADERBOARD_SIZE`].
    entries: RwLock<Vec<ScoreEntry>>,
}

impl MemoryScoreStore {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Return the highest `limit` scores, descending.
    pub async fn top(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let entries = self.entries.read().await;
        entries.iter().take(limit).map(LeaderboardEntry::from).collect()
    }

    /// Reconcile a submission for `handle`.
    ///
    /// Same semantics as the durable store: insert when the handle is new,
    /// replace score and timestamp when the new score is strictly higher,
    /// no-op otherwise. Returns `true` when the stored score changed.
    pub async fn submit(&self, handle: &str, score: f64) -> bool {
        let mut entries = self.entries.write().await;

        let applied = match entries.iter_mut().find(|e| e.handle == handle) {
            Some(existing) => {
                if score > existing.score {
                    existing.score = score;
                    existing.recorded_at = Utc::now();
                    true
                } else {
                    false
                }
            }
            None => {
                entries.push(ScoreEntry::new(handle, score));
                true
            }
        };

        // Restore the ordering invariant after every submission, even a
        // no-op: sort descending, keep the top entries.
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries.truncate(LEADERBOARD_SIZE);

        applied
    }
}
