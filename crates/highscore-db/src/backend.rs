//! Startup-time store selection and unified dispatch.
//!
//! [`ScoreBackend::select`] is the persistence selector: it attempts one
//! `PostgreSQL` connection when the process starts and the outcome stands
//! for the process lifetime. There is no retry loop and no reconnection --
//! a database that becomes reachable later is not picked up until restart.
//! Selection never fails: the in-memory leaderboard is always available,
//! so the HTTP listener starts regardless of the outcome.

use crate::entry::LeaderboardEntry;
use crate::error::DbError;
use crate::memory_store::MemoryScoreStore;
use crate::postgres::{mask_credentials, PostgresPool};
use crate::score_store::ScoreStore;

/// The store selected at startup, fixed for the process lifetime.
pub enum ScoreBackend {
    /// Durable mode: scores live in the `scores` table.
    Postgres(PostgresPool),
    /// Fallback mode: scores live in a process-local list and are lost on
    /// restart.
    Memory(MemoryScoreStore),
}

impl ScoreBackend {
    /// Decide once whether a durable store is available.
    ///
    /// Attempts to connect to `PostgreSQL` at `database_url` and run
    /// migrations. On success the durable backend is selected and the
    /// target is logged with credentials masked. On any failure
    /// (unreachable, bad URL, failed migration) the in-memory backend is
    /// selected with a warning; the failure is never fatal.
    pub async fn select(database_url: &str) -> Self {
        let target = mask_credentials(database_url);

        let pool = match PostgresPool::connect_url(database_url).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!(
                    url = %target,
                    error = %e,
                    "PostgreSQL connection failed, running in IN-MEMORY mode"
                );
                tracing::warn!("Scores will NOT be saved to the database");
                return Self::Memory(MemoryScoreStore::new());
            }
        };

        // A pool without the scores schema is as unusable as no pool at
        // all, so a failed migration also falls back to memory.
        if let Err(e) = pool.run_migrations().await {
            tracing::warn!(
                url = %target,
                error = %e,
                "PostgreSQL migration failed, running in IN-MEMORY mode"
            );
            tracing::warn!("Scores will NOT be saved to the database");
            return Self::Memory(MemoryScoreStore::new());
        }

        tracing::info!(url = %target, "Leaderboard storage is durable");
        Self::Postgres(pool)
    }

    /// Whether the durable store was selected at startup.
    pub const fn is_durable(&self) -> bool {
        matches!(self, Self::Postgres(_))
    }

    /// Return the highest `limit` scores, descending, from the selected
    /// store.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the durable query fails. There is no
    /// per-request fallback: a fault in durable mode surfaces to the
    /// caller instead of silently switching stores.
    pub async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        match self {
            Self::Postgres(pool) => ScoreStore::new(pool.pool()).top(limit).await,
            Self::Memory(store) => Ok(store.top(limit).await),
        }
    }

    /// Reconcile a submission for `handle` against the selected store.
    ///
    /// Insert, replace, and non-improving no-op all succeed; the caller is
    /// not told which happened.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the durable statement fails. The in-memory
    /// path cannot fail.
    pub async fn submit(&self, handle: &str, score: f64) -> Result<(), DbError> {
        let applied = match self {
            Self::Postgres(pool) => ScoreStore::new(pool.pool()).submit(handle, score).await?,
            Self::Memory(store) => store.submit(handle, score).await,
        };

        tracing::debug!(handle, score, applied, "Score submitted");
        Ok(())
    }
}
