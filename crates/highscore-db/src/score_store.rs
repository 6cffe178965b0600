//! Durable score reconciliation and top-N queries.
//!
//! The `scores` table holds one row per handle. Submissions are reconciled
//! with a single atomic upsert: insert when the handle is new, replace the
//! stored score and timestamp when the new score is strictly higher, leave
//! the row untouched otherwise. Running the comparison inside the statement
//! means two concurrent submissions for the same handle cannot lose the
//! higher score to a stale read.

use sqlx::PgPool;

use crate::entry::LeaderboardEntry;
use crate::error::DbError;

/// Operations on the `scores` table.
pub struct ScoreStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreStore<'a> {
    /// Create a new score store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Return the highest `limit` scores, descending.
    ///
    /// Only the `{handle, score}` projection is selected; row timestamps
    /// never leave the store.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, LeaderboardEntry>(
            r"SELECT handle, score
              FROM scores
              ORDER BY score DESC
              LIMIT $1",
        )
        .bind(limit_i64)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Reconcile a submission for `handle`.
    ///
    /// Inserts a new row, or replaces the stored score and timestamp when
    /// the new score is strictly higher. A non-improving submission leaves
    /// the row unchanged and is not an error.
    ///
    /// Returns `true` when the stored score changed (insert or replace).
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the statement fails.
    pub async fn submit(&self, handle: &str, score: f64) -> Result<bool, DbError> {
        let result = sqlx::query(
            r"INSERT INTO scores (handle, score, recorded_at)
              VALUES ($1, $2, now())
              ON CONFLICT (handle) DO UPDATE
              SET score = EXCLUDED.score, recorded_at = EXCLUDED.recorded_at
              WHERE scores.score < EXCLUDED.score",
        )
        .bind(handle)
        .bind(score)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
