//! Data layer for the Highscore leaderboard (`PostgreSQL` + in-memory fallback).
//!
//! `PostgreSQL` is the durable store for submitted scores. When it is not
//! reachable at startup the service falls back to a process-local, in-memory
//! leaderboard capped at the top 10 entries. The choice between the two is
//! made exactly once, by [`ScoreBackend::select`], and holds for the life of
//! the process.
//!
//! # Architecture
//!
//! ```text
//! Startup
//!     |
//!     +-- ScoreBackend::select(url)
//!         |-- connect + migrate OK --> Postgres (ScoreStore over PgPool)
//!         +-- otherwise ------------> Memory   (MemoryScoreStore)
//!
//! Requests
//!     |
//!     +-- top(n)            (read, sorted descending by score)
//!     +-- submit(handle, s) (strictly-greater-wins reconciliation)
//! ```
//!
//! # Modules
//!
//! - [`backend`] -- startup-time store selection and unified dispatch
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`score_store`] -- durable score reconciliation and top-N query
//! - [`memory_store`] -- in-memory fallback leaderboard
//! - [`entry`] -- stored and wire-level score records
//! - [`error`] -- shared error types

pub mod backend;
pub mod entry;
pub mod error;
pub mod memory_store;
pub mod postgres;
pub mod score_store;

// Re-export primary types for convenience.
pub use backend::ScoreBackend;
pub use entry::{LeaderboardEntry, ScoreEntry, LEADERBOARD_SIZE};
pub use error::DbError;
pub use memory_store::MemoryScoreStore;
pub use postgres::{mask_credentials, PostgresConfig, PostgresPool};
pub use score_store::ScoreStore;
