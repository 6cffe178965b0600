//! Shared application state for the leaderboard API server.
//!
//! [`AppState`] holds the storage backend selected once at startup.
//! Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
//! extractor; the backend itself carries any interior locking it needs,
//! so handlers only ever take `&self`.

use highscore_db::{MemoryScoreStore, ScoreBackend};

/// Shared state for the Axum application.
pub struct AppState {
    /// The storage backend selected at startup, fixed for the process
    /// lifetime.
    pub backend: ScoreBackend,
}

impl AppState {
    /// Create application state around an already-selected backend.
    pub const fn new(backend: ScoreBackend) -> Self {
        Self { backend }
    }

    /// Create application state with an empty in-memory leaderboard.
    ///
    /// Used in tests and wherever a durable store is knowingly absent.
    pub fn in_memory() -> Self {
        Self {
            backend: ScoreBackend::Memory(MemoryScoreStore::new()),
        }
    }
}
