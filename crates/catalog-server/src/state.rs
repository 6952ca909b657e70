//! Application state with a shared product store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. `rusqlite::Connection` is `!Sync`, so the store cannot sit
//! behind an `RwLock`; handlers hold the async mutex for a single store call.

use std::sync::Arc;

use catalog_storage::SqliteStore;

use crate::error::ApiError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared product store (async Mutex -- non-blocking await).
    pub store: Arc<tokio::sync::Mutex<SqliteStore>>,
}

impl AppState {
    /// Creates a new `AppState` backed by the SQLite database at `db_path`,
    /// creating the schema if needed.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path).map_err(|e| {
            ApiError::InternalError(format!("failed to open store at {}: {}", db_path, e))
        })?;
        Ok(Self::from_store(store))
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| ApiError::InternalError(format!("failed to open test store: {}", e)))?;
        Ok(Self::from_store(store))
    }

    fn from_store(store: SqliteStore) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }
}
