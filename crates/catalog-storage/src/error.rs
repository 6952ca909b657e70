//! Storage error types for catalog-storage.
//!
//! [`StorageError`] covers the failure modes of the record store: driver
//! errors, schema migration failures, missing rows and unparseable ids.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite driver reported an error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// No product with the given ID exists.
    #[error("product not found: {0}")]
    ProductNotFound(i64),

    /// A caller-supplied product ID is not a valid integer.
    #[error("invalid product id: {0:?}")]
    InvalidId(String),
}
