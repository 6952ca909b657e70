//! Storage layer for the product catalog.
//!
//! Provides the [`ProductStore`] trait defining the record-store contract,
//! plus the [`SqliteStore`] and [`InMemoryStore`] backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: ProductId, ProductDraft, Product record types
//! - [`traits`]: ProductStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup and connection configuration
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ProductStore;
pub use types::{Product, ProductDraft, ProductId};
