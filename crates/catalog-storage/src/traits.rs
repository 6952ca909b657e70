//! The [`ProductStore`] trait defining the record-store contract.
//!
//! Each method is a single independent operation; no transaction spans two
//! calls. Both backends (InMemoryStore, SqliteStore) implement this trait and
//! are swappable without changing the HTTP layer.

use crate::error::StorageError;
use crate::types::{Product, ProductDraft, ProductId};

/// The storage contract for product records.
///
/// The trait is synchronous; callers that share a store across tasks wrap it
/// in a mutex.
pub trait ProductStore {
    /// Lists all products in ascending id order.
    fn list_products(&self) -> Result<Vec<Product>, StorageError>;

    /// Retrieves a product by ID.
    ///
    /// Returns [`StorageError::ProductNotFound`] if no row matches.
    fn get_product(&self, id: ProductId) -> Result<Product, StorageError>;

    /// Inserts a new product and returns it with its assigned ID.
    fn create_product(&mut self, draft: ProductDraft) -> Result<Product, StorageError>;

    /// Overwrites name, seller and price of the product with the given ID.
    ///
    /// Does not check that the product existed: updating a missing ID
    /// changes nothing and still returns the requested record.
    fn update_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, StorageError>;

    /// Deletes the product with the given ID. Deleting a missing ID is not
    /// an error.
    fn delete_product(&mut self, id: ProductId) -> Result<(), StorageError>;

    /// Deletes every product and resets the identity counter, so the next
    /// insert is assigned ID 1.
    fn delete_all_products(&mut self) -> Result<(), StorageError>;
}
