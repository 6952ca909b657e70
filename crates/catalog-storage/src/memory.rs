//! In-memory implementation of [`ProductStore`].
//!
//! [`InMemoryStore`] keeps products in a `BTreeMap` keyed by id, so listing
//! is naturally in ascending id order. It mirrors SQLite's AUTOINCREMENT
//! behavior: ids are never reused until [`ProductStore::delete_all_products`]
//! resets the counter.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::ProductStore;
use crate::types::{Product, ProductDraft, ProductId};

/// In-memory product store with the same observable semantics as
/// [`SqliteStore`](crate::SqliteStore).
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: BTreeMap<i64, Product>,
    /// Highest id ever issued since the last reset.
    last_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryStore {
    fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.products.values().cloned().collect())
    }

    fn get_product(&self, id: ProductId) -> Result<Product, StorageError> {
        self.products
            .get(&id.0)
            .cloned()
            .ok_or(StorageError::ProductNotFound(id.0))
    }

    fn create_product(&mut self, draft: ProductDraft) -> Result<Product, StorageError> {
        self.last_id += 1;
        let product = Product::from_draft(ProductId(self.last_id), draft);
        self.products.insert(self.last_id, product.clone());
        Ok(product)
    }

    fn update_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, StorageError> {
        let product = Product::from_draft(id, draft);
        if let Some(existing) = self.products.get_mut(&id.0) {
            *existing = product.clone();
        }
        Ok(product)
    }

    fn delete_product(&mut self, id: ProductId) -> Result<(), StorageError> {
        self.products.remove(&id.0);
        Ok(())
    }

    fn delete_all_products(&mut self) -> Result<(), StorageError> {
        self.products.clear();
        self.last_id = 0;
        Ok(())
    }
}
