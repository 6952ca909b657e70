//! SQLite implementation of [`ProductStore`].
//!
//! [`SqliteStore`] persists products in a single `products` table. Every
//! operation is one parameterized statement, except the bulk delete which
//! also resets the AUTOINCREMENT counter inside the same transaction.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::ProductStore;
use crate::types::{Product, ProductDraft, ProductId};

/// SQLite-backed implementation of [`ProductStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Maps a `SELECT id, name, seller, price` row to a [`Product`].
    fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
        Ok(Product {
            id: ProductId(row.get(0)?),
            name: row.get(1)?,
            seller: row.get(2)?,
            price: row.get(3)?,
        })
    }
}

impl ProductStore for SqliteStore {
    fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, seller, price FROM products ORDER BY id")?;
        let rows = stmt.query_map([], Self::product_from_row)?;

        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    fn get_product(&self, id: ProductId) -> Result<Product, StorageError> {
        self.conn
            .query_row(
                "SELECT id, name, seller, price FROM products WHERE id = ?1",
                params![id.0],
                Self::product_from_row,
            )
            .optional()?
            .ok_or(StorageError::ProductNotFound(id.0))
    }

    fn create_product(&mut self, draft: ProductDraft) -> Result<Product, StorageError> {
        self.conn.execute(
            "INSERT INTO products (name, seller, price) VALUES (?1, ?2, ?3)",
            params![draft.name, draft.seller, draft.price],
        )?;
        let id = ProductId(self.conn.last_insert_rowid());
        Ok(Product::from_draft(id, draft))
    }

    fn update_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, StorageError> {
        let changed = self.conn.execute(
            "UPDATE products SET name = ?1, seller = ?2, price = ?3 WHERE id = ?4",
            params![draft.name, draft.seller, draft.price, id.0],
        )?;
        if changed == 0 {
            tracing::debug!(product_id = id.0, "update matched no rows");
        }
        Ok(Product::from_draft(id, draft))
    }

    fn delete_product(&mut self, id: ProductId) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM products WHERE id = ?1", params![id.0])?;
        Ok(())
    }

    fn delete_all_products(&mut self) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM products", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'products'", [])?;
        tx.commit()?;

        tracing::info!(removed, "deleted all products and reset identity counter");
        Ok(())
    }
}
