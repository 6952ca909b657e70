//! Record types for the product catalog.
//!
//! [`ProductId`] is the store-assigned identity, [`ProductDraft`] carries the
//! mutable fields for create and update, and [`Product`] is a stored record.
//! [`Product`] serializes with the same field names the JSON API uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Unique identifier for a stored product.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`. Serializes as
/// a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = StorageError;

    /// Parses a caller-supplied id, e.g. a URL path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(ProductId)
            .map_err(|_| StorageError::InvalidId(s.to_string()))
    }
}

/// The mutable fields of a product, used for create and update.
///
/// The store does not reject empty names or sellers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub seller: String,
    pub price: f64,
}

/// A stored product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the store on creation, immutable afterward.
    pub id: ProductId,
    pub name: String,
    pub seller: String,
    pub price: f64,
}

impl Product {
    /// Builds a record from an id and the draft fields.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Product {
            id,
            name: draft.name,
            seller: draft.seller,
            price: draft.price,
        }
    }
}
