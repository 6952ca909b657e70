//! Product request types.

use catalog_storage::ProductDraft;
use serde::Deserialize;

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
///
/// Missing fields decode to zero values (empty strings, `0.0`) instead of
/// failing. Unknown keys, including a client-sent `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub name: String,
    pub seller: String,
    pub price: f64,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        ProductDraft {
            name: req.name,
            seller: req.seller,
            price: req.price,
        }
    }
}
