//! HTTP handler modules for the catalog API.
//!
//! Handlers are thin: they parse the request, acquire the store lock, make
//! one store call, and return a JSON response. No business logic lives here.

pub mod page;
pub mod products;

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::error::ApiError;

/// Fallback for any path/method pair without a route.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("no route for {} {}", method, uri.path()))
}
