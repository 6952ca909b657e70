//! Product CRUD handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use catalog_storage::{Product, ProductId, ProductStore};

use crate::error::ApiError;
use crate::schema::products::ProductRequest;
use crate::state::AppState;

/// Lists all products in id order.
///
/// `GET /api/products`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let store = state.store.lock().await;
    let products = store.list_products()?;
    Ok(Json(products))
}

/// Creates a product and returns it with its assigned id.
///
/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(req) = payload?;
    let mut store = state.store.lock().await;
    let product = store.create_product(req.into())?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Deletes every product and resets the identity counter.
///
/// `DELETE /api/products`
pub async fn delete_all_products(
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.lock().await;
    store.delete_all_products()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetches one product.
///
/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id: ProductId = id.parse()?;
    let store = state.store.lock().await;
    let product = store.get_product(id)?;
    Ok(Json(product))
}

/// Overwrites name, seller and price. The id in the response is the one
/// from the path, whether or not a row existed.
///
/// `PUT /api/products/{id}`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id: ProductId = id.parse()?;
    let Json(req) = payload?;
    let mut store = state.store.lock().await;
    let product = store.update_product(id, req.into())?;
    Ok(Json(product))
}

/// Deletes one product; succeeds even if it did not exist.
///
/// `DELETE /api/products/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: ProductId = id.parse()?;
    let mut store = state.store.lock().await;
    store.delete_product(id)?;
    Ok(StatusCode::NO_CONTENT)
}
