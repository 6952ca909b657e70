//! Router assembly for the catalog HTTP API.
//!
//! [`build_router`] wires the page and product handlers to their routes with
//! CORS and tracing middleware layers.

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Methods advertised to cross-origin callers.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Builds the complete axum router.
///
/// Routes use axum 0.8 `/{param}` path syntax. API routes live under `/api`
/// and every response there, including 404s, carries permissive CORS
/// headers. `OPTIONS` on any `/api/...` path is answered by the CORS layer
/// with an empty 200. Unknown paths and unsupported methods return 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::page::index).fallback(handlers::not_found),
        )
        .route("/app.js", get(handlers::page::app_js))
        .route("/styles.css", get(handlers::page::styles_css))
        .nest("/api", api_router())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Product routes plus the CORS layers that apply to all of them.
fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::products::list_products)
                .post(handlers::products::create_product)
                .delete(handlers::products::delete_all_products)
                .fallback(handlers::not_found),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(cors_layer())
        // CorsLayer only sends allow-methods/allow-headers on preflight.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE])
}
