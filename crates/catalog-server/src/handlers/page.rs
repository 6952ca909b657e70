//! Static page handlers.
//!
//! The page and its client script are plain assets embedded at compile time;
//! the server's only contract with them is the JSON API.

use axum::http::header;
use axum::response::{Html, IntoResponse};

/// Serves the catalog page.
///
/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Serves the page's client JavaScript.
///
/// `GET /app.js`
pub async fn app_js() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        include_str!("../../static/app.js"),
    )
}

/// Serves the page's stylesheet.
///
/// `GET /styles.css`
pub async fn styles_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/styles.css"),
    )
}
