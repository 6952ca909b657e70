//! HTTP/JSON API server for the product catalog.
//!
//! Serves a small REST API over the `products` table plus a static HTML page
//! whose script is a client of that API. This crate contains the server
//! configuration, API schema types, error handling, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
