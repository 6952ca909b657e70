//! Binary entrypoint for the product catalog HTTP server.
//!
//! Reads configuration from environment variables:
//! - `CATALOG_DB_PATH`: SQLite database file path (default: "products.db")
//! - `CATALOG_PORT`: Server listen port (default: "8080")

use catalog_server::config::ServerConfig;
use catalog_server::router::build_router;
use catalog_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // The service cannot run without its store, so any failure here is fatal.
    let state = AppState::new(&config.db_path)
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!("catalog server starting on {} (database: {})", addr, config.db_path);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
