//! HTTP server wiring

use super::handler;
use crate::store::GraphStore;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Build a config from `GRAPH_STORE_BIND` / `GRAPH_STORE_PORT`,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            address: std::env::var("GRAPH_STORE_BIND").unwrap_or(defaults.address),
            port: std::env::var("GRAPH_STORE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}

/// Build the protocol router over a shared store.
///
/// Exposed separately from [`HttpServer`] so tests can drive the router
/// in-process without binding a socket.
pub fn router(store: Arc<GraphStore>) -> Router {
    Router::new()
        .route(
            "/http-rdf-update",
            get(handler::get_graph)
                .post(handler::post_graph)
                .put(handler::put_graph)
                .delete(handler::delete_graph),
        )
        .route("/api/status", get(handler::status))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// HTTP server hosting the graph store protocol
pub struct HttpServer {
    store: Arc<GraphStore>,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server over a shared store
    pub fn new(store: Arc<GraphStore>, config: ServerConfig) -> Self {
        Self { store, config }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(Arc::clone(&self.store));

        let addr = format!("{}:{}", self.config.address, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("graph store protocol listening on http://{}/http-rdf-update", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
