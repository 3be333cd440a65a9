use sparql_graph_store::{GraphStore, HttpServer, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!(
        "SPARQL Graph Store Protocol server v{}",
        sparql_graph_store::version()
    );

    let config = ServerConfig::from_env();
    let store = Arc::new(GraphStore::new());
    let server = HttpServer::new(store, config);

    if let Err(e) = server.start().await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
