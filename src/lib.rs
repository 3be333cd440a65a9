//! SPARQL 1.1 Graph Store HTTP Protocol server
//!
//! A network-addressable store of named RDF graphs, each identified by an
//! absolute URI and manipulated through four HTTP verbs on
//! `/http-rdf-update?graph=<uri>`:
//!
//! - `GET` — serialize the graph in the format negotiated from `Accept`
//!   (Turtle, RDF/XML or N-Triples); 404 if absent.
//! - `POST` — full replace: clear the graph, merge the body in; 201 with a
//!   `Location` header.
//! - `PUT` — merge the body into existing content; 201.
//! - `DELETE` — drop the graph; 204, or 404 if absent.
//!
//! POST replacing and PUT merging mirrors the protocol as originally
//! deployed, even though it inverts the usual REST convention.
//!
//! All graphs live in one in-memory [`store::GraphStore`] behind a single
//! store-wide read/write lock: reads run concurrently, writes are serialized
//! against everything. Request bodies are parsed before any lock is taken.
//!
//! # Example
//!
//! ```rust
//! use sparql_graph_store::{codec, GraphStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = GraphStore::new();
//! let codec = codec::resolve("application/x-turtle").unwrap();
//!
//! let graph = codec
//!     .parse(br#"<http://example.org/a> <http://example.org/p> "A" ."#)
//!     .unwrap();
//! store.write("http://example.org/g", graph, true).await;
//!
//! let body = store.read("http://example.org/g", &codec).await.unwrap();
//! assert_eq!(codec.parse(&body).unwrap().len(), 1);
//! # }
//! ```

#![warn(clippy::all)]

pub mod codec;
pub mod http;
pub mod rdf;
pub mod store;

// Re-export main types for convenience
pub use codec::{Codec, CodecError, CodecResult, RdfFormat};
pub use http::{router, ApiError, HttpServer, ServerConfig};
pub use rdf::GraphContent;
pub use store::{GraphStore, StoreError, StoreResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
