//! Named graph store
//!
//! One `GraphStore` instance is shared by every request worker for the
//! process lifetime. It owns the URI → content mapping and a single
//! store-wide read/write lock: any number of concurrent readers, writers
//! fully serialized against everything else regardless of target URI. The
//! lock lives inside the store value, so independent stores (one per test,
//! say) never contend with each other.

use crate::codec::Codec;
use crate::rdf::GraphContent;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Graph store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// No graph stored under the URI
    #[error("no graph stored at <{0}>")]
    NotFound(String),

    /// Unexpected failure in the codec or store layer
    #[error("graph store failure: {0}")]
    Internal(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory store of named graphs behind one coarse read/write lock
#[derive(Debug, Default)]
pub struct GraphStore {
    graphs: RwLock<HashMap<String, GraphContent>>,
}

impl GraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            graphs: RwLock::new(HashMap::new()),
        }
    }

    /// Check whether a graph exists. Shared lock.
    pub async fn exists(&self, uri: &str) -> bool {
        self.graphs.read().await.contains_key(uri)
    }

    /// Number of stored graphs. Shared lock.
    pub async fn graph_count(&self) -> usize {
        self.graphs.read().await.len()
    }

    /// Serialize the graph at `uri` with the given codec.
    ///
    /// The shared lock is held across the whole serialization, so the
    /// returned bytes are a consistent snapshot: no concurrent writer can
    /// mutate the graph mid-serialization. Codec failures surface as
    /// [`StoreError::Internal`]; the guard releases the lock on every exit
    /// path.
    pub async fn read(&self, uri: &str, codec: &Codec) -> StoreResult<Vec<u8>> {
        let graphs = self.graphs.read().await;
        let content = graphs
            .get(uri)
            .ok_or_else(|| StoreError::NotFound(uri.to_string()))?;
        codec
            .serialize(content)
            .map_err(|e| StoreError::Internal(e.to_string()))
    }

    /// Read the graph at `uri` as an owned snapshot of its content.
    pub async fn snapshot(&self, uri: &str) -> StoreResult<GraphContent> {
        self.graphs
            .read()
            .await
            .get(uri)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(uri.to_string()))
    }

    /// Merge `incoming` into the graph at `uri`, creating it if absent.
    ///
    /// With `clear` set, any existing content is emptied first (full
    /// replace); otherwise the incoming triples are added to whatever is
    /// already there. Clear and merge happen under one exclusive lock
    /// acquisition, so no reader ever observes the graph half-replaced.
    pub async fn write(&self, uri: &str, incoming: GraphContent, clear: bool) {
        let mut graphs = self.graphs.write().await;
        let content = graphs.entry(uri.to_string()).or_default();
        if clear {
            content.clear();
        }
        content.merge(incoming);
    }

    /// Remove the graph at `uri` entirely. Exclusive lock.
    pub async fn delete(&self, uri: &str) -> StoreResult<()> {
        self.graphs
            .write()
            .await
            .remove(uri)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(uri.to_string()))
    }
}
