//! Concurrency guarantees of the shared graph store
//!
//! One coarse read/write lock covers the whole URI space: readers run in
//! parallel, any write excludes everything else. These tests hammer the
//! store from many tasks and assert no reader ever observes a graph halfway
//! through a replace.

use sparql_graph_store::{codec, GraphContent, GraphStore, RdfFormat, StoreError};
use oxrdf::{Literal, NamedNode, Triple};
use std::sync::Arc;

const URI: &str = "http://www.example.com/mygraph";

fn graph(marker: &str, size: usize) -> GraphContent {
    (0..size)
        .map(|i| {
            Triple::new(
                NamedNode::new(format!("http://example.org/{marker}/{i}")).unwrap(),
                NamedNode::new("http://www.w3.org/2000/01/rdf-schema#label").unwrap(),
                Literal::new_simple_literal(format!("{marker}{i}")),
            )
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_never_observe_a_half_replaced_graph() {
    let store = Arc::new(GraphStore::new());
    let a = graph("a", 16);
    let b = graph("b", 16);
    store.write(URI, a.clone(), true).await;

    let mut tasks = Vec::new();

    for _ in 0..2 {
        let store = Arc::clone(&store);
        let (a, b) = (a.clone(), b.clone());
        tasks.push(tokio::spawn(async move {
            for _ in 0..100 {
                store.write(URI, a.clone(), true).await;
                store.write(URI, b.clone(), true).await;
            }
        }));
    }

    let ntriples = codec::Codec::of(RdfFormat::NTriples);
    for _ in 0..4 {
        let store = Arc::clone(&store);
        let (a, b) = (a.clone(), b.clone());
        tasks.push(tokio::spawn(async move {
            for _ in 0..100 {
                let bytes = store.read(URI, &ntriples).await.unwrap();
                let seen = ntriples.parse(&bytes).unwrap();
                assert!(
                    seen == a || seen == b,
                    "observed a graph that is neither fully pre-write nor fully post-write"
                );
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_merges_all_land() {
    let store = Arc::new(GraphStore::new());

    let mut tasks = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            store.write(URI, graph(&format!("w{i}"), 4), false).await;
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let merged = store.snapshot(URI).await.unwrap();
    assert_eq!(merged.len(), 8 * 4, "every concurrent merge must survive");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_exactly_one_wins() {
    let store = Arc::new(GraphStore::new());
    store.write(URI, graph("a", 4), true).await;

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        tasks.push(tokio::spawn(async move { store.delete(URI).await }));
    }

    let mut deleted = 0;
    let mut not_found = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => deleted += 1,
            Err(StoreError::NotFound(_)) => not_found += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(deleted, 1);
    assert_eq!(not_found, 7);
    assert!(!store.exists(URI).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_reads_complete() {
    let store = Arc::new(GraphStore::new());
    store.write(URI, graph("a", 8), true).await;

    let turtle = codec::Codec::of(RdfFormat::Turtle);
    let (r1, r2, r3, r4) = tokio::join!(
        store.read(URI, &turtle),
        store.read(URI, &turtle),
        store.read(URI, &turtle),
        store.read(URI, &turtle),
    );
    for result in [r1, r2, r3, r4] {
        assert!(result.is_ok());
    }
}
