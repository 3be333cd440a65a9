//! RDF graph content model
//!
//! The store manipulates graph content opaquely: it creates empty graphs,
//! merges one graph into another, clears them, and hands them to the codec
//! layer for serialization. Triple-level structure comes from `oxrdf`.

mod content;

pub use content::GraphContent;
