//! Named graph content as a set of triples

use oxrdf::Triple;
use std::collections::HashSet;

/// The content of one named graph: an unordered set of RDF triples.
///
/// Duplicate insertions are absorbed (RDF graphs are sets), and merging two
/// contents is set union. The graph store never looks inside beyond
/// emptiness checks and merges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphContent {
    triples: HashSet<Triple>,
}

impl GraphContent {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            triples: HashSet::new(),
        }
    }

    /// Insert a triple, returning `false` if it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Check whether a triple is present
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Merge another graph into this one (set union)
    pub fn merge(&mut self, other: GraphContent) {
        self.triples.extend(other.triples);
    }

    /// Remove all triples
    pub fn clear(&mut self) {
        self.triples.clear();
    }

    /// Number of triples in the graph
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph has no triples
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for GraphContent {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for GraphContent {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl IntoIterator for GraphContent {
    type Item = Triple;
    type IntoIter = std::collections::hash_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode};

    fn triple(subject: &str, label: &str) -> Triple {
        Triple::new(
            NamedNode::new(subject).unwrap(),
            NamedNode::new("http://www.w3.org/2000/01/rdf-schema#label").unwrap(),
            Literal::new_simple_literal(label),
        )
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut graph = GraphContent::new();
        assert!(graph.insert(triple("http://example.org/a", "A")));
        assert!(!graph.insert(triple("http://example.org/a", "A")));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_merge_is_union() {
        let mut left: GraphContent = [triple("http://example.org/a", "A")].into_iter().collect();
        let right: GraphContent = [
            triple("http://example.org/a", "A"),
            triple("http://example.org/b", "B"),
        ]
        .into_iter()
        .collect();

        left.merge(right);
        assert_eq!(left.len(), 2);
        assert!(left.contains(&triple("http://example.org/b", "B")));
    }

    #[test]
    fn test_clear() {
        let mut graph: GraphContent = [triple("http://example.org/a", "A")].into_iter().collect();
        assert!(!graph.is_empty());

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let forward: GraphContent = [
            triple("http://example.org/a", "A"),
            triple("http://example.org/b", "B"),
        ]
        .into_iter()
        .collect();
        let backward: GraphContent = [
            triple("http://example.org/b", "B"),
            triple("http://example.org/a", "A"),
        ]
        .into_iter()
        .collect();

        assert_eq!(forward, backward);
    }
}
