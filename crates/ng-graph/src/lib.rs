//! newsgraph Graph - Co-occurrence graph assembly and export
//!
//! Folds canonical triples into an undirected labeled graph and projects it
//! into a force-directed visualization payload or into idempotent
//! graph-creation statements for a property-graph store.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use ng_core::Triple;

pub mod cypher;
pub mod visualization;

pub use cypher::StatementExporter;
pub use visualization::{VisualizationGraph, VisualizationLink, VisualizationNode};

/// Node and edge counts of an assembled graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Undirected, simple graph of entities labeled by relation.
///
/// Nodes and edges iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CoOccurrenceGraph {
    graph: UnGraph<String, String>,
    index: HashMap<String, NodeIndex>,
}

impl CoOccurrenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a set of triples
    pub fn assemble<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> Self {
        let mut graph = Self::new();
        for triple in triples {
            graph.add_triple(triple);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "assembled co-occurrence graph"
        );
        graph
    }

    /// Get or create the node for `name`
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Insert the triple's edge; an existing edge between the pair takes the new label
    pub fn add_triple(&mut self, triple: &Triple) {
        let a = self.add_node(triple.subject());
        let b = self.add_node(triple.object());
        self.graph.update_edge(a, b, triple.relation().to_string());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
        }
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entity names in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// `(source, target, label)` for every edge, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                edge.weight().as_str(),
            )
        })
    }

    /// Label of the edge between two entities, in either direction
    pub fn edge_label(&self, a: &str, b: &str) -> Option<&str> {
        let (a, b) = (*self.index.get(a)?, *self.index.get(b)?);
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).map(String::as_str)
    }

    /// Number of entities `name` co-occurs with
    pub fn degree(&self, name: &str) -> usize {
        self.index
            .get(name)
            .map(|&idx| self.graph.neighbors(idx).count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn triple(a: &str, b: &str) -> Triple {
        Triple::co_occurrence(a, b).unwrap()
    }

    fn scenario() -> Vec<Triple> {
        vec![
            triple("Alice", "Bob"),
            triple("Alice", "Paris"),
            triple("Bob", "Paris"),
            triple("Bob", "Carol"),
        ]
    }

    #[test]
    fn test_assemble_scenario() {
        let graph = CoOccurrenceGraph::assemble(&scenario());

        assert_eq!(graph.stats(), GraphStats { nodes: 4, edges: 4 });
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["Alice", "Bob", "Paris", "Carol"]);
        assert_eq!(graph.degree("Bob"), 3);
        assert_eq!(graph.degree("Carol"), 1);
        assert_eq!(graph.degree("Nobody"), 0);
        assert_eq!(graph.edge_label("Carol", "Bob"), Some("co_occurs_with"));
        assert_eq!(graph.edge_label("Alice", "Carol"), None);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = CoOccurrenceGraph::new();
        let first = graph.add_node("Paris");
        let second = graph.add_node("Paris");

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_node("Paris"));
    }

    #[test]
    fn test_repeated_pair_overwrites_label() {
        let triples = vec![
            Triple::new("Alice", "co_occurs_with", "Bob").unwrap(),
            Triple::new("Bob", "works_with", "Alice").unwrap(),
        ];
        let graph = CoOccurrenceGraph::assemble(&triples);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_label("Alice", "Bob"), Some("works_with"));
    }

    #[test]
    fn test_empty_graph() {
        let graph = CoOccurrenceGraph::assemble(&Vec::<Triple>::new());
        assert!(graph.is_empty());
        assert_eq!(graph.stats(), GraphStats::default());
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_edges_have_one_entry_per_pair() {
        let mut triples = scenario();
        triples.extend(scenario());
        let graph = CoOccurrenceGraph::assemble(&triples);

        let pairs: HashSet<(String, String)> = graph
            .edges()
            .map(|(a, b, _)| (a.to_string(), b.to_string()))
            .collect();
        assert_eq!(pairs.len(), graph.edge_count());
        assert_eq!(graph.edge_count(), 4);
    }
}
