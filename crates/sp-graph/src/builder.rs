//! Incremental graph builder.

use std::collections::{BTreeMap, BTreeSet};

use sp_core::Weight;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Builder for constructing a graph incrementally.
///
/// Declare nodes with `add_node`, connect them with `add_edge` or
/// `add_undirected_edge`, then call `build()` to validate and freeze the
/// result into an immutable `Graph`. Edges do not declare their endpoints.
#[derive(Debug)]
pub struct GraphBuilder<T> {
    nodes: BTreeSet<T>,
    adjacency: BTreeMap<T, Vec<(T, Weight)>>,
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self {
            nodes: BTreeSet::new(),
            adjacency: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Returns `false` if it was already declared.
    pub fn add_node(&mut self, node: T) -> bool {
        self.nodes.insert(node)
    }

    /// Add a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: T, to: T, weight: Weight) -> &mut Self {
        self.adjacency.entry(from).or_default().push((to, weight));
        self
    }

    /// Add the pair of directed edges `a -> b` and `b -> a`.
    pub fn add_undirected_edge(&mut self, a: T, b: T, weight: Weight) -> &mut Self {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight)
    }

    /// Number of declared nodes so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Build the graph. Edges to undeclared neighbors are kept (and logged).
    pub fn build(self) -> GraphResult<Graph<T>> {
        Graph::new(self.nodes, self.adjacency)
    }

    /// Build the graph, rejecting edges to undeclared neighbors.
    pub fn build_strict(self) -> GraphResult<Graph<T>> {
        let dangling = self
            .adjacency
            .values()
            .flatten()
            .filter(|(to, _)| !self.nodes.contains(to))
            .count();
        if dangling > 0 {
            return Err(GraphError::DanglingNeighbor { count: dangling });
        }
        self.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        assert!(builder.add_node("n1"));
        assert!(builder.add_node("n2"));
        assert!(!builder.add_node("n1"));
        builder.add_edge("n1", "n2", 3.0);

        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.adjacency["n1"], vec![("n2", 3.0)]);
    }

    #[test]
    fn undirected_edge_inserts_both_directions() {
        let mut builder = GraphBuilder::new();
        builder.add_node(1);
        builder.add_node(2);
        builder.add_undirected_edge(1, 2, 7.0);

        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_weight(&1, &2), Some(7.0));
        assert_eq!(graph.edge_weight(&2, &1), Some(7.0));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn builder_chains_edges() {
        let mut builder = GraphBuilder::new();
        for n in 0..3 {
            builder.add_node(n);
        }
        builder.add_edge(0, 1, 1.0).add_edge(1, 2, 1.0);
        assert_eq!(builder.build().unwrap().edge_count(), 2);
    }

    #[test]
    fn strict_build_rejects_undeclared_neighbor() {
        let mut builder = GraphBuilder::new();
        builder.add_node('a');
        builder.add_edge('a', 'b', 1.0);
        builder.add_edge('a', 'c', 1.0);

        let err = builder.build_strict().unwrap_err();
        assert_eq!(err, GraphError::DanglingNeighbor { count: 2 });
    }

    #[test]
    fn lenient_build_keeps_undeclared_neighbor() {
        let mut builder = GraphBuilder::new();
        builder.add_node('a');
        builder.add_edge('a', 'b', 1.0);

        let graph = builder.build().unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.dangling_edges().len(), 1);
    }
}
