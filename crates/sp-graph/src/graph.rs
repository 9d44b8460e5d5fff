//! Core graph data structures.

use std::collections::{BTreeMap, BTreeSet};

use sp_core::Weight;

use crate::error::GraphResult;
use crate::validate;

/// A directed, weighted adjacency entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T> {
    pub to: T,
    pub weight: Weight,
}

/// The graph: an immutable node set plus per-node weighted adjacency.
///
/// Node identifiers only need a total order. The node set iterates in
/// ascending order, which is the order every query uses to break ties.
///
/// Each node's adjacency is sorted by `(to, weight)` and holds no exact
/// duplicates. Distinct weights to the same neighbor are kept as parallel
/// edges.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(crate) nodes: BTreeSet<T>,
    pub(crate) adjacency: BTreeMap<T, Vec<Edge<T>>>,
    pub(crate) edge_count: usize,
}

impl<T: Ord + Clone> Graph<T> {
    /// Build a graph from a node set and an adjacency mapping.
    ///
    /// Weights must be finite and non-negative, and their sum must be finite
    /// so that every path distance is representable. Neighbors missing from
    /// the node set are accepted (and logged); queries skip them.
    pub fn new<N, A, E>(nodes: N, adjacency: A) -> GraphResult<Self>
    where
        N: IntoIterator<Item = T>,
        A: IntoIterator<Item = (T, E)>,
        E: IntoIterator<Item = (T, Weight)>,
    {
        let nodes: BTreeSet<T> = nodes.into_iter().collect();
        validate::validate_node_count(nodes.len())?;

        let mut merged: BTreeMap<T, Vec<Edge<T>>> = BTreeMap::new();
        for (from, edges) in adjacency {
            let list = merged.entry(from).or_default();
            for (to, weight) in edges {
                list.push(Edge { to, weight });
            }
        }

        let mut edge_count = 0;
        for list in merged.values_mut() {
            list.sort_by(|a, b| a.to.cmp(&b.to).then(a.weight.total_cmp(&b.weight)));
            list.dedup_by(|a, b| a.to == b.to && a.weight == b.weight);
            edge_count += list.len();
        }
        merged.retain(|_, list| !list.is_empty());

        // after dedup, so repeated entries do not count twice
        validate::validate_weights(&merged)?;

        let graph = Self {
            nodes,
            adjacency: merged,
            edge_count,
        };

        let dangling = validate::count_dangling(&graph);
        if dangling > 0 {
            tracing::warn!(
                dangling,
                "graph has edges to neighbors outside the node set; queries will skip them"
            );
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count,
            "graph built"
        );

        Ok(graph)
    }

    /// Return the node set.
    pub fn nodes(&self) -> &BTreeSet<T> {
        &self.nodes
    }

    /// Whether `node` is a valid query endpoint.
    pub fn contains(&self, node: &T) -> bool {
        self.nodes.contains(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing edges of `from` (empty if it has none).
    pub fn edges(&self, from: &T) -> &[Edge<T>] {
        self.adjacency.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Smallest weight among the edges `from -> to`, if any exist.
    pub fn edge_weight(&self, from: &T, to: &T) -> Option<Weight> {
        // sorted by (to, weight): the first match is the lightest
        self.edges(from)
            .iter()
            .find(|e| &e.to == to)
            .map(|e| e.weight)
    }

    /// Every adjacency entry whose neighbor is not in the node set.
    pub fn dangling_edges(&self) -> Vec<(&T, &Edge<T>)> {
        self.adjacency
            .iter()
            .flat_map(|(from, list)| list.iter().map(move |e| (from, e)))
            .filter(|(_, e)| !self.nodes.contains(&e.to))
            .collect()
    }
}
