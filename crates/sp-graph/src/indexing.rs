//! Dense slot indexing for per-query tables.
//!
//! Maps every node of a graph to a contiguous slot `0..N` in node-set order
//! and back, so query state can live in plain vectors.

use sp_core::Slot;

use crate::graph::Graph;

/// Index map providing stable, contiguous slots for graph nodes.
///
/// Slots follow the node set's ascending order, so iterating slots in
/// increasing order visits nodes in the same order as `Graph::nodes()`.
#[derive(Debug, Clone)]
pub struct IndexMap<'g, T> {
    /// Contiguous, sorted list of node identifiers (slot -> node).
    node_ids: Vec<&'g T>,
}

impl<'g, T: Ord> IndexMap<'g, T> {
    /// Build an index map from a graph.
    pub fn from_graph(graph: &'g Graph<T>) -> Self {
        // BTreeSet iteration is already sorted
        Self {
            node_ids: graph.nodes.iter().collect(),
        }
    }

    /// Number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Slot of `node`, or `None` if it is not in the graph.
    pub fn slot(&self, node: &T) -> Option<Slot> {
        self.node_ids
            .binary_search_by(|probe| (*probe).cmp(node))
            .ok()
            .map(Slot::from_index)
    }

    /// Node stored at `slot` (panics if out of bounds).
    pub fn node(&self, slot: Slot) -> &'g T {
        self.node_ids[slot.index()]
    }

    /// All node identifiers in slot order.
    pub fn node_ids(&self) -> &[&'g T] {
        &self.node_ids
    }
}
