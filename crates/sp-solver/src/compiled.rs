//! Slot-indexed view of a graph used by the query loop.

use sp_core::{Slot, Weight};
use sp_graph::{Graph, IndexMap};

/// Graph adjacency flattened onto dense slots.
///
/// Node `i`'s edges live in `targets[offsets[i]..offsets[i + 1]]` (and the
/// matching range of `weights`). A `None` target is a neighbor that is not
/// in the node set.
#[derive(Debug, Clone)]
pub(crate) struct CompiledGraph<'g, T> {
    pub(crate) index: IndexMap<'g, T>,
    offsets: Vec<usize>,
    targets: Vec<Option<Slot>>,
    weights: Vec<Weight>,
}

impl<'g, T: Ord + Clone> CompiledGraph<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>) -> Self {
        let index = IndexMap::from_graph(graph);

        let mut offsets = Vec::with_capacity(index.node_count() + 1);
        let mut targets = Vec::with_capacity(graph.edge_count());
        let mut weights = Vec::with_capacity(graph.edge_count());
        offsets.push(0);

        for node in index.node_ids() {
            for edge in graph.edges(node) {
                targets.push(index.slot(&edge.to));
                weights.push(edge.weight);
            }
            offsets.push(targets.len());
        }

        Self {
            index,
            offsets,
            targets,
            weights,
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.index.node_count()
    }

    /// Outgoing `(target, weight)` pairs of `slot`.
    pub(crate) fn edges(&self, slot: Slot) -> impl Iterator<Item = (Option<Slot>, Weight)> + '_ {
        let start = self.offsets[slot.index()];
        let end = self.offsets[slot.index() + 1];
        self.targets[start..end]
            .iter()
            .copied()
            .zip(self.weights[start..end].iter().copied())
    }
}
