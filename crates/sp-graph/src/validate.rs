//! Graph validation logic.

use std::collections::BTreeMap;

use sp_core::{Slot, Weight, ensure_weight};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph};

/// Every weight must be finite and non-negative, and their total must stay
/// finite so no path distance can overflow.
pub(crate) fn validate_weights<T>(adjacency: &BTreeMap<T, Vec<Edge<T>>>) -> GraphResult<()> {
    let mut total: Weight = 0.0;
    for edge in adjacency.values().flatten() {
        total += ensure_weight(edge.weight, "edge weight")?;
    }
    if !total.is_finite() {
        return Err(GraphError::WeightOverflow);
    }
    Ok(())
}

/// The node set must fit in the dense slot range.
pub(crate) fn validate_node_count(count: usize) -> GraphResult<()> {
    if count > Slot::CAPACITY {
        return Err(GraphError::TooManyNodes {
            count,
            max: Slot::CAPACITY,
        });
    }
    Ok(())
}

/// Count adjacency entries whose neighbor is not a known node.
pub(crate) fn count_dangling<T: Ord>(graph: &Graph<T>) -> usize {
    graph
        .adjacency
        .values()
        .flatten()
        .filter(|e| !graph.nodes.contains(&e.to))
        .count()
}
