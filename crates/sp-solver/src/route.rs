//! Query results.

use std::fmt;

use sp_core::Weight;

/// A shortest path, start and end inclusive. Never empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RouteFields<T>"))]
pub struct Route<T> {
    /// Nodes in travel order
    pub(crate) nodes: Vec<T>,
    /// Sum of the edge weights along the path
    pub(crate) weight: Weight,
}

impl<T> Route<T> {
    /// The zero-length route that starts and ends at `node`.
    pub(crate) fn trivial(node: T) -> Self {
        Self {
            nodes: vec![node],
            weight: 0.0,
        }
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> &T {
        &self.nodes[0]
    }

    pub fn end(&self) -> &T {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn into_nodes(self) -> Vec<T> {
        self.nodes
    }
}

/// Unchecked wire form of [`Route`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RouteFields<T> {
    nodes: Vec<T>,
    weight: Weight,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RouteFields<T>> for Route<T> {
    type Error = String;

    fn try_from(fields: RouteFields<T>) -> Result<Self, Self::Error> {
        if fields.nodes.is_empty() {
            return Err("route must contain at least one node".to_string());
        }
        sp_core::ensure_weight(fields.weight, "route weight").map_err(|e| e.to_string())?;
        Ok(Self {
            nodes: fields.nodes,
            weight: fields.weight,
        })
    }
}

/// Space-separated nodes, e.g. `1 2 4`.
impl<T: fmt::Display> fmt::Display for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// How a query ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryOutcome {
    /// `start == end`; the loop never ran.
    #[default]
    Trivial,
    /// An endpoint is not in the graph; the loop never ran.
    InvalidEndpoint,
    /// The target was settled.
    TargetReached,
    /// Every reachable node was settled without meeting the target.
    FrontierExhausted,
}

/// Counters collected during one query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryStats {
    /// Nodes marked visited
    pub settled: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Edges skipped because their neighbor is not in the node set
    pub skipped_edges: usize,
    pub outcome: QueryOutcome,
}
