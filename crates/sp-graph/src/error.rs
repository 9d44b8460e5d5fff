//! Graph-specific error types.

use sp_core::SpError;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge weight is negative or not finite.
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(#[from] SpError),

    /// Edges point at neighbors that are not in the node set.
    #[error("{count} edge(s) reference neighbors missing from the node set")]
    DanglingNeighbor { count: usize },

    /// The edge weights sum past the largest finite distance.
    #[error("Total edge weight overflows; path distances would not be finite")]
    WeightOverflow,

    /// More nodes than dense slots can address.
    #[error("{count} nodes exceed the supported maximum of {max}")]
    TooManyNodes { count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_error_wraps_core_error() {
        let core = SpError::Negative {
            what: "edge weight",
            value: -1.0,
        };
        let err = GraphError::from(core.clone());
        assert_eq!(err, GraphError::InvalidWeight(core));
        assert!(err.to_string().starts_with("Invalid edge weight: Negative"));
    }
}
