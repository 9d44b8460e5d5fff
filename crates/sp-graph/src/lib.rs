//! sp-graph: weighted graph model for shortest-path queries.
//!
//! Provides:
//! - Core graph data structures (Graph, Edge) generic over the node identifier
//! - Incremental graph builder with validation
//! - Dense slot indexing for per-query tables
//!
//! # Example
//!
//! ```
//! use sp_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_node("a");
//! builder.add_node("b");
//! builder.add_undirected_edge("a", "b", 2.5);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.edge_weight(&"a", &"b"), Some(2.5));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph};
pub use indexing::IndexMap;
