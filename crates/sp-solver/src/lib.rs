//! Dijkstra shortest-path engine over `sp-graph` graphs.
//!
//! [`ShortestPathEngine`] borrows an immutable [`Graph`](sp_graph::Graph) and
//! answers point-to-point queries. Each query settles nodes in order of
//! increasing distance, tightening neighbor distances as it goes, and stops
//! as soon as the target is settled. The route is rebuilt by following
//! predecessor links back from the target.
//!
//! ```
//! use sp_graph::GraphBuilder;
//! use sp_solver::ShortestPathEngine;
//!
//! let mut builder = GraphBuilder::new();
//! for n in 1..=3 {
//!     builder.add_node(n);
//! }
//! builder.add_edge(1, 2, 4.0).add_edge(2, 3, 1.0).add_edge(1, 3, 7.0);
//! let graph = builder.build().unwrap();
//!
//! let engine = ShortestPathEngine::new(&graph);
//! let route = engine.find(&1, &3).unwrap();
//! assert_eq!(route.nodes(), &[1, 2, 3]);
//! assert_eq!(route.weight(), 5.0);
//! ```

mod compiled;
pub mod engine;
pub mod error;
mod frontier;
pub mod options;
mod query;
pub mod route;

pub use engine::ShortestPathEngine;
pub use error::{Endpoint, PathError, PathResult};
pub use options::{EngineOptions, FrontierKind};
pub use route::{QueryOutcome, QueryStats, Route};
