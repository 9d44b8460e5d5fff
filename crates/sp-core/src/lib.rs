//! sp-core: stable foundation for the shortest-path workspace.
//!
//! Contains:
//! - numeric (Weight + weight validation)
//! - ids (compact slot ids for dense per-query tables)
//! - timing (opt-in query timers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SpError, SpResult};
pub use ids::*;
pub use numeric::*;
