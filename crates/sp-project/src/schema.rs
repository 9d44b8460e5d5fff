//! Graph file schema definitions.

use serde::{Deserialize, Serialize};
use sp_solver::EngineOptions;

/// A graph as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphFile {
    /// Missing in files written before versioning; treated as 0.
    #[serde(default)]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineOptions>,
}

/// One weighted edge. `undirected` expands to both directions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub undirected: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl EdgeDef {
    pub fn directed(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
            undirected: false,
        }
    }

    pub fn undirected(a: impl Into<String>, b: impl Into<String>, weight: f64) -> Self {
        Self {
            undirected: true,
            ..Self::directed(a, b, weight)
        }
    }
}
