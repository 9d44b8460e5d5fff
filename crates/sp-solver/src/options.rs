//! Engine configuration.

use std::fmt;
use std::str::FromStr;

/// How the next node to settle is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrontierKind {
    /// O(V) scan over all nodes per step. Best for small, dense graphs.
    #[default]
    Linear,
    /// Binary heap with lazy deletion. Best for large, sparse graphs.
    Heap,
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierKind::Linear => f.write_str("linear"),
            FrontierKind::Heap => f.write_str("heap"),
        }
    }
}

impl FromStr for FrontierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(FrontierKind::Linear),
            "heap" => Ok(FrontierKind::Heap),
            other => Err(format!("unknown frontier '{other}' (expected linear or heap)")),
        }
    }
}

/// Shortest-path engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOptions {
    /// Frontier selection strategy
    #[cfg_attr(feature = "serde", serde(default))]
    pub frontier: FrontierKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_parses_case_insensitively() {
        assert_eq!("heap".parse::<FrontierKind>().unwrap(), FrontierKind::Heap);
        assert_eq!("Linear".parse::<FrontierKind>().unwrap(), FrontierKind::Linear);
        assert!("fibonacci".parse::<FrontierKind>().is_err());
    }

    #[test]
    fn defaults_to_linear_scan() {
        assert_eq!(EngineOptions::default().frontier, FrontierKind::Linear);
        assert_eq!(FrontierKind::Heap.to_string(), "heap");
    }
}
