//! The built-in five-node sample graph.

use crate::migrate::LATEST_VERSION;
use crate::schema::{EdgeDef, GraphFile};

/// Nodes `1`..`5` with the classic symmetric weights.
///
/// The cheapest route from `1` to `4` is `1 2 4` (weight 15).
pub fn sample_graph_file() -> GraphFile {
    let edges = [
        ("1", "2", 10.0),
        ("1", "3", 5.0),
        ("2", "3", 20.0),
        ("2", "4", 5.0),
        ("2", "5", 5.0),
        ("3", "5", 10.0),
        ("4", "5", 6.0),
    ]
    .into_iter()
    .map(|(a, b, w)| EdgeDef::undirected(a, b, w))
    .collect();

    GraphFile {
        version: LATEST_VERSION,
        name: "sample".to_string(),
        nodes: (1..=5).map(|n| n.to_string()).collect(),
        edges,
        engine: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_graph_file;

    #[test]
    fn sample_is_valid_and_symmetric() {
        let file = sample_graph_file();
        validate_graph_file(&file).unwrap();

        let graph = file.to_graph().unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 14);
        for (from, to) in [("1", "2"), ("4", "5"), ("5", "3")] {
            let (from, to) = (from.to_string(), to.to_string());
            assert_eq!(graph.edge_weight(&from, &to), graph.edge_weight(&to, &from));
        }
    }
}
