//! sp-project: on-disk graph file format and validation.

pub mod migrate;
pub mod sample;
pub mod schema;
pub mod validate;

use std::path::Path;

use sp_graph::{Graph, GraphBuilder, GraphError};
use sp_solver::EngineOptions;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use sample::sample_graph_file;
pub use schema::*;
pub use validate::{ValidationError, validate_graph_file};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Unsupported file extension for {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphFile {
    /// Build the in-memory graph. Undirected edges become two directed ones.
    pub fn to_graph(&self) -> ProjectResult<Graph<String>> {
        let mut builder = GraphBuilder::new();
        for node in &self.nodes {
            builder.add_node(node.clone());
        }
        for edge in &self.edges {
            if edge.undirected {
                builder.add_undirected_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            } else {
                builder.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            }
        }
        Ok(builder.build_strict()?)
    }

    /// Engine settings stored in the file, or the defaults.
    pub fn engine_options(&self) -> EngineOptions {
        self.engine.unwrap_or_default()
    }
}

/// Load a graph file, choosing the parser by extension.
pub fn load_graph_file(path: &Path) -> ProjectResult<GraphFile> {
    match extension(path).as_deref() {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<GraphFile> {
    let content = std::fs::read_to_string(path)?;
    let file: GraphFile = serde_yaml::from_str(&content)?;
    finish_load(path, file)
}

pub fn save_yaml(path: &Path, file: &GraphFile) -> ProjectResult<()> {
    validate_graph_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<GraphFile> {
    let content = std::fs::read_to_string(path)?;
    let file: GraphFile = serde_json::from_str(&content)?;
    finish_load(path, file)
}

pub fn save_json(path: &Path, file: &GraphFile) -> ProjectResult<()> {
    validate_graph_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn finish_load(path: &Path, file: GraphFile) -> ProjectResult<GraphFile> {
    let file = migrate_to_latest(file);
    validate_graph_file(&file)?;
    tracing::debug!(
        path = %path.display(),
        nodes = file.nodes.len(),
        edges = file.edges.len(),
        "graph file loaded"
    );
    Ok(file)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_rejected() {
        let err = load_graph_file(Path::new("graph.toml")).unwrap_err();
        assert!(matches!(err, ProjectError::UnsupportedFormat { .. }));
    }

    #[test]
    fn to_graph_expands_undirected_edges() {
        let file = GraphFile {
            version: LATEST_VERSION,
            name: "pair".to_string(),
            nodes: vec!["a".to_string(), "b".to_string()],
            edges: vec![EdgeDef::undirected("a", "b", 3.0)],
            engine: None,
        };
        let graph = file.to_graph().unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(&"b".to_string(), &"a".to_string()), Some(3.0));
        assert_eq!(file.engine_options(), EngineOptions::default());
    }
}
