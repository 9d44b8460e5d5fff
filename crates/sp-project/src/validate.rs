//! Graph file validation logic.

use std::collections::HashSet;

use sp_core::ensure_weight;

use crate::schema::GraphFile;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_graph_file(file: &GraphFile) -> Result<(), ValidationError> {
    if file.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut node_ids = HashSet::new();
    for node in &file.nodes {
        if node.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "node id".to_string(),
                value: format!("{node:?}"),
                reason: "must not be blank".to_string(),
            });
        }
        if !node_ids.insert(node) {
            return Err(ValidationError::DuplicateId {
                id: node.clone(),
                context: format!("graph '{}' nodes", file.name),
            });
        }
    }

    for (i, edge) in file.edges.iter().enumerate() {
        for (end, id) in [("from", &edge.from), ("to", &edge.to)] {
            if !node_ids.contains(id) {
                return Err(ValidationError::MissingReference {
                    id: id.clone(),
                    context: format!("edge #{i} {end}"),
                });
            }
        }

        if let Err(err) = ensure_weight(edge.weight, "edge weight") {
            return Err(ValidationError::InvalidValue {
                field: format!("edge #{i} ({} -> {}) weight", edge.from, edge.to),
                value: edge.weight.to_string(),
                reason: err.to_string(),
            });
        }
    }

    Ok(())
}
