//! Schema migration framework.

use crate::schema::GraphFile;

pub const LATEST_VERSION: u32 = 1;

/// Bring an older file up to [`LATEST_VERSION`].
///
/// Files newer than the latest version are returned unchanged; validation
/// rejects them.
pub fn migrate_to_latest(mut file: GraphFile) -> GraphFile {
    if file.version == 0 {
        file = migrate_v0_to_v1(file);
    }
    file
}

/// Unversioned files share the v1 layout.
fn migrate_v0_to_v1(mut file: GraphFile) -> GraphFile {
    file.version = 1;
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unversioned_file_becomes_latest() {
        let file = GraphFile {
            version: 0,
            name: "legacy".to_string(),
            nodes: vec!["a".to_string()],
            edges: vec![],
            engine: None,
        };
        let migrated = migrate_to_latest(file.clone());
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.nodes, file.nodes);
    }

    #[test]
    fn future_version_left_for_validation() {
        let file = GraphFile {
            version: LATEST_VERSION + 1,
            name: "future".to_string(),
            nodes: vec![],
            edges: vec![],
            engine: None,
        };
        let migrated = migrate_to_latest(file);
        assert_eq!(migrated.version, LATEST_VERSION + 1);
        assert!(matches!(
            crate::validate_graph_file(&migrated),
            Err(crate::ValidationError::UnsupportedVersion { .. })
        ));
    }
}
