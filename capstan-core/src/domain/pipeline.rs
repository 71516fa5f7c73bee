//! Pipeline definition and record types
//!
//! `PipelineDefinition` is what the host declares; `ResourceRecord` is what
//! the host persists between reconciliations.

use serde::{Deserialize, Serialize};

/// Declared pipeline job definition
///
/// The `name` is the job's unique key on the remote server and is immutable
/// for the life of the resource; a rename is modeled upstream as
/// destroy-and-recreate, never as an in-place rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDefinition {
    pub name: String,
    pub description: Option<String>,
    pub script: String,
}

/// Host-persisted representation of a managed pipeline job
///
/// Created by a successful create, refreshed by read/update, and dropped by
/// delete or by a read that discovers the remote job is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Unique identifier, equal to the remote job name
    pub id: String,
    pub name: String,
    pub description: String,
    pub script: String,
    /// Stamped on each successful reconciliation; `None` on a freshly
    /// imported skeleton that has not been read back yet
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
}

impl ResourceRecord {
    /// Creates an import skeleton carrying only the external identifier.
    ///
    /// The identifier becomes `id` (and `name`, since the two are equal by
    /// construction) verbatim; a subsequent read populates the rest.
    pub fn skeleton(external_id: impl Into<String>) -> Self {
        let id = external_id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            script: String::new(),
            last_updated: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_carries_id_verbatim() {
        let record = ResourceRecord::skeleton("nightly-build");
        assert_eq!(record.id, "nightly-build");
        assert_eq!(record.name, "nightly-build");
        assert!(record.script.is_empty());
        assert!(record.last_updated.is_none());
    }
}
