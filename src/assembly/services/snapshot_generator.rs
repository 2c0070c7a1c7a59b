use crate::assembly::domain::SnapshotMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name stamped into every snapshot
pub const TOOL_NAME: &str = "bom-master";

/// SnapshotGenerator service for generating snapshot metadata
pub struct SnapshotGenerator;

impl SnapshotGenerator {
    /// Generates metadata with the current timestamp and a fresh snapshot id
    pub fn generate_metadata(
        source_name: &str,
        tool_name: &str,
        tool_version: &str,
    ) -> SnapshotMetadata {
        let loaded_at = Utc::now().to_rfc3339();
        let snapshot_id = format!("urn:uuid:{}", Uuid::new_v4());

        SnapshotMetadata::new(
            loaded_at,
            snapshot_id,
            source_name.to_string(),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates metadata stamped with this crate's name and version
    pub fn generate_default_metadata(source_name: &str) -> SnapshotMetadata {
        Self::generate_metadata(source_name, TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
