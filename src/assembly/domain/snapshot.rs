use super::{Forest, RecordSet};

/// SnapshotMetadata value object describing one load of the record source
#[derive(Debug, Clone)]
pub struct SnapshotMetadata {
    loaded_at: String,
    snapshot_id: String,
    source_name: String,
    tool_name: String,
    tool_version: String,
}

impl SnapshotMetadata {
    pub fn new(
        loaded_at: String,
        snapshot_id: String,
        source_name: String,
        tool_name: String,
        tool_version: String,
    ) -> Self {
        Self {
            loaded_at,
            snapshot_id,
            source_name,
            tool_name,
            tool_version,
        }
    }

    pub fn loaded_at(&self) -> &str {
        &self.loaded_at
    }

    pub fn snapshot_id(&self) -> &str {
        &self.snapshot_id
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

/// AssemblySnapshot: the records of one load and the forest built from them
///
/// Immutable once built; a reload produces a new snapshot.
#[derive(Debug)]
pub struct AssemblySnapshot {
    records: RecordSet,
    forest: Forest,
    metadata: SnapshotMetadata,
}

impl AssemblySnapshot {
    pub fn new(records: RecordSet, forest: Forest, metadata: SnapshotMetadata) -> Self {
        Self {
            records,
            forest,
            metadata,
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn metadata(&self) -> &SnapshotMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::domain::BomRecord;

    #[test]
    fn test_snapshot_metadata_new() {
        let metadata = SnapshotMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "urn:uuid:12345".to_string(),
            "records.json".to_string(),
            "bom-master".to_string(),
            "0.4.0".to_string(),
        );

        assert_eq!(metadata.loaded_at(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.snapshot_id(), "urn:uuid:12345");
        assert_eq!(metadata.source_name(), "records.json");
        assert_eq!(metadata.tool_name(), "bom-master");
        assert_eq!(metadata.tool_version(), "0.4.0");
    }

    #[test]
    fn test_snapshot_accessors() {
        let records = RecordSet::new(vec![BomRecord::new(1, "VALVE", None)]);
        let metadata = SnapshotMetadata::new(
            String::new(),
            String::new(),
            "memory".to_string(),
            "bom-master".to_string(),
            "0.4.0".to_string(),
        );
        let snapshot = AssemblySnapshot::new(records, Forest::default(), metadata);

        assert_eq!(snapshot.records().len(), 1);
        assert!(snapshot.forest().is_empty());
        assert_eq!(snapshot.metadata().source_name(), "memory");
    }
}
