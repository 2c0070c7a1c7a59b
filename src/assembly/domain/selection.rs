use super::{BomRecord, ComponentPath};

/// Selection of one assembly node together with its resolved display path
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    record: BomRecord,
    path: ComponentPath,
    child_count: usize,
}

impl Selection {
    pub fn new(record: BomRecord, path: ComponentPath, child_count: usize) -> Self {
        Self {
            record,
            path,
            child_count,
        }
    }

    pub fn record(&self) -> &BomRecord {
        &self.record
    }

    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn path(&self) -> &ComponentPath {
        &self.path
    }

    /// Number of children the selected node has in the forest
    pub fn child_count(&self) -> usize {
        self.child_count
    }
}
