use crate::assembly::domain::{AssemblySnapshot, Selection};
use std::sync::Arc;

/// BrowseResponse - response DTO of the browse use case
///
/// Carries the snapshot the answer was computed from, so a later reload
/// cannot change what this response describes.
#[derive(Debug, Clone)]
pub struct BrowseResponse {
    pub snapshot: Arc<AssemblySnapshot>,
    pub selection: Option<Selection>,
    /// Requested id that matched no node
    pub unresolved_selection: Option<i64>,
}

impl BrowseResponse {
    pub fn new(
        snapshot: Arc<AssemblySnapshot>,
        selection: Option<Selection>,
        unresolved_selection: Option<i64>,
    ) -> Self {
        Self {
            snapshot,
            selection,
            unresolved_selection,
        }
    }

    /// True when an id was requested but not found
    pub fn selection_missed(&self) -> bool {
        self.unresolved_selection.is_some()
    }
}
