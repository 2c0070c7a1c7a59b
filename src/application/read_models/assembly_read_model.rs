//! Assembly read model for query operations
//!
//! This module provides the read model that aggregates everything a
//! formatter needs to render one browse result.

use super::record_view::RecordView;
use crate::assembly::services::RowsKind;

/// Main read model for a browse result
///
/// A denormalized view of the snapshot and the current selection, following
/// the CQRS-lite pattern.
#[derive(Debug, Clone)]
pub struct AssemblyReadModel {
    /// Snapshot metadata
    pub metadata: SnapshotMetadataView,
    /// Counts over the record set and the forest
    pub summary: SummaryView,
    /// Forest outline in depth-first pre-order, roots in record order
    pub tree: Vec<TreeNodeView>,
    /// What the lenient build policies absorbed
    pub diagnostics: DiagnosticsView,
    /// Selected part, if a selection resolved
    pub selection: Option<SelectionView>,
    /// Id that was requested but matched no node
    pub unresolved_selection: Option<i64>,
}

/// View representation of snapshot metadata
#[derive(Debug, Clone)]
pub struct SnapshotMetadataView {
    pub loaded_at: String,
    pub snapshot_id: String,
    pub source_name: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryView {
    pub record_count: usize,
    pub node_count: usize,
    pub root_count: usize,
}

/// One line of the forest outline
///
/// The outline is flat: nesting is carried by `depth` and `parent_id`, so
/// consumers never recurse over deep assemblies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNodeView {
    pub id: i64,
    pub component_name: String,
    pub part_number: String,
    /// Zero for a root
    pub depth: usize,
    /// Id of the parent node, `None` for a root
    pub parent_id: Option<i64>,
    pub child_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsView {
    pub orphans: Vec<OrphanView>,
    pub duplicates: Vec<DuplicateView>,
    /// Records below a dropped orphan
    pub detached_ids: Vec<i64>,
    /// Records in or below a parent cycle
    pub cyclic_ids: Vec<i64>,
}

impl DiagnosticsView {
    pub fn is_empty(&self) -> bool {
        self.orphans.is_empty()
            && self.duplicates.is_empty()
            && self.detached_ids.is_empty()
            && self.cyclic_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanView {
    pub id: i64,
    pub component_name: String,
    pub parent_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateView {
    pub component_name: String,
    pub displaced_id: i64,
    pub kept_id: i64,
}

/// View of the selected part: its path and the rows relevant to it
#[derive(Debug, Clone)]
pub struct SelectionView {
    pub id: i64,
    pub component_name: String,
    /// Path segments, root first
    pub path: Vec<String>,
    /// Path joined with the configured separator
    pub path_display: String,
    /// Last path segment
    pub current_part: String,
    pub child_count: usize,
    pub rows_kind: RowsKind,
    pub rows: Vec<RecordView>,
}
