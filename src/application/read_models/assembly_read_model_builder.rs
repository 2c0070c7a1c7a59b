//! Builder for constructing AssemblyReadModel from domain objects

use super::assembly_read_model::{
    AssemblyReadModel, DiagnosticsView, DuplicateView, OrphanView, SelectionView,
    SnapshotMetadataView, SummaryView, TreeNodeView,
};
use super::record_view::RecordView;
use crate::assembly::domain::{
    AssemblyNode, AssemblySnapshot, BuildDiagnostics, Selection, SnapshotMetadata,
};
use crate::assembly::services::RelevanceFilter;

/// Builder for constructing AssemblyReadModel from a snapshot and a selection
pub struct AssemblyReadModelBuilder;

impl AssemblyReadModelBuilder {
    /// Builds an AssemblyReadModel
    ///
    /// # Arguments
    /// * `snapshot` - The loaded snapshot
    /// * `selection` - The resolved selection, if any
    /// * `unresolved_selection` - Id that was requested but not found
    /// * `separator` - Separator used to join the selection path for display
    ///
    /// # Returns
    /// A fully constructed AssemblyReadModel. The relevant rows of the
    /// selection are computed here from the flat record set.
    pub fn build(
        snapshot: &AssemblySnapshot,
        selection: Option<&Selection>,
        unresolved_selection: Option<i64>,
        separator: &str,
    ) -> AssemblyReadModel {
        let forest = snapshot.forest();

        AssemblyReadModel {
            metadata: Self::build_metadata(snapshot.metadata()),
            summary: SummaryView {
                record_count: snapshot.records().len(),
                node_count: forest.node_count(),
                root_count: forest.roots().len(),
            },
            tree: Self::build_tree(forest.roots()),
            diagnostics: Self::build_diagnostics(forest.diagnostics()),
            selection: selection.map(|s| Self::build_selection(snapshot, s, separator)),
            unresolved_selection,
        }
    }

    fn build_metadata(metadata: &SnapshotMetadata) -> SnapshotMetadataView {
        SnapshotMetadataView {
            loaded_at: metadata.loaded_at().to_string(),
            snapshot_id: metadata.snapshot_id().to_string(),
            source_name: metadata.source_name().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    /// Flattens the forest into a pre-order outline with an explicit stack
    fn build_tree(roots: &[AssemblyNode]) -> Vec<TreeNodeView> {
        let mut tree = Vec::new();
        let mut stack: Vec<(&AssemblyNode, usize, Option<i64>)> =
            roots.iter().rev().map(|root| (root, 0, None)).collect();

        while let Some((node, depth, parent_id)) = stack.pop() {
            tree.push(TreeNodeView {
                id: node.id(),
                component_name: node.component_name().to_string(),
                part_number: node.record().part_number.clone(),
                depth,
                parent_id,
                child_count: node.children().len(),
            });
            stack.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (child, depth + 1, Some(node.id()))),
            );
        }

        tree
    }

    fn build_diagnostics(diagnostics: &BuildDiagnostics) -> DiagnosticsView {
        DiagnosticsView {
            orphans: diagnostics
                .orphans()
                .iter()
                .map(|orphan| OrphanView {
                    id: orphan.id,
                    component_name: orphan.component_name.clone(),
                    parent_name: orphan.parent_name.clone(),
                })
                .collect(),
            duplicates: diagnostics
                .duplicates()
                .iter()
                .map(|duplicate| DuplicateView {
                    component_name: duplicate.component_name.clone(),
                    displaced_id: duplicate.displaced_id,
                    kept_id: duplicate.kept_id,
                })
                .collect(),
            detached_ids: diagnostics.detached_ids().to_vec(),
            cyclic_ids: diagnostics.cyclic_ids().to_vec(),
        }
    }

    fn build_selection(
        snapshot: &AssemblySnapshot,
        selection: &Selection,
        separator: &str,
    ) -> SelectionView {
        let record = selection.record();
        let path = selection.path();
        let relevant = RelevanceFilter::relevant_rows(snapshot.records().records(), record);

        SelectionView {
            id: record.id,
            component_name: record.component_name.clone(),
            path: path.segments().to_vec(),
            path_display: path.join(separator),
            current_part: path
                .current_part()
                .unwrap_or(record.component_name.as_str())
                .to_string(),
            child_count: selection.child_count(),
            rows_kind: relevant.kind(),
            rows: relevant
                .rows()
                .iter()
                .map(|row| RecordView::from(*row))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::domain::{BomRecord, RecordSet};
    use crate::assembly::policies::BuildPolicy;
    use crate::assembly::services::{PathResolver, RowsKind, TreeBuilder};

    fn create_test_metadata() -> SnapshotMetadata {
        SnapshotMetadata::new(
            "2024-01-15T10:30:00Z".to_string(),
            "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
            "records.json".to_string(),
            "bom-master".to_string(),
            "0.1.0".to_string(),
        )
    }

    fn create_snapshot(records: Vec<BomRecord>) -> AssemblySnapshot {
        let records = RecordSet::new(records);
        let forest = TreeBuilder::build(&records, BuildPolicy::default()).unwrap();
        AssemblySnapshot::new(records, forest, create_test_metadata())
    }

    fn valve_snapshot() -> AssemblySnapshot {
        create_snapshot(vec![
            BomRecord::new(1, "VALVE", None),
            BomRecord::new(2, "SEAT", Some("VALVE")),
            BomRecord::new(3, "STEM", Some("VALVE")),
            BomRecord::new(4, "GASKET", Some("MISSING")),
        ])
    }

    fn select(snapshot: &AssemblySnapshot, id: i64) -> Selection {
        let node = snapshot.forest().find_node_by_id(id).unwrap();
        let path = PathResolver::resolve_node(node, snapshot.records()).unwrap();
        Selection::new(node.record().clone(), path, node.children().len())
    }

    #[test]
    fn test_build_without_selection() {
        let snapshot = valve_snapshot();
        let model = AssemblyReadModelBuilder::build(&snapshot, None, None, "\\");

        assert_eq!(model.metadata.tool_name, "bom-master");
        assert_eq!(model.metadata.source_name, "records.json");
        assert_eq!(model.summary.record_count, 4);
        assert_eq!(model.summary.node_count, 3);
        assert_eq!(model.summary.root_count, 1);
        assert!(model.selection.is_none());
        assert!(model.unresolved_selection.is_none());
    }

    #[test]
    fn test_build_tree_outline() {
        let snapshot = valve_snapshot();
        let model = AssemblyReadModelBuilder::build(&snapshot, None, None, "\\");

        let outline: Vec<(&str, usize, Option<i64>)> = model
            .tree
            .iter()
            .map(|n| (n.component_name.as_str(), n.depth, n.parent_id))
            .collect();
        assert_eq!(
            outline,
            vec![("VALVE", 0, None), ("SEAT", 1, Some(1)), ("STEM", 1, Some(1))]
        );
        assert_eq!(model.tree[0].child_count, 2);
    }

    #[test]
    fn test_build_tree_outline_is_pre_order() {
        let snapshot = create_snapshot(vec![
            BomRecord::new(1, "VALVE", None),
            BomRecord::new(2, "STEM", Some("VALVE")),
            BomRecord::new(3, "GLAND", Some("STEM")),
            BomRecord::new(4, "SEAT", Some("VALVE")),
            BomRecord::new(5, "PUMP", None),
        ]);
        let model = AssemblyReadModelBuilder::build(&snapshot, None, None, "\\");

        let ids: Vec<i64> = model.tree.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(model.tree[2].depth, 2);
        assert_eq!(model.tree[2].parent_id, Some(2));
    }

    #[test]
    fn test_build_diagnostics_separates_detached_and_cyclic() {
        let snapshot = create_snapshot(vec![
            BomRecord::new(1, "VALVE", None),
            BomRecord::new(2, "GASKET", Some("MISSING")),
            BomRecord::new(3, "SCREW", Some("GASKET")),
            BomRecord::new(4, "A", Some("B")),
            BomRecord::new(5, "B", Some("A")),
        ]);
        let model = AssemblyReadModelBuilder::build(&snapshot, None, None, "\\");

        assert_eq!(model.diagnostics.detached_ids, vec![3]);
        assert_eq!(model.diagnostics.cyclic_ids, vec![4, 5]);
    }

    #[test]
    fn test_build_diagnostics_lists_orphan() {
        let snapshot = valve_snapshot();
        let model = AssemblyReadModelBuilder::build(&snapshot, None, None, "\\");

        assert!(!model.diagnostics.is_empty());
        assert_eq!(model.diagnostics.orphans.len(), 1);
        assert_eq!(model.diagnostics.orphans[0].parent_name, "MISSING");
    }

    #[test]
    fn test_build_parent_selection() {
        let snapshot = valve_snapshot();
        let selection = select(&snapshot, 1);
        let model = AssemblyReadModelBuilder::build(&snapshot, Some(&selection), None, "\\");

        let view = model.selection.unwrap();
        assert_eq!(view.path_display, "VALVE");
        assert_eq!(view.current_part, "VALVE");
        assert_eq!(view.child_count, 2);
        assert_eq!(view.rows_kind, RowsKind::Children);
        let names: Vec<&str> = view.rows.iter().map(|r| r.component_name.as_str()).collect();
        assert_eq!(names, vec!["SEAT", "STEM"]);
    }

    #[test]
    fn test_build_leaf_selection_with_custom_separator() {
        let snapshot = valve_snapshot();
        let selection = select(&snapshot, 3);
        let model = AssemblyReadModelBuilder::build(&snapshot, Some(&selection), None, " > ");

        let view = model.selection.unwrap();
        assert_eq!(view.path, vec!["VALVE".to_string(), "STEM".to_string()]);
        assert_eq!(view.path_display, "VALVE > STEM");
        assert_eq!(view.current_part, "STEM");
        assert_eq!(view.rows_kind, RowsKind::OwnRows);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].parent_name, "VALVE");
    }

    #[test]
    fn test_build_keeps_unresolved_selection() {
        let snapshot = valve_snapshot();
        let model = AssemblyReadModelBuilder::build(&snapshot, None, Some(999), "\\");
        assert_eq!(model.unresolved_selection, Some(999));
    }
}
