use crate::application::read_models::{
    AssemblyReadModel, DiagnosticsView, RecordView, SelectionView, SnapshotMetadataView,
    TreeNodeView,
};
use crate::assembly::services::RowsKind;
use crate::ports::outbound::AssemblyFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssemblyDocument {
    metadata: Metadata,
    summary: Summary,
    tree: Vec<TreeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Warnings>,
    selection: Option<SelectedPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unresolved_selection: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    loaded_at: String,
    snapshot_id: String,
    source: String,
    tool: Tool,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    record_count: usize,
    node_count: usize,
    root_count: usize,
}

/// Outline entry; the tree is a flat pre-order list linked by `parentId`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TreeNode {
    id: i64,
    component_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    part_number: String,
    depth: usize,
    parent_id: Option<i64>,
    child_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Warnings {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    orphans: Vec<Orphan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    duplicates: Vec<Duplicate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    detached_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cyclic_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Orphan {
    id: i64,
    component_name: String,
    parent_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Duplicate {
    component_name: String,
    displaced_id: i64,
    kept_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectedPart {
    id: i64,
    component_name: String,
    path: Vec<String>,
    path_display: String,
    current_part: String,
    child_count: usize,
    rows_kind: &'static str,
    rows: Vec<Row>,
}

/// Rows keep the record API's upper-snake column names
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct Row {
    id: i64,
    parent_name: String,
    component_name: String,
    part_number: String,
    title: String,
    quantity: String,
    #[serde(rename = "TYPE")]
    component_type: String,
    item: String,
    material: String,
}

/// JsonFormatter adapter for machine-readable output
///
/// This adapter implements the AssemblyFormatter port for JSON format.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(metadata: &SnapshotMetadataView) -> Metadata {
        Metadata {
            loaded_at: metadata.loaded_at.clone(),
            snapshot_id: metadata.snapshot_id.clone(),
            source: metadata.source_name.clone(),
            tool: Tool {
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            },
        }
    }

    fn build_tree_node(node: &TreeNodeView) -> TreeNode {
        TreeNode {
            id: node.id,
            component_name: node.component_name.clone(),
            part_number: node.part_number.clone(),
            depth: node.depth,
            parent_id: node.parent_id,
            child_count: node.child_count,
        }
    }

    fn build_warnings(diagnostics: &DiagnosticsView) -> Option<Warnings> {
        if diagnostics.is_empty() {
            return None;
        }

        Some(Warnings {
            orphans: diagnostics
                .orphans
                .iter()
                .map(|o| Orphan {
                    id: o.id,
                    component_name: o.component_name.clone(),
                    parent_name: o.parent_name.clone(),
                })
                .collect(),
            duplicates: diagnostics
                .duplicates
                .iter()
                .map(|d| Duplicate {
                    component_name: d.component_name.clone(),
                    displaced_id: d.displaced_id,
                    kept_id: d.kept_id,
                })
                .collect(),
            detached_ids: diagnostics.detached_ids.clone(),
            cyclic_ids: diagnostics.cyclic_ids.clone(),
        })
    }

    fn build_selection(selection: &SelectionView) -> SelectedPart {
        SelectedPart {
            id: selection.id,
            component_name: selection.component_name.clone(),
            path: selection.path.clone(),
            path_display: selection.path_display.clone(),
            current_part: selection.current_part.clone(),
            child_count: selection.child_count,
            rows_kind: match selection.rows_kind {
                RowsKind::Children => "children",
                RowsKind::OwnRows => "own-rows",
                RowsKind::NoSelection => "none",
            },
            rows: selection.rows.iter().map(Self::build_row).collect(),
        }
    }

    fn build_row(row: &RecordView) -> Row {
        Row {
            id: row.id,
            parent_name: row.parent_name.clone(),
            component_name: row.component_name.clone(),
            part_number: row.part_number.clone(),
            title: row.title.clone(),
            quantity: row.quantity.clone(),
            component_type: row.component_type.clone(),
            item: row.item.clone(),
            material: row.material.clone(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AssemblyFormatter for JsonFormatter {
    fn format(&self, model: &AssemblyReadModel) -> Result<String> {
        let document = AssemblyDocument {
            metadata: Self::build_metadata(&model.metadata),
            summary: Summary {
                record_count: model.summary.record_count,
                node_count: model.summary.node_count,
                root_count: model.summary.root_count,
            },
            tree: model.tree.iter().map(Self::build_tree_node).collect(),
            warnings: Self::build_warnings(&model.diagnostics),
            selection: model.selection.as_ref().map(Self::build_selection),
            unresolved_selection: model.unresolved_selection,
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
