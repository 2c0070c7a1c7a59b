use crate::application::read_models::{
    AssemblyReadModel, DiagnosticsView, RecordView, SelectionView, SnapshotMetadataView,
    SummaryView, TreeNodeView,
};
use crate::assembly::services::RowsKind;
use crate::ports::outbound::AssemblyFormatter;
use crate::shared::Result;

/// Markdown table header for BOM rows
const TABLE_HEADER: &str =
    "| PARENT_NAME | COMPONENT_NAME | PART_NUMBER | TITLE | QUANTITY | TYPE | ITEM | MATERIAL |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|-------------|----------------|-------------|-------|----------|------|------|----------|\n";

/// Nesting depth beyond which outline lines stop indenting further
const MAX_OUTLINE_INDENT: usize = 32;

/// Shown in place of the table when nothing is selected
pub const NO_SELECTION_PLACEHOLDER: &str = "Select a part from the tree to view its details.";

/// MarkdownFormatter adapter rendering the assembly tree and the selected part
///
/// This adapter implements the AssemblyFormatter port for Markdown output.
/// The tree outline is a nested bullet list; the selection becomes a path
/// line followed by a table of the relevant rows.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &SnapshotMetadataView) {
        output.push_str("# BOM Master - Visual Parts Management\n\n");
        output.push_str(&format!("- Source: {}\n", metadata.source_name));
        output.push_str(&format!("- Loaded at: {}\n", metadata.loaded_at));
        output.push_str(&format!("- Snapshot: {}\n", metadata.snapshot_id));
        output.push_str(&format!(
            "- Generated by: {} {}\n\n",
            metadata.tool_name, metadata.tool_version
        ));
    }

    fn render_tree(&self, output: &mut String, tree: &[TreeNodeView], summary: &SummaryView) {
        output.push_str("## Assembly Tree\n\n");
        output.push_str(&format!(
            "{} records, {} nodes in {} root assemblies.\n\n",
            summary.record_count, summary.node_count, summary.root_count
        ));

        if tree.is_empty() {
            output.push_str("*No assemblies loaded.*\n\n");
            return;
        }

        for node in tree {
            output.push_str(&"  ".repeat(node.depth.min(MAX_OUTLINE_INDENT)));
            if node.depth > MAX_OUTLINE_INDENT {
                output.push_str(&format!(
                    "- {} (id: {}, depth: {})\n",
                    node.component_name, node.id, node.depth
                ));
            } else {
                output.push_str(&format!("- {} (id: {})\n", node.component_name, node.id));
            }
        }
        output.push('\n');
    }

    fn render_diagnostics(&self, output: &mut String, diagnostics: &DiagnosticsView) {
        if diagnostics.is_empty() {
            return;
        }

        output.push_str("## Load Warnings\n\n");
        for orphan in &diagnostics.orphans {
            output.push_str(&format!(
                "- Orphan record {} '{}' references unknown parent '{}'; left out of the tree\n",
                orphan.id, orphan.component_name, orphan.parent_name
            ));
        }
        for duplicate in &diagnostics.duplicates {
            output.push_str(&format!(
                "- Component name '{}' is used by records {} and {}; children attach under {}\n",
                duplicate.component_name,
                duplicate.displaced_id,
                duplicate.kept_id,
                duplicate.kept_id
            ));
        }
        if !diagnostics.detached_ids.is_empty() {
            output.push_str(&format!(
                "- Records below a dropped orphan, left out of the tree: {}\n",
                join_ids(&diagnostics.detached_ids)
            ));
        }
        if !diagnostics.cyclic_ids.is_empty() {
            output.push_str(&format!(
                "- Records unreachable from any root (parent cycle): {}\n",
                join_ids(&diagnostics.cyclic_ids)
            ));
        }
        output.push('\n');
    }

    fn render_selection(&self, output: &mut String, model: &AssemblyReadModel) {
        output.push_str("## Selected Part\n\n");

        if let Some(id) = model.unresolved_selection {
            output.push_str(&format!("No part with id {} exists in this assembly.\n\n", id));
        }

        match &model.selection {
            Some(selection) => self.render_selected_part(output, selection),
            None => {
                output.push_str(NO_SELECTION_PLACEHOLDER);
                output.push_str("\n\n");
            }
        }
    }

    fn render_selected_part(&self, output: &mut String, selection: &SelectionView) {
        output.push_str(&format!(
            "**Parent Child Part:** {}\n\n",
            selection.path_display
        ));
        output.push_str(&format!("**Current Part:** {}\n\n", selection.current_part));

        let caption = match selection.rows_kind {
            RowsKind::Children => format!("Components of {}", selection.component_name),
            _ => format!("Records of {}", selection.component_name),
        };
        output.push_str(&format!("### {}\n\n", caption));

        if selection.rows.is_empty() {
            output.push_str("*No matching records.*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in &selection.rows {
            self.render_row(output, row);
        }
        output.push('\n');
    }

    fn render_row(&self, output: &mut String, row: &RecordView) {
        let cells = [
            &row.parent_name,
            &row.component_name,
            &row.part_number,
            &row.title,
            &row.quantity,
            &row.component_type,
            &row.item,
            &row.material,
        ];
        let escaped: Vec<String> = cells
            .iter()
            .map(|cell| Self::escape_markdown_table_cell(cell))
            .collect();
        output.push_str(&format!("| {} |\n", escaped.join(" | ")));
    }
}

impl AssemblyFormatter for MarkdownFormatter {
    fn format(&self, model: &AssemblyReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_tree(&mut output, &model.tree, &model.summary);
        self.render_diagnostics(&mut output, &model.diagnostics);
        self.render_selection(&mut output, model);

        Ok(output)
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
