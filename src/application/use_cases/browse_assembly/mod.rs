use crate::application::dto::{BrowseRequest, BrowseResponse};
use crate::assembly::domain::{AssemblySnapshot, BuildDiagnostics, RecordSet, Selection};
use crate::assembly::policies::BuildPolicy;
use crate::assembly::services::{PathResolver, SnapshotGenerator, TreeBuilder};
use crate::ports::outbound::{ProgressReporter, RecordSource};
use crate::shared::error::BomError;
use crate::shared::Result;
use std::sync::Arc;

/// AssemblyBrowser - Core use case for browsing a BOM assembly
///
/// Holds the current snapshot (records, forest, metadata) and answers
/// selections against it. Infrastructure comes in through generic
/// dependency injection.
///
/// # Type Parameters
/// * `RS` - RecordSource implementation
/// * `PR` - ProgressReporter implementation
pub struct AssemblyBrowser<RS, PR> {
    record_source: RS,
    progress_reporter: PR,
    policy: BuildPolicy,
    snapshot: Option<Arc<AssemblySnapshot>>,
}

impl<RS, PR> AssemblyBrowser<RS, PR>
where
    RS: RecordSource,
    PR: ProgressReporter,
{
    /// Creates a new AssemblyBrowser with injected dependencies; nothing is loaded yet
    pub fn new(record_source: RS, progress_reporter: PR, policy: BuildPolicy) -> Self {
        Self {
            record_source,
            progress_reporter,
            policy,
            snapshot: None,
        }
    }

    /// The current snapshot, if a load has succeeded
    pub fn snapshot(&self) -> Option<Arc<AssemblySnapshot>> {
        self.snapshot.clone()
    }

    /// Fetches the records and rebuilds the forest
    ///
    /// The new snapshot replaces the current one only once it is completely
    /// built. On any failure the previous snapshot stays in place.
    ///
    /// # Errors
    /// - `RecordFetchFailure` if the source fails
    /// - `OrphanRecord` / `DuplicateComponentName` if the build policy rejects the records
    pub async fn reload(&mut self) -> Result<Arc<AssemblySnapshot>> {
        let source_name = self.record_source.source_name();
        self.progress_reporter
            .report_waiting(&format!("📡 Fetching BOM records from: {}", source_name));

        let snapshot = match self.build_snapshot(&source_name).await {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Loading the assembly failed; keeping the previous data");
                return Err(e);
            }
        };

        self.report_diagnostics(snapshot.forest().diagnostics());
        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} record(s) into {} root assembly(ies)",
            snapshot.records().len(),
            snapshot.forest().roots().len()
        ));

        self.snapshot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    async fn build_snapshot(&self, source_name: &str) -> Result<AssemblySnapshot> {
        let records = RecordSet::new(self.record_source.fetch_records().await?);
        let forest = TreeBuilder::build(&records, self.policy)?;
        let metadata = SnapshotGenerator::generate_default_metadata(source_name);
        Ok(AssemblySnapshot::new(records, forest, metadata))
    }

    fn report_diagnostics(&self, diagnostics: &BuildDiagnostics) {
        for orphan in diagnostics.orphans() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Dropped record {} '{}': parent '{}' not found",
                orphan.id, orphan.component_name, orphan.parent_name
            ));
        }
        for duplicate in diagnostics.duplicates() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Component name '{}' is used by records {} and {}; children attach under record {}",
                duplicate.component_name, duplicate.displaced_id, duplicate.kept_id, duplicate.kept_id
            ));
        }
        if !diagnostics.detached_ids().is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} record(s) sit below a dropped orphan and are unreachable: {}",
                diagnostics.detached_ids().len(),
                join_ids(diagnostics.detached_ids())
            ));
        }
        if !diagnostics.cyclic_ids().is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} record(s) form a parent cycle and are unreachable: {}",
                diagnostics.cyclic_ids().len(),
                join_ids(diagnostics.cyclic_ids())
            ));
        }
    }

    /// Selects the node with `id` in the current snapshot
    ///
    /// # Returns
    /// The node's record, its root-first path and its child count
    ///
    /// # Errors
    /// - `NodeNotFound` if no node in the forest carries `id`
    /// - `CyclicHierarchy` if the path walk loops
    /// - an error if nothing has been loaded yet
    pub fn select(&self, id: i64) -> Result<Selection> {
        let Some(snapshot) = self.snapshot.as_ref() else {
            anyhow::bail!("No assembly is loaded yet; reload before selecting a node");
        };

        let node = snapshot
            .forest()
            .find_node_by_id(id)
            .ok_or(BomError::NodeNotFound { id })?;
        let path = PathResolver::resolve_node(node, snapshot.records())?;

        Ok(Selection::new(
            node.record().clone(),
            path,
            node.children().len(),
        ))
    }

    /// Executes one browse: loads if needed, then applies the selection
    ///
    /// An unknown id does not fail the browse. It is reported as a warning
    /// and returned in `unresolved_selection`.
    ///
    /// # Errors
    /// Any error of `reload` or, apart from `NodeNotFound`, of `select`
    pub async fn execute(&mut self, request: BrowseRequest) -> Result<BrowseResponse> {
        let snapshot = match self.snapshot() {
            Some(snapshot) => snapshot,
            None => self.reload().await?,
        };

        let Some(id) = request.selected_id else {
            return Ok(BrowseResponse::new(snapshot, None, None));
        };

        match self.select(id) {
            Ok(selection) => {
                self.progress_reporter.report(&format!(
                    "🔎 Selected: {}",
                    selection.path().join(&request.path_separator)
                ));
                Ok(BrowseResponse::new(snapshot, Some(selection), None))
            }
            Err(e) if matches!(e.downcast_ref::<BomError>(), Some(BomError::NodeNotFound { .. })) => {
                self.progress_reporter
                    .report_warning(&format!("⚠️  Warning: No node with id {} in the assembly", id));
                Ok(BrowseResponse::new(snapshot, None, Some(id)))
            }
            Err(e) => Err(e),
        }
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
