/// A record left out of the forest because its parent name resolves to nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedOrphan {
    pub id: i64,
    pub component_name: String,
    pub parent_name: String,
}

/// A component name registered by more than one record
///
/// `displaced_id` lost the name index to `kept_id`; children naming this
/// component attach under `kept_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedDuplicate {
    pub component_name: String,
    pub displaced_id: i64,
    pub kept_id: i64,
}

/// BuildDiagnostics value object describing what the lenient policies absorbed
///
/// Records that resolved a parent but never hang off a root fall into two
/// groups: those below a dropped orphan, and those in or below a parent
/// cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildDiagnostics {
    orphans: Vec<DroppedOrphan>,
    duplicates: Vec<CollapsedDuplicate>,
    detached_ids: Vec<i64>,
    cyclic_ids: Vec<i64>,
}

impl BuildDiagnostics {
    pub fn new(
        orphans: Vec<DroppedOrphan>,
        duplicates: Vec<CollapsedDuplicate>,
        detached_ids: Vec<i64>,
        cyclic_ids: Vec<i64>,
    ) -> Self {
        Self {
            orphans,
            duplicates,
            detached_ids,
            cyclic_ids,
        }
    }

    pub fn orphans(&self) -> &[DroppedOrphan] {
        &self.orphans
    }

    pub fn duplicates(&self) -> &[CollapsedDuplicate] {
        &self.duplicates
    }

    /// Ids of records left out because an ancestor was dropped as an orphan
    pub fn detached_ids(&self) -> &[i64] {
        &self.detached_ids
    }

    /// Ids of records whose parent chain loops instead of reaching a root
    pub fn cyclic_ids(&self) -> &[i64] {
        &self.cyclic_ids
    }

    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
            && self.duplicates.is_empty()
            && self.detached_ids.is_empty()
            && self.cyclic_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_diagnostics_are_clean() {
        let diagnostics = BuildDiagnostics::default();
        assert!(diagnostics.is_clean());
        assert!(diagnostics.orphans().is_empty());
        assert!(diagnostics.duplicates().is_empty());
        assert!(diagnostics.detached_ids().is_empty());
        assert!(diagnostics.cyclic_ids().is_empty());
    }

    #[test]
    fn test_diagnostics_with_orphan_are_not_clean() {
        let diagnostics = BuildDiagnostics::new(
            vec![DroppedOrphan {
                id: 4,
                component_name: "GASKET".to_string(),
                parent_name: "MISSING".to_string(),
            }],
            vec![],
            vec![],
            vec![],
        );
        assert!(!diagnostics.is_clean());
        assert_eq!(diagnostics.orphans()[0].parent_name, "MISSING");
    }

    #[test]
    fn test_diagnostics_with_cycle_are_not_clean() {
        let diagnostics = BuildDiagnostics::new(vec![], vec![], vec![], vec![2, 3]);
        assert!(!diagnostics.is_clean());
        assert_eq!(diagnostics.cyclic_ids(), &[2, 3]);
        assert!(diagnostics.detached_ids().is_empty());
    }
}
