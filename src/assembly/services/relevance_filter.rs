use crate::assembly::domain::BomRecord;

/// Which rule produced a set of relevant rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsKind {
    /// The selected component has children; these are their rows
    Children,
    /// The selected component is a leaf; these are its own rows
    OwnRows,
    /// Nothing is selected
    NoSelection,
}

/// Rows to display for a selection, in record-set order
#[derive(Debug, Clone, PartialEq)]
pub struct RelevantRows<'a> {
    kind: RowsKind,
    rows: Vec<&'a BomRecord>,
}

impl<'a> RelevantRows<'a> {
    pub fn kind(&self) -> RowsKind {
        self.kind
    }

    pub fn rows(&self) -> &[&'a BomRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<&'a BomRecord> {
        self.rows
    }
}

/// RelevanceFilter service deciding which flat rows describe a selection
///
/// Works over the full flat record list rather than the forest, so it gives
/// the same answer for a record that was dropped from the tree.
pub struct RelevanceFilter;

impl RelevanceFilter {
    /// Computes the rows to display for `selected`
    ///
    /// - If any record names `selected` as its parent: those records, minus any
    ///   record that shares the selected component's own name
    /// - Otherwise: every record carrying the selected component's name
    pub fn relevant_rows<'a>(records: &'a [BomRecord], selected: &BomRecord) -> RelevantRows<'a> {
        let name = selected.component_name.as_str();
        let is_parent = records.iter().any(|record| record.is_child_of(name));

        if is_parent {
            RelevantRows {
                kind: RowsKind::Children,
                rows: records
                    .iter()
                    .filter(|record| record.is_child_of(name) && record.component_name != name)
                    .collect(),
            }
        } else {
            RelevantRows {
                kind: RowsKind::OwnRows,
                rows: records
                    .iter()
                    .filter(|record| record.component_name == name)
                    .collect(),
            }
        }
    }

    /// Like `relevant_rows`, but yields an empty result when nothing is selected
    pub fn for_selection<'a>(
        records: &'a [BomRecord],
        selected: Option<&BomRecord>,
    ) -> RelevantRows<'a> {
        match selected {
            Some(record) => Self::relevant_rows(records, record),
            None => RelevantRows {
                kind: RowsKind::NoSelection,
                rows: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, parent: Option<&str>) -> BomRecord {
        BomRecord::new(id, name, parent)
    }

    fn valve_records() -> Vec<BomRecord> {
        vec![
            record(1, "VALVE", None),
            record(2, "SEAT", Some("VALVE")),
            record(3, "STEM", Some("VALVE")),
        ]
    }

    fn ids(rows: &RelevantRows<'_>) -> Vec<i64> {
        rows.rows().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_parent_selection_returns_children() {
        let records = valve_records();
        let rows = RelevanceFilter::relevant_rows(&records, &records[0]);
        assert_eq!(rows.kind(), RowsKind::Children);
        assert_eq!(ids(&rows), vec![2, 3]);
    }

    #[test]
    fn test_leaf_selection_returns_own_row() {
        let records = valve_records();
        let rows = RelevanceFilter::relevant_rows(&records, &records[1]);
        assert_eq!(rows.kind(), RowsKind::OwnRows);
        assert_eq!(ids(&rows), vec![2]);
    }

    #[test]
    fn test_leaf_selection_returns_all_rows_with_same_name() {
        let mut records = valve_records();
        records.push(record(7, "SEAT", Some("STEM")));
        let rows = RelevanceFilter::relevant_rows(&records, &records[1]);
        assert_eq!(rows.kind(), RowsKind::OwnRows);
        assert_eq!(ids(&rows), vec![2, 7]);
    }

    #[test]
    fn test_parent_selection_excludes_self_referencing_row() {
        let mut records = valve_records();
        records.push(record(8, "VALVE", Some("VALVE")));
        let rows = RelevanceFilter::relevant_rows(&records, &records[0]);
        assert_eq!(rows.kind(), RowsKind::Children);
        assert_eq!(ids(&rows), vec![2, 3]);
    }

    #[test]
    fn test_only_self_referencing_row_still_counts_as_parent() {
        let records = vec![record(1, "LOOP", Some("LOOP"))];
        let rows = RelevanceFilter::relevant_rows(&records, &records[0]);
        assert_eq!(rows.kind(), RowsKind::Children);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_selection_outside_record_list() {
        let records = valve_records();
        let stranger = record(99, "GASKET", Some("MISSING"));
        let rows = RelevanceFilter::relevant_rows(&records, &stranger);
        assert_eq!(rows.kind(), RowsKind::OwnRows);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_selection_is_empty() {
        let records = valve_records();
        let rows = RelevanceFilter::for_selection(&records, None);
        assert_eq!(rows.kind(), RowsKind::NoSelection);
        assert!(rows.is_empty());
        assert_eq!(rows.len(), 0);
    }

    #[test]
    fn test_for_selection_delegates() {
        let records = valve_records();
        let rows = RelevanceFilter::for_selection(&records, Some(&records[2]));
        assert_eq!(rows.into_rows().len(), 1);
    }
}
