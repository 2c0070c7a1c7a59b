use super::BomRecord;
use std::collections::HashMap;

/// RecordSet aggregate holding the flat records of one load, in source order
///
/// The name index follows the last-wins rule: when several records share a
/// component name, lookups by name return the last one.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<BomRecord>,
    by_name: HashMap<String, usize>,
}

impl RecordSet {
    pub fn new(records: Vec<BomRecord>) -> Self {
        let by_name = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.component_name.clone(), index))
            .collect();

        Self { records, by_name }
    }

    pub fn records(&self) -> &[BomRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BomRecord> {
        self.records.iter()
    }

    /// Returns the record registered under `component_name`
    pub fn get_by_name(&self, component_name: &str) -> Option<&BomRecord> {
        self.by_name
            .get(component_name)
            .map(|&index| &self.records[index])
    }

    /// Returns the first record carrying `id`
    pub fn get_by_id(&self, id: i64) -> Option<&BomRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a BomRecord;
    type IntoIter = std::slice::Iter<'a, BomRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valve_records() -> Vec<BomRecord> {
        vec![
            BomRecord::new(1, "VALVE", None),
            BomRecord::new(2, "SEAT", Some("VALVE")),
            BomRecord::new(3, "STEM", Some("VALVE")),
        ]
    }

    #[test]
    fn test_record_set_preserves_order() {
        let set = RecordSet::new(valve_records());
        let names: Vec<&str> = set.iter().map(|r| r.component_name.as_str()).collect();
        assert_eq!(names, vec!["VALVE", "SEAT", "STEM"]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_get_by_name() {
        let set = RecordSet::new(valve_records());
        assert_eq!(set.get_by_name("SEAT").map(|r| r.id), Some(2));
        assert!(set.get_by_name("MISSING").is_none());
    }

    #[test]
    fn test_get_by_name_last_wins() {
        let mut records = valve_records();
        records.push(BomRecord::new(9, "SEAT", Some("STEM")));
        let set = RecordSet::new(records);

        assert_eq!(set.get_by_name("SEAT").map(|r| r.id), Some(9));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_get_by_id() {
        let set = RecordSet::new(valve_records());
        assert_eq!(
            set.get_by_id(3).map(|r| r.component_name.as_str()),
            Some("STEM")
        );
        assert!(set.get_by_id(42).is_none());
    }

    #[test]
    fn test_empty_record_set() {
        let set = RecordSet::default();
        assert!(set.is_empty());
    }
}
