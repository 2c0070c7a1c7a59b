//! View of a single flat BOM row
//!
//! Columns follow the record table of the browser: parent, component,
//! part number, title, quantity, type, item, material.

use crate::assembly::domain::BomRecord;

/// View representation of one BOM record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub id: i64,
    /// Parent component name, empty for a root
    pub parent_name: String,
    pub component_name: String,
    pub part_number: String,
    pub title: String,
    pub quantity: String,
    pub component_type: String,
    pub item: String,
    pub material: String,
}

impl From<&BomRecord> for RecordView {
    fn from(record: &BomRecord) -> Self {
        Self {
            id: record.id,
            parent_name: record.parent().unwrap_or_default().to_string(),
            component_name: record.component_name.clone(),
            part_number: record.part_number.clone(),
            title: record.title.clone(),
            quantity: record.quantity.clone(),
            component_type: record.component_type.clone(),
            item: record.item.clone(),
            material: record.material.clone(),
        }
    }
}
