use crate::assembly::domain::{AssemblyNode, BomRecord, ComponentPath, RecordSet};
use crate::shared::error::BomError;
use crate::shared::Result;
use std::collections::{HashSet, VecDeque};

/// PathResolver service reconstructing the root-to-node path of a component
///
/// The walk goes upward through parent names using the record set's name
/// index, so it does not need the forest at all.
pub struct PathResolver;

impl PathResolver {
    /// Resolves the path of `record`, root first
    ///
    /// The walk stops at a record without a parent or at a parent name the
    /// record set does not know.
    ///
    /// # Errors
    /// Returns `CyclicHierarchy` if a component name comes up twice on the walk
    pub fn resolve(record: &BomRecord, records: &RecordSet) -> Result<ComponentPath> {
        let mut segments = VecDeque::from([record.component_name.clone()]);
        let mut visited: HashSet<&str> = HashSet::from([record.component_name.as_str()]);
        let mut current = record;

        while let Some(parent_name) = current.parent() {
            let Some(parent) = records.get_by_name(parent_name) else {
                break;
            };

            if !visited.insert(parent.component_name.as_str()) {
                return Err(BomError::CyclicHierarchy {
                    component_name: parent.component_name.clone(),
                }
                .into());
            }

            segments.push_front(parent.component_name.clone());
            current = parent;
        }

        Ok(ComponentPath::new(segments.into()))
    }

    /// Resolves the path of a node taken from the forest
    pub fn resolve_node(node: &AssemblyNode, records: &RecordSet) -> Result<ComponentPath> {
        Self::resolve(node.record(), records)
    }
}
