use super::BomRecord;
use std::fmt;

/// AssemblyNode - a BOM record placed in the assembly hierarchy
///
/// Children are owned by the node, kept in record order, and never mutated
/// after the tree builder hands the node out. Dropping and debug-printing
/// do not recurse, so arbitrarily deep chains are safe.
pub struct AssemblyNode {
    record: BomRecord,
    children: Vec<AssemblyNode>,
}

impl AssemblyNode {
    pub fn new(record: BomRecord, children: Vec<AssemblyNode>) -> Self {
        Self { record, children }
    }

    pub fn record(&self) -> &BomRecord {
        &self.record
    }

    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn component_name(&self) -> &str {
        &self.record.component_name
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.record.parent()
    }

    pub fn children(&self) -> &[AssemblyNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts this node and everything below it
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl fmt::Debug for AssemblyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssemblyNode")
            .field("record", &self.record)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Drop for AssemblyNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
