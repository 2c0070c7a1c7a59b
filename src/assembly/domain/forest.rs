use super::{AssemblyNode, BuildDiagnostics};
use std::collections::VecDeque;

/// Forest aggregate: the ordered root nodes built from one record set
#[derive(Debug, Default)]
pub struct Forest {
    roots: Vec<AssemblyNode>,
    diagnostics: BuildDiagnostics,
}

impl Forest {
    pub fn new(roots: Vec<AssemblyNode>, diagnostics: BuildDiagnostics) -> Self {
        Self { roots, diagnostics }
    }

    pub fn roots(&self) -> &[AssemblyNode] {
        &self.roots
    }

    pub fn diagnostics(&self) -> &BuildDiagnostics {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes reachable from the roots
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(AssemblyNode::subtree_size).sum()
    }

    /// Visits every node once, level by level, children in stored order
    pub fn iter_breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst {
            queue: self.roots.iter().collect(),
        }
    }

    /// Finds the first node carrying `id` in breadth-first order
    pub fn find_node_by_id(&self, id: i64) -> Option<&AssemblyNode> {
        self.iter_breadth_first().find(|node| node.id() == id)
    }
}

/// Breadth-first iterator over a forest
pub struct BreadthFirst<'a> {
    queue: VecDeque<&'a AssemblyNode>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a AssemblyNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children().iter());
        Some(node)
    }
}
