use crate::assembly::domain::{
    AssemblyNode, BomRecord, BuildDiagnostics, CollapsedDuplicate, DroppedOrphan, Forest,
    RecordSet,
};
use crate::assembly::policies::{BuildPolicy, DuplicatePolicy, OrphanPolicy};
use crate::shared::error::BomError;
use crate::shared::Result;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    Unvisited,
    OnChain,
    Attached,
    BelowOrphan,
    Cyclic,
}

/// TreeBuilder service turning a flat record set into a forest
///
/// This service contains pure business logic with no I/O. It joins records
/// on component name, never on id.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds the forest for `records` under `policy`
    ///
    /// # Arguments
    /// * `records` - The flat records in source order
    /// * `policy` - How duplicate names and orphan records are handled
    ///
    /// # Returns
    /// The forest: roots in source order, children in source order
    ///
    /// # Errors
    /// Only under the rejecting policies:
    /// - `DuplicateComponentName` for a name used twice (`DuplicatePolicy::Reject`)
    /// - `OrphanRecord` for an unresolvable parent (`OrphanPolicy::Reject`)
    pub fn build(records: &RecordSet, policy: BuildPolicy) -> Result<Forest> {
        let records = records.records();
        let mut duplicates = Vec::new();
        let mut orphans = Vec::new();

        let by_name = Self::index_names(records, policy.duplicates, &mut duplicates)?;

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
        let mut roots = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let Some(parent_name) = record.parent() else {
                roots.push(index);
                continue;
            };

            match by_name.get(parent_name) {
                Some(&parent) => children[parent].push(index),
                None => match policy.orphans {
                    OrphanPolicy::Drop => orphans.push(DroppedOrphan {
                        id: record.id,
                        component_name: record.component_name.clone(),
                        parent_name: parent_name.to_string(),
                    }),
                    OrphanPolicy::Reject => {
                        return Err(BomError::OrphanRecord {
                            id: record.id,
                            component_name: record.component_name.clone(),
                            parent_name: parent_name.to_string(),
                        }
                        .into())
                    }
                },
            }
        }

        let order = Self::breadth_first_order(&roots, &children);
        let (detached_ids, cyclic_ids) = Self::classify_unreached(records, &order, &by_name);
        let roots = Self::assemble(records, &roots, &children, &order);

        Ok(Forest::new(
            roots,
            BuildDiagnostics::new(orphans, duplicates, detached_ids, cyclic_ids),
        ))
    }

    /// Maps each component name to the index of the record that owns it
    fn index_names<'a>(
        records: &'a [BomRecord],
        policy: DuplicatePolicy,
        duplicates: &mut Vec<CollapsedDuplicate>,
    ) -> Result<HashMap<&'a str, usize>> {
        let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let Some(previous) = by_name.insert(record.component_name.as_str(), index) else {
                continue;
            };
            let displaced = &records[previous];

            match policy {
                DuplicatePolicy::LastWins => duplicates.push(CollapsedDuplicate {
                    component_name: record.component_name.clone(),
                    displaced_id: displaced.id,
                    kept_id: record.id,
                }),
                DuplicatePolicy::Reject => {
                    return Err(BomError::DuplicateComponentName {
                        component_name: record.component_name.clone(),
                        first_id: displaced.id,
                        duplicate_id: record.id,
                    }
                    .into())
                }
            }
        }

        Ok(by_name)
    }

    /// Record indices reachable from the roots, level by level
    ///
    /// Every record has at most one parent slot, so each index is queued at
    /// most once.
    fn breadth_first_order(roots: &[usize], children: &[Vec<usize>]) -> Vec<usize> {
        let mut order = Vec::with_capacity(children.len());
        let mut queue: VecDeque<usize> = roots.iter().copied().collect();

        while let Some(index) = queue.pop_front() {
            order.push(index);
            queue.extend(children[index].iter().copied());
        }

        order
    }

    /// Splits the records no root leads to into (below an orphan, in a cycle)
    ///
    /// Each unreached record's parent chain is walked once; records already
    /// classified end a walk early. Dropped orphans themselves are reported
    /// separately and are not part of either list.
    fn classify_unreached(
        records: &[BomRecord],
        order: &[usize],
        by_name: &HashMap<&str, usize>,
    ) -> (Vec<i64>, Vec<i64>) {
        let mut state = vec![Reach::Unvisited; records.len()];
        for &index in order {
            state[index] = Reach::Attached;
        }

        for start in 0..records.len() {
            if state[start] != Reach::Unvisited {
                continue;
            }

            let mut chain = Vec::new();
            let mut current = start;
            let outcome = loop {
                match state[current] {
                    Reach::Unvisited => {}
                    Reach::OnChain => break Reach::Cyclic,
                    settled => break settled,
                }
                state[current] = Reach::OnChain;
                chain.push(current);

                match records[current].parent().and_then(|parent| by_name.get(parent)) {
                    Some(&parent) => current = parent,
                    None => break Reach::BelowOrphan,
                }
            };

            for index in chain {
                state[index] = outcome;
            }
        }

        let mut detached_ids = Vec::new();
        let mut cyclic_ids = Vec::new();
        for (record, reach) in records.iter().zip(&state) {
            let resolved = record
                .parent()
                .is_some_and(|parent| by_name.contains_key(parent));
            match reach {
                Reach::BelowOrphan if resolved => detached_ids.push(record.id),
                Reach::Cyclic => cyclic_ids.push(record.id),
                _ => {}
            }
        }

        (detached_ids, cyclic_ids)
    }

    /// Builds the owned nodes bottom-up, deepest level first
    fn assemble(
        records: &[BomRecord],
        roots: &[usize],
        children: &[Vec<usize>],
        order: &[usize],
    ) -> Vec<AssemblyNode> {
        let mut built: Vec<Option<AssemblyNode>> = (0..records.len()).map(|_| None).collect();

        for &index in order.iter().rev() {
            let node_children = children[index]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[index] = Some(AssemblyNode::new(records[index].clone(), node_children));
        }

        roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect()
    }
}
