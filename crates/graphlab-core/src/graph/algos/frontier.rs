use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::model::NodeId;

/// A candidate node on the search frontier
///
/// Entries order by priority, then by insertion sequence, then by node id,
/// so equal-priority candidates pop first-in first-out and a search over a
/// fixed graph always expands nodes in the same order.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub priority: f64,
    pub seq: u64,
    pub node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Min-priority frontier that tolerates duplicate entries per node
///
/// Improving a node's priority pushes a new entry; the stale one stays in
/// the heap and the caller discards it when popped (closed-set check).
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, priority: f64) {
        let entry = FrontierEntry {
            priority,
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
