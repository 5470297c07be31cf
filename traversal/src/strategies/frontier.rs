use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    node::{Cost, Node},
    tree::{NodeId, SearchTree},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<W> {
    priority: W,
    seq: u64,
    cost: W,
    id: NodeId,
}

// reversed so the max-heap pops the lowest priority, oldest push first
impl<W: Ord> Ord for Entry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<W: Ord> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier shared by the weighted strategies.
///
/// A node may be pushed several times as cheaper paths to it are found. Each
/// entry remembers the cost it was pushed with; entries whose cost no longer
/// matches the tree are stale and get discarded instead of expanded.
#[derive(Debug, Clone)]
pub(crate) struct Frontier<W> {
    heap: BinaryHeap<Entry<W>>,
    seq: u64,
}

impl<W: Cost> Frontier<W> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn push(&mut self, id: NodeId, cost: W, priority: W) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            cost,
            id,
        });
        self.seq += 1;
    }

    pub(crate) fn pop<T: Node>(&mut self, tree: &SearchTree<T, W>) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            if tree.cost(entry.id) < entry.cost {
                continue;
            }

            return Some(entry.id);
        }

        None
    }

    pub(crate) fn has_live<T: Node>(&mut self, tree: &SearchTree<T, W>) -> bool {
        while let Some(entry) = self.heap.peek() {
            if tree.cost(entry.id) >= entry.cost {
                return true;
            }

            self.heap.pop();
        }

        false
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
