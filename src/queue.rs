//! Min-priority queue of tree nodes.
//!
//! Nodes come out in ascending frequency. Among equal frequencies the node
//! that was pushed first comes out first, which keeps the resulting tree
//! shape deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::tree::Node;

#[derive(Debug)]
struct Entry {
    freq: u64,
    seq: u64,
    node: Node,
}

impl Eq for Entry {}
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

// BinaryHeap is a max-heap, so both keys compare reversed.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct NodeQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl NodeQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        NodeQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            freq: node.freq(),
            seq,
            node,
        });
    }

    /// Removes the lowest-frequency node, oldest first on ties.
    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
