//! Huffman tree nodes and greedy construction.

use std::fmt::Write as _;

use tracing::debug;

use crate::error::{Error, Result};
use crate::frequency::SymbolCounts;
use crate::queue::NodeQueue;

/// A node of a strictly binary prefix tree.
///
/// Trees read back from a header carry frequency 0 everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    /// Joins two nodes under a new parent. `left` is the first popped.
    pub fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: Node,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lowest-frequency nodes.
    pub fn build(counts: &SymbolCounts) -> Result<Self> {
        if counts.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut queue = NodeQueue::with_capacity(counts.len());
        for &(symbol, freq) in counts.entries() {
            queue.push(Node::Leaf { symbol, freq });
        }

        while queue.len() > 1 {
            let left = queue.pop().ok_or(Error::EmptyInput)?;
            let right = queue.pop().ok_or(Error::EmptyInput)?;
            queue.push(Node::merge(left, right));
        }

        let root = queue.pop().ok_or(Error::EmptyInput)?;
        let tree = HuffmanTree { root };
        debug!(
            leaves = tree.leaf_count(),
            internal = tree.internal_count(),
            depth = tree.depth(),
            "built huffman tree"
        );
        Ok(tree)
    }

    pub fn leaf_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Internal { left, right, .. } => walk(left) + walk(right),
            }
        }
        walk(&self.root)
    }

    pub fn internal_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Internal { left, right, .. } => 1 + walk(left) + walk(right),
            }
        }
        walk(&self.root)
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Internal { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }

    /// Indented dump of the tree, one node per line, left child first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_node(&self.root, 0, "root", &mut out);
        out
    }
}

fn render_node(node: &Node, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { symbol, freq } => {
            let _ = writeln!(
                out,
                "{}{} -> leaf {:?} (0x{:02x}) [weight: {}]",
                indent,
                label,
                char::from(*symbol),
                symbol,
                freq
            );
        }
        Node::Internal { freq, left, right } => {
            let _ = writeln!(out, "{}{} -> internal [weight: {}]", indent, label, freq);
            render_node(left, depth + 1, "0", out);
            render_node(right, depth + 1, "1", out);
        }
    }
}
