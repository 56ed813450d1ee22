//! Tree-shape serialization.
//!
//! The tree is written in preorder. An internal node is a single `0` bit
//! followed by its left and right subtrees; a leaf is a `1` bit followed by
//! its 8-bit symbol. No frequencies are stored.

use crate::bits::{BitSink, BitSource};
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Deepest nesting a tree over 256 symbols can reach.
const MAX_DEPTH: usize = 255;

const MAX_LEAVES: usize = 256;

/// Bits taken by the header of `tree`.
pub fn header_bits(tree: &HuffmanTree) -> u64 {
    9 * tree.leaf_count() as u64 + tree.internal_count() as u64
}

pub fn write_tree(tree: &HuffmanTree, sink: &mut BitSink<'_>) -> Result<()> {
    write_node(&tree.root, sink)
}

fn write_node(node: &Node, sink: &mut BitSink<'_>) -> Result<()> {
    match node {
        Node::Leaf { symbol, .. } => {
            sink.write_bit(true)?;
            sink.write_byte(*symbol)
        }
        Node::Internal { left, right, .. } => {
            sink.write_bit(false)?;
            write_node(left, sink)?;
            write_node(right, sink)
        }
    }
}

/// Rebuilds a tree from the header at the start of `source`.
///
/// Fails with `MalformedHeader` rather than reading past the declared bit
/// length, and rejects shapes no encoder produces: a bare leaf as root,
/// nesting beyond 255 levels, more than 256 leaves or repeated symbols.
pub fn read_tree(source: &mut BitSource<'_>) -> Result<HuffmanTree> {
    let mut state = ReadState {
        seen: [false; 256],
        leaves: 0,
    };
    let root = read_node(source, &mut state, 0)?;
    if root.is_leaf() {
        return Err(Error::malformed(source.position(), "root is a leaf"));
    }
    Ok(HuffmanTree { root })
}

struct ReadState {
    seen: [bool; 256],
    leaves: usize,
}

fn read_node(source: &mut BitSource<'_>, state: &mut ReadState, depth: usize) -> Result<Node> {
    let is_leaf = source
        .read_bit()
        .ok_or_else(|| Error::malformed(source.position(), "ran out of bits"))?;

    if is_leaf {
        let symbol = source
            .read_byte()
            .ok_or_else(|| Error::malformed(source.position(), "ran out of bits in leaf symbol"))?;
        if std::mem::replace(&mut state.seen[symbol as usize], true) {
            return Err(Error::malformed(source.position(), "duplicate leaf symbol"));
        }
        state.leaves += 1;
        if state.leaves > MAX_LEAVES {
            return Err(Error::malformed(source.position(), "too many leaves"));
        }
        return Ok(Node::Leaf { symbol, freq: 0 });
    }

    if depth >= MAX_DEPTH {
        return Err(Error::malformed(source.position(), "tree too deep"));
    }
    let left = read_node(source, state, depth + 1)?;
    let right = read_node(source, state, depth + 1)?;
    Ok(Node::Internal {
        freq: 0,
        left: Box::new(left),
        right: Box::new(right),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::SymbolCounts;

    fn shape(node: &Node) -> String {
        match node {
            Node::Leaf { symbol, .. } => (*symbol as char).to_string(),
            Node::Internal { left, right, .. } => format!("({} {})", shape(left), shape(right)),
        }
    }

    fn written(tree: &HuffmanTree) -> (Vec<u8>, u64) {
        let mut out = Vec::new();
        let mut sink = BitSink::new(&mut out);
        write_tree(tree, &mut sink).unwrap();
        let bits = sink.finish().unwrap();
        (out, bits)
    }

    #[test]
    fn abracadabra_header_bits() {
        let tree = HuffmanTree::build(&SymbolCounts::count(b"abracadabra")).unwrap();
        let (out, bits) = written(&tree);

        assert_eq!(bits, 49);
        assert_eq!(header_bits(&tree), 49);
        // 0 1 01100001 0 0 1 01100011 1 01100100 0 1 01100010 1 01110010
        assert_eq!(out, vec![0x58, 0x4b, 0x1d, 0x91, 0x62, 0xb9, 0x00]);
    }

    #[test]
    fn read_inverts_write() {
        let tree = HuffmanTree::build(&SymbolCounts::count(b"mississippi river")).unwrap();
        let (out, bits) = written(&tree);

        let mut source = BitSource::new(&out, bits);
        let read = read_tree(&mut source).unwrap();
        assert_eq!(shape(&read.root), shape(&tree.root));
        assert_eq!(source.position(), bits);
    }

    #[test]
    fn nul_symbol_survives() {
        let tree = HuffmanTree::build(&SymbolCounts::count(&[0, 0, 0, 7])).unwrap();
        let (out, bits) = written(&tree);
        let read = read_tree(&mut BitSource::new(&out, bits)).unwrap();
        assert_eq!(shape(&read.root), shape(&tree.root));
    }

    #[test]
    fn header_past_declared_length_is_malformed() {
        let tree = HuffmanTree::build(&SymbolCounts::count(b"abracadabra")).unwrap();
        let (out, _) = written(&tree);
        let err = read_tree(&mut BitSource::new(&out, 30)).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }));
    }

    #[test]
    fn header_past_available_bytes_is_malformed() {
        let err = read_tree(&mut BitSource::new(&[0x00], 1_000)).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { bit: 8, .. }));
    }

    #[test]
    fn leaf_root_is_rejected() {
        // 1 01100001
        let err = read_tree(&mut BitSource::new(&[0xb0, 0x80], 9)).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedHeader { reason: "root is a leaf", .. }
        ));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        // 0 1 01100001 1 01100001
        let err = read_tree(&mut BitSource::new(&[0x58, 0x6c, 0x20], 19)).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedHeader { reason: "duplicate leaf symbol", .. }
        ));
    }

    #[test]
    fn runaway_nesting_is_rejected() {
        let zeros = vec![0u8; 64];
        let err = read_tree(&mut BitSource::new(&zeros, 512)).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedHeader { reason: "tree too deep", .. }
        ));
    }

    #[test]
    fn full_alphabet_header_cost() {
        let data: Vec<u8> = (0..=255).collect();
        let tree = HuffmanTree::build(&SymbolCounts::count(&data)).unwrap();
        assert_eq!(header_bits(&tree), 256 * 9 + 255);
    }
}
