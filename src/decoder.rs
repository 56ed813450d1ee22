//! Decoding: rebuild the tree from the header, then walk it bit by bit.

use tracing::{debug, info};

use crate::bits::BitSource;
use crate::container::ContainerHeader;
use crate::error::{Error, Result};
use crate::header::read_tree;
use crate::tree::{HuffmanTree, Node};

/// A finished decoding together with the tree read from the header.
#[derive(Debug, Clone)]
pub struct Decoding {
    pub bytes: Vec<u8>,
    pub tree: HuffmanTree,
    /// Size of the container that was decoded.
    pub input_bytes: usize,
    pub header_bits: u64,
    pub total_bits: u64,
}

/// Restores the original bytes from a container produced by `encode`.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    decode_detailed(data).map(|decoding| decoding.bytes)
}

pub fn decode_detailed(data: &[u8]) -> Result<Decoding> {
    let (container, body) = ContainerHeader::parse(data)?;
    let total_bits = container.total_bits();

    let mut source = BitSource::new(body, total_bits);
    let tree = read_tree(&mut source)?;
    let header_bits = source.position();

    let available = body.len() as u64 * 8;
    if available < total_bits {
        return Err(Error::TruncatedPayload { bit: available });
    }

    let payload_bits = total_bits - header_bits;
    if payload_bits == 0 {
        return Err(Error::TruncatedPayload { bit: header_bits });
    }
    let capacity = (payload_bits / shortest_code(&tree.root)) as usize;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailure {
            requested_bytes: capacity,
        })?;
    debug!(header_bits, payload_bits, "read header");

    let mut node = &tree.root;
    let mut mid_code = false;
    while let Some(bit) = source.read_bit() {
        if let Node::Internal { left, right, .. } = node {
            node = if bit { right } else { left };
        }
        match node {
            Node::Leaf { symbol, .. } => {
                bytes.push(*symbol);
                node = &tree.root;
                mid_code = false;
            }
            Node::Internal { .. } => mid_code = true,
        }
    }
    if mid_code {
        return Err(Error::TruncatedPayload {
            bit: source.position(),
        });
    }

    info!(
        input_bytes = data.len(),
        output_bytes = bytes.len(),
        "decoded"
    );
    Ok(Decoding {
        bytes,
        tree,
        input_bytes: data.len(),
        header_bits,
        total_bits,
    })
}

fn shortest_code(node: &Node) -> u64 {
    match node {
        Node::Leaf { .. } => 0,
        Node::Internal { left, right, .. } => 1 + shortest_code(left).min(shortest_code(right)),
    }
}
