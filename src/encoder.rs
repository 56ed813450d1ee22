//! Encoding: count, build, derive codes, then pack header and payload.

use serde::Serialize;
use tracing::{debug, info};

use crate::bits::BitSink;
use crate::codes::CodeTable;
use crate::container::{body_len, ContainerHeader, PREAMBLE_LEN};
use crate::error::{Error, Result};
use crate::frequency::SymbolCounts;
use crate::header::{header_bits, write_tree};
use crate::tree::HuffmanTree;

/// Sizes recorded while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodeStats {
    pub input_bytes: usize,
    /// Leaves in the tree, including an injected placeholder.
    pub distinct_symbols: usize,
    pub header_bits: u64,
    pub payload_bits: u64,
    pub total_bits: u64,
    pub output_bytes: usize,
    pub max_code_len: usize,
}

/// A finished encoding together with the tree and table that produced it.
#[derive(Debug, Clone)]
pub struct Encoding {
    pub bytes: Vec<u8>,
    pub stats: EncodeStats,
    pub tree: HuffmanTree,
    pub table: CodeTable,
}

/// Compresses `data` into a self-describing container.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    encode_detailed(data).map(|encoding| encoding.bytes)
}

pub fn encode_detailed(data: &[u8]) -> Result<Encoding> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let counts = SymbolCounts::count(data);
    let tree = HuffmanTree::build(&counts)?;
    let table = CodeTable::from_tree(&tree);

    let header_bits = header_bits(&tree);
    let payload_bits = table.payload_bits(&counts)?;
    let total_bits = header_bits + payload_bits;
    let container = ContainerHeader::new(total_bits)?;
    debug!(header_bits, payload_bits, total_bits, "sized container");

    let output_bytes = PREAMBLE_LEN + body_len(total_bits);
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(output_bytes)
        .map_err(|_| Error::AllocationFailure {
            requested_bytes: output_bytes,
        })?;

    container.write(&mut bytes);
    let mut sink = BitSink::new(&mut bytes);
    write_tree(&tree, &mut sink)?;
    for &byte in data {
        sink.write_bits(&table.get(byte)?.bits)?;
    }
    let written = sink.finish()?;
    debug_assert_eq!(written, total_bits);
    debug_assert_eq!(bytes.len(), output_bytes);

    let stats = EncodeStats {
        input_bytes: data.len(),
        distinct_symbols: table.len(),
        header_bits,
        payload_bits,
        total_bits,
        output_bytes,
        max_code_len: table.max_len(),
    };
    info!(
        input_bytes = stats.input_bytes,
        output_bytes = stats.output_bytes,
        symbols = stats.distinct_symbols,
        "encoded"
    );

    Ok(Encoding {
        bytes,
        stats,
        tree,
        table,
    })
}
