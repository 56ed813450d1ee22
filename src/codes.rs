//! Prefix codes derived from a Huffman tree.

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::frequency::SymbolCounts;
use crate::tree::{HuffmanTree, Node};

/// The bit code of one leaf. `false` is a left branch, `true` a right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: u8,
    pub bits: Vec<bool>,
}

impl CodeEntry {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a bit-prefix of `other`.
    pub fn is_prefix_of(&self, other: &CodeEntry) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

/// One entry per leaf, with a direct byte-indexed lookup.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
    index: [Option<u16>; 256],
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut entries = Vec::new();
        collect_codes(&tree.root, Vec::new(), &mut entries);

        let mut index = [None; 256];
        for (i, entry) in entries.iter().enumerate() {
            trace!(symbol = entry.symbol, len = entry.len(), "code entry");
            index[entry.symbol as usize] = Some(i as u16);
        }

        CodeTable { entries, index }
    }

    /// Looks up the code for `symbol`.
    pub fn get(&self, symbol: u8) -> Result<&CodeEntry> {
        self.index[symbol as usize]
            .map(|i| &self.entries[i as usize])
            .ok_or(Error::UnknownSymbolInTable(symbol))
    }

    /// Entries in tree order, left subtree first.
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.entries.iter().map(CodeEntry::len).max().unwrap_or(0)
    }

    /// Bits needed to encode an input with the given counts.
    pub fn payload_bits(&self, counts: &SymbolCounts) -> Result<u64> {
        let mut total = 0u64;
        for &(symbol, freq) in counts.entries() {
            total += self.get(symbol)?.len() as u64 * freq;
        }
        Ok(total)
    }
}

// Each branch gets its own copy of the prefix.
fn collect_codes(node: &Node, prefix: Vec<bool>, codes: &mut Vec<CodeEntry>) {
    match node {
        Node::Leaf { symbol, .. } => codes.push(CodeEntry {
            symbol: *symbol,
            bits: prefix,
        }),
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            collect_codes(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(true);
            collect_codes(right, right_prefix, codes);
        }
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:<8}{:<8}CODE", "SYMBOL", "BYTE", "LENGTH")?;
        for entry in &self.entries {
            let code: String = entry
                .bits
                .iter()
                .map(|&bit| if bit { '1' } else { '0' })
                .collect();
            writeln!(
                f,
                "{:<8}{:<8}{:<8}{}",
                format!("{:?}", char::from(entry.symbol)),
                format!("0x{:02x}", entry.symbol),
                entry.len(),
                code
            )?;
        }
        Ok(())
    }
}
