//! Per-byte frequency counting.

use tracing::warn;

/// Symbol injected when the input holds a single distinct byte, so that the
/// tree always has two leaves.
pub const PLACEHOLDER_SYMBOL: u8 = b'a';

/// Fallback placeholder for inputs made only of `PLACEHOLDER_SYMBOL`.
const PLACEHOLDER_FALLBACK: u8 = b'b';

/// Symbols and their counts, in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCounts {
    entries: Vec<(u8, u64)>,
}

impl SymbolCounts {
    /// Tallies every byte of `data`.
    ///
    /// If `data` contains exactly one distinct byte value, a placeholder
    /// entry with frequency 0 is appended. Empty input yields no entries.
    pub fn count(data: &[u8]) -> Self {
        let mut slots: [Option<usize>; 256] = [None; 256];
        let mut entries: Vec<(u8, u64)> = Vec::new();

        for &byte in data {
            match slots[byte as usize] {
                Some(i) => entries[i].1 += 1,
                None => {
                    slots[byte as usize] = Some(entries.len());
                    entries.push((byte, 1));
                }
            }
        }

        if let &[(only, freq)] = entries.as_slice() {
            let placeholder = if only == PLACEHOLDER_SYMBOL {
                PLACEHOLDER_FALLBACK
            } else {
                PLACEHOLDER_SYMBOL
            };
            warn!(
                symbol = only,
                count = freq,
                placeholder,
                "single distinct symbol, injecting placeholder leaf"
            );
            entries.push((placeholder, 0));
        }

        SymbolCounts { entries }
    }

    pub fn entries(&self) -> &[(u8, u64)] {
        &self.entries
    }

    /// Number of distinct symbols, placeholder included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all frequencies, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, f)| f).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_first_occurrence_order() {
        let counts = SymbolCounts::count(b"abracadabra");
        assert_eq!(
            counts.entries(),
            &[(b'a', 5), (b'b', 2), (b'r', 2), (b'c', 1), (b'd', 1)]
        );
        assert_eq!(counts.total(), 11);
    }

    #[test]
    fn single_symbol_gets_placeholder() {
        let counts = SymbolCounts::count(b"\n\n\n");
        assert_eq!(counts.entries(), &[(b'\n', 3), (PLACEHOLDER_SYMBOL, 0)]);
    }

    #[test]
    fn placeholder_never_collides() {
        let counts = SymbolCounts::count(b"aaaa");
        assert_eq!(counts.entries(), &[(b'a', 4), (b'b', 0)]);
    }

    #[test]
    fn empty_input_has_no_entries() {
        let counts = SymbolCounts::count(&[]);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn nul_bytes_are_counted() {
        let counts = SymbolCounts::count(&[0, 0, 1]);
        assert_eq!(counts.entries(), &[(0, 2), (1, 1)]);
    }
}
