//! Container framing: magic marker, bit length, then the packed body.
//!
//! ```text
//! +---------+----------------------+-------------------------------+
//! | ".8\nz" | total bits (u32, LE) | header bits | payload bits    |
//! +---------+----------------------+-------------------------------+
//! ```
//!
//! The total covers header and payload together. Bits past the total in
//! the final byte are padding.

use crate::error::{Error, Result};

pub const MAGIC: [u8; 4] = *b".8\nz";

/// Bytes before the packed body.
pub const PREAMBLE_LEN: usize = MAGIC.len() + 4;

/// True if `data` starts with the magic marker.
///
/// Raw data that happens to begin with the same four bytes is
/// indistinguishable from a compressed stream.
pub fn is_encoded(data: &[u8]) -> bool {
    data.starts_with(&MAGIC)
}

/// Bytes needed to hold `bits` bits.
pub fn body_len(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub total_bits: u32,
}

impl ContainerHeader {
    pub fn new(total_bits: u64) -> Result<Self> {
        let total_bits =
            u32::try_from(total_bits).map_err(|_| Error::InputTooLarge { total_bits })?;
        Ok(ContainerHeader { total_bits })
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.total_bits.to_le_bytes());
    }

    /// Splits a stream into its header and packed body.
    pub fn parse(data: &[u8]) -> Result<(Self, &[u8])> {
        if !is_encoded(data) || data.len() < PREAMBLE_LEN {
            return Err(Error::NotEncoded);
        }
        let mut length_bytes = [0u8; 4];
        length_bytes.copy_from_slice(&data[MAGIC.len()..PREAMBLE_LEN]);
        let header = ContainerHeader {
            total_bits: u32::from_le_bytes(length_bytes),
        };
        Ok((header, &data[PREAMBLE_LEN..]))
    }

    pub fn total_bits(&self) -> u64 {
        u64::from(self.total_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_layout() {
        let mut out = Vec::new();
        ContainerHeader::new(72).unwrap().write(&mut out);
        assert_eq!(out, b".8\nz\x48\x00\x00\x00");
    }

    #[test]
    fn parse_splits_body() {
        let data = b".8\nz\x09\x01\x00\x00body";
        let (header, body) = ContainerHeader::parse(data).unwrap();
        assert_eq!(header.total_bits(), 265);
        assert_eq!(body, b"body");
    }

    #[test]
    fn detection() {
        assert!(is_encoded(b".8\nz"));
        assert!(is_encoded(b".8\nzanything"));
        assert!(!is_encoded(b".8\n"));
        assert!(!is_encoded(b"plain text"));
        assert!(!is_encoded(&[]));
    }

    #[test]
    fn short_or_foreign_streams_are_rejected() {
        assert!(matches!(
            ContainerHeader::parse(b".8\nz\x01"),
            Err(Error::NotEncoded)
        ));
        assert!(matches!(
            ContainerHeader::parse(b"PK\x03\x04\x00\x00\x00\x00"),
            Err(Error::NotEncoded)
        ));
    }

    #[test]
    fn oversized_length_is_rejected() {
        let err = ContainerHeader::new(u64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, Error::InputTooLarge { .. }));
    }

    #[test]
    fn body_len_rounds_up() {
        assert_eq!(body_len(0), 0);
        assert_eq!(body_len(1), 1);
        assert_eq!(body_len(8), 1);
        assert_eq!(body_len(72), 9);
        assert_eq!(body_len(73), 10);
    }
}
