//! Error types for the codec.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A buffer or table could not be allocated.
    #[error("allocation failed: could not allocate {requested_bytes} bytes")]
    AllocationFailure { requested_bytes: usize },

    /// The serialized tree shape is inconsistent with the declared stream.
    #[error("malformed header at bit {bit}: {reason}")]
    MalformedHeader { bit: u64, reason: &'static str },

    /// The payload ran out of bits in the middle of a code.
    #[error("truncated payload at bit {bit}")]
    TruncatedPayload { bit: u64 },

    #[error("input is empty")]
    EmptyInput,

    /// An input byte has no code entry. Indicates a broken table.
    #[error("symbol 0x{0:02x} has no entry in the code table")]
    UnknownSymbolInTable(u8),

    #[error("input is not a compressed stream")]
    NotEncoded,

    /// The stream would not fit the 32-bit length field.
    #[error("input too large: {total_bits} bits exceeds the 32-bit length field")]
    InputTooLarge { total_bits: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(bit: u64, reason: &'static str) -> Self {
        Error::MalformedHeader { bit, reason }
    }
}
