//! Whole-file driver: read the input, pick a direction, write the output.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::container::is_encoded;
use crate::decoder::{decode_detailed, Decoding};
use crate::encoder::{encode_detailed, Encoding};
use crate::error::{Error, Result};
use crate::tree::HuffmanTree;

/// Default output path when none is given.
pub const DEFAULT_OUTPUT: &str = "output_file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// Streams carrying the magic marker are decoded, anything else encoded.
    pub fn detect(data: &[u8]) -> Self {
        if is_encoded(data) {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Encoded(Encoding),
    Decoded(Decoding),
}

impl Outcome {
    pub fn mode(&self) -> Mode {
        match self {
            Outcome::Encoded(_) => Mode::Encode,
            Outcome::Decoded(_) => Mode::Decode,
        }
    }

    /// Bytes written to the output.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Outcome::Encoded(encoding) => &encoding.bytes,
            Outcome::Decoded(decoding) => &decoding.bytes,
        }
    }

    pub fn tree(&self) -> &HuffmanTree {
        match self {
            Outcome::Encoded(encoding) => &encoding.tree,
            Outcome::Decoded(decoding) => &decoding.tree,
        }
    }

    pub fn input_bytes(&self) -> usize {
        match self {
            Outcome::Encoded(encoding) => encoding.stats.input_bytes,
            Outcome::Decoded(decoding) => decoding.input_bytes,
        }
    }

    /// Header plus payload bits of the compressed side.
    pub fn total_bits(&self) -> u64 {
        match self {
            Outcome::Encoded(encoding) => encoding.stats.total_bits,
            Outcome::Decoded(decoding) => decoding.total_bits,
        }
    }
}

/// Encodes or decodes `data`. `None` picks the direction from the magic marker.
pub fn process(data: &[u8], mode: Option<Mode>) -> Result<Outcome> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    match mode.unwrap_or_else(|| Mode::detect(data)) {
        Mode::Encode => encode_detailed(data).map(Outcome::Encoded),
        Mode::Decode => decode_detailed(data).map(Outcome::Decoded),
    }
}

/// Runs `process` over a file. Nothing is written if any step fails.
pub fn process_file(input: &Path, output: &Path, mode: Option<Mode>) -> Result<Outcome> {
    let data = fs::read(input)?;
    let outcome = process(&data, mode)?;
    fs::write(output, outcome.bytes())?;
    info!(
        input = %input.display(),
        output = %output.display(),
        mode = ?outcome.mode(),
        "wrote output"
    );
    Ok(outcome)
}
