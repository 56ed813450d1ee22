//! Bit-granular cursors over byte buffers, MSB-first within each byte.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::Result;

/// Appends bits to a byte buffer and tracks how many were written.
pub struct BitSink<'a> {
    writer: BitWriter<&'a mut Vec<u8>, BigEndian>,
    cursor: u64,
}

impl<'a> BitSink<'a> {
    pub fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            writer: BitWriter::endian(out, BigEndian),
            cursor: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.writer.write_bit(bit)?;
        self.cursor += 1;
        Ok(())
    }

    pub fn write_bits(&mut self, bits: &[bool]) -> Result<()> {
        for &bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Writes all eight bits of `byte`, most significant first.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        for i in (0..8).rev() {
            self.write_bit((byte >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Zero-pads the last partial byte and returns the bit count.
    pub fn finish(mut self) -> Result<u64> {
        self.writer.byte_align()?;
        Ok(self.cursor)
    }
}

/// Reads bits from a byte buffer up to a declared bit length.
pub struct BitSource<'a> {
    reader: BitReader<Cursor<&'a [u8]>, BigEndian>,
    cursor: u64,
    limit: u64,
}

impl<'a> BitSource<'a> {
    /// Reads at most `limit` bits from `data`; fewer if `data` is shorter.
    pub fn new(data: &'a [u8], limit: u64) -> Self {
        Self {
            reader: BitReader::endian(Cursor::new(data), BigEndian),
            cursor: 0,
            limit,
        }
    }

    /// Next bit, or `None` once the limit or the end of data is reached.
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.cursor >= self.limit {
            return None;
        }
        let bit = self.reader.read_bit().ok()?;
        self.cursor += 1;
        Some(bit)
    }

    /// Next eight bits as a byte, most significant first.
    pub fn read_byte(&mut self) -> Option<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | u8::from(self.read_bit()?);
        }
        Some(byte)
    }

    /// Bits consumed so far.
    pub fn position(&self) -> u64 {
        self.cursor
    }
}
