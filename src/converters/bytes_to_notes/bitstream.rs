//! Bit packing
//!
//! Input bytes are laid end to end MSB-first and the result is zero-padded
//! on the right to a whole number of chunks. Bits are kept packed in bytes
//! and read back as fixed-width fields.

use super::{Result, TranscodeError};

/// Width of one input symbol in bits
pub const BYTE_WIDTH: usize = 8;

/// Immutable, zero-padded bit sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitstream {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl Bitstream {
    /// Pack `input` and pad it to a multiple of `chunk_width` bits
    pub fn pack(input: &[u8], chunk_width: u32) -> Result<Self> {
        let width = chunk_width as usize;
        if width == 0 {
            return Err(TranscodeError::InvalidLayout(
                "chunk width must be positive".to_string(),
            ));
        }

        let bit_count = input.len() * BYTE_WIDTH;
        let bit_len = bit_count.div_ceil(width) * width;

        // Padding bits live past the end of the input; the backing store
        // just has to cover them.
        let mut bytes = input.to_vec();
        bytes.resize(bit_len.div_ceil(BYTE_WIDTH), 0);

        let stream = Self { bytes, bit_len };
        stream.check_length(chunk_width)?;
        Ok(stream)
    }

    /// Fail unless the stream splits evenly into `chunk_width`-bit chunks
    pub fn check_length(&self, chunk_width: u32) -> Result<()> {
        if chunk_width == 0 || self.bit_len % chunk_width as usize != 0 {
            return Err(TranscodeError::MalformedLength {
                bits: self.bit_len,
                chunk_width,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Bit at `index`, counting from the MSB of the first byte
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.bit_len);
        let byte = self.bytes[index / BYTE_WIDTH];
        (byte >> (BYTE_WIDTH - 1 - index % BYTE_WIDTH)) & 1 == 1
    }

    /// Read `width` bits starting at `offset` as an unsigned integer
    pub fn read_bits(&self, offset: usize, width: u32) -> u32 {
        debug_assert!(width <= 32);
        (offset..offset + width as usize).fold(0u32, |acc, i| {
            // u64 detour keeps a full 32-bit read from overflowing the shift
            (((acc as u64) << 1) | self.bit(i) as u64) as u32
        })
    }

    /// Render as a string of `0`/`1`
    pub fn to_bit_string(&self) -> String {
        (0..self.bit_len)
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect()
    }
}
