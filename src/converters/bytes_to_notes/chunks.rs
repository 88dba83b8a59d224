//! Chunk extraction
//!
//! Walks a [`Bitstream`] in non-overlapping fixed-width windows. Each window
//! splits into a leading control field and a trailing data field.

use super::bitstream::Bitstream;

/// One fixed-width window of the bitstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the chunk sequence
    pub index: usize,
    /// All bits of the window as one integer
    pub raw: u32,
    /// Leading `control_width` bits
    pub control: u32,
    /// Remaining bits
    pub data: u32,
}

impl Chunk {
    /// Set bits across control and data together
    pub fn popcount(&self) -> u32 {
        self.raw.count_ones()
    }
}

/// Ordered, restartable iterator over a bitstream's chunks
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    stream: &'a Bitstream,
    chunk_width: u32,
    control_width: u32,
    next: usize,
    count: usize,
}

impl<'a> Chunks<'a> {
    /// Iterate `stream`, which must already be a whole number of chunks
    pub fn new(stream: &'a Bitstream, chunk_width: u32, control_width: u32) -> Self {
        debug_assert!(control_width < chunk_width);
        debug_assert_eq!(stream.len() % chunk_width as usize, 0);
        Self {
            stream,
            chunk_width,
            control_width,
            next: 0,
            count: stream.len() / chunk_width as usize,
        }
    }

    fn read(&self, index: usize) -> Chunk {
        let offset = index * self.chunk_width as usize;
        let data_width = self.chunk_width - self.control_width;
        Chunk {
            index,
            raw: self.stream.read_bits(offset, self.chunk_width),
            control: self.stream.read_bits(offset, self.control_width),
            data: self
                .stream
                .read_bits(offset + self.control_width as usize, data_width),
        }
    }
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.next >= self.count {
            return None;
        }
        let chunk = self.read(self.next);
        self.next += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks<'_> {}
