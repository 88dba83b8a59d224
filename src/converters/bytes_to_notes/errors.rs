//! Error types for byte-to-note transcoding
//!
//! Every variant aborts the whole conversion; nothing is emitted for an
//! input that fails.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// Padded bitstream is not a whole number of chunks
    #[error("bitstream length {bits} is not a multiple of chunk width {chunk_width}")]
    MalformedLength { bits: usize, chunk_width: u32 },

    /// Pitch bounds cannot wrap every input into `[low, high)`
    #[error("invalid pitch range [{low}, {high})")]
    InvalidRange { low: u32, high: u32 },

    /// Chunk geometry or duration settings are unusable
    #[error("invalid chunk layout: {0}")]
    InvalidLayout(String),

    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    #[error("midi write error: {0}")]
    Midi(String),
}

pub type Result<T> = std::result::Result<T, TranscodeError>;
