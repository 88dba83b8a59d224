//! Format converters
//!
//! This module contains the byte-to-note transcoder.

pub mod bytes_to_notes;

// Re-export for convenience
pub use bytes_to_notes::{
    bytes_to_events,
    decode_notes,
    transcribe,
    Result,
    TranscodeError,
    Transcription,
};
