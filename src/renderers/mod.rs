//! Renderers module for the transcoder
//!
//! This module contains export logic for turning note events into
//! downloadable output formats.

pub mod midi;

// Re-export commonly used functions
pub use midi::{bytes_to_midi, events_to_midi, text_to_midi, MidiOptions};
