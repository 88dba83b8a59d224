//! Text-to-MIDI WASM API
//!
//! This module provides the JavaScript-facing API for the transcoder.
//! It includes shared utilities for serialization, argument resolution and
//! logging, and the export functions the form calls.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging macros, serde bridges, argument resolution
//! - `types`: JSON views of notes and events
//! - `export`: MIDI / JSON / trace exports and profile lookup

pub mod helpers;
pub mod types;
pub mod export;

// Re-export all public functions to keep the API flat
pub use export::{
    text_to_midi,
    text_to_midi_with_profile,
    text_to_notes_json,
    describe_text,
    profile_names,
    get_profile,
};
