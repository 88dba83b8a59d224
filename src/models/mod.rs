//! Models module for the text-to-MIDI transcoder
//!
//! This module contains the configuration and note types shared by
//! the converter, the MIDI renderer and the WASM API.

pub mod note;
pub mod profile;

// Re-export commonly used types
pub use note::*;
pub use profile::*;
