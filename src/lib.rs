//! Text-to-MIDI WASM Module
//!
//! Turns text into a Standard MIDI File: the text's bytes are repacked into
//! 11-bit chunks, and each chunk becomes a note whose duration, pitch and
//! rest flag come from its bits.

pub mod api;
pub mod converters;
pub mod diagnostics;
pub mod models;
pub mod renderers;
pub mod utils;

// Re-export commonly used types
pub use converters::{transcribe, TranscodeError, Transcription};
pub use models::*;
pub use renderers::midi::MidiOptions;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            wasm_warn!("Logger was already initialized");
        }
    }

    log::info!("Text-to-MIDI WASM module initialized");
}
