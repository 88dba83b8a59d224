//! Note events → Standard MIDI File
//!
//! Takes the events assembled by the transcoder, places them on a single
//! note track and serializes the result as SMF Format 1 with `midly`.
//!
//! # Usage
//! ```rust,ignore
//! use midipocalypse::models::Profile;
//! use midipocalypse::renderers::midi::{text_to_midi, MidiOptions};
//!
//! let bytes = text_to_midi("Hello", &Profile::reference(), &MidiOptions::default())?;
//! ```

pub mod converter;
pub mod defaults;
mod model;
mod write;

pub use converter::{events_to_score, MidiOptions, TrackBuilder};
pub use defaults::{DEFAULT_CHANNEL, DEFAULT_PROGRAM, DEFAULT_TEMPO_BPM, DEFAULT_VELOCITY};
pub use model::*;
pub use write::write_smf;

use crate::converters::bytes_to_notes::{transcribe, Result};
use crate::models::{NoteEvent, Profile};
use crate::utils::text_to_bytes;

/// Serialize note events as SMF bytes
pub fn events_to_midi(events: &[NoteEvent], tpq: u16, options: &MidiOptions) -> Result<Vec<u8>> {
    let score = events_to_score(events, tpq, options)?;
    let mut out = Vec::new();
    write_smf(&score, &mut out)?;
    log::info!(
        "wrote {} notes ending at tick {} into {} bytes of MIDI",
        score.note_count(),
        score.end_tick(),
        out.len()
    );
    Ok(out)
}

/// Transcribe raw bytes and render them as SMF bytes
pub fn bytes_to_midi(input: &[u8], profile: &Profile, options: &MidiOptions) -> Result<Vec<u8>> {
    let transcription = transcribe(input, profile)?;
    events_to_midi(&transcription.events, profile.ticks_per_quarter, options)
}

/// Transcribe text (as its UTF-8 bytes) and render it as SMF bytes
pub fn text_to_midi(text: &str, profile: &Profile, options: &MidiOptions) -> Result<Vec<u8>> {
    bytes_to_midi(&text_to_bytes(text), profile, options)
}
