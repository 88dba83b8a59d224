//! Bytes → notes transcoder
//!
//! Input bytes are repacked into fixed-width chunks; each chunk becomes
//! exactly one [`Note`]:
//! - the control field picks the duration (`duration`)
//! - the data field, wrapped into the pitch bounds, is the key (`sanitize`)
//! - the popcount of the whole chunk decides whether it is a rest (`rest`)
//!
//! Notes are then assembled into [`NoteEvent`]s for the MIDI track builder
//! (`assemble`). The profile is validated before any bit is read, so a
//! failing conversion never produces partial output.

pub mod assemble;
pub mod bitstream;
pub mod chunks;
pub mod duration;
mod errors;
pub mod rest;
pub mod sanitize;

pub use assemble::{assemble, fixed_length, fold_rests};
pub use bitstream::Bitstream;
pub use chunks::{Chunk, Chunks};
pub use errors::{Result, TranscodeError};
pub use sanitize::sanitize;

use crate::diagnostics::trace_notes;
use crate::models::{Note, NoteEvent, Profile};

/// Notes and the events assembled from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pub notes: Vec<Note>,
    pub events: Vec<NoteEvent>,
}

/// Decode one note per chunk of `input`
pub fn decode_notes(input: &[u8], profile: &Profile) -> Result<Vec<Note>> {
    profile.validate()?;

    let stream = Bitstream::pack(input, profile.chunk_width)?;
    Chunks::new(&stream, profile.chunk_width, profile.control_width)
        .map(|chunk| decode_chunk(&chunk, profile))
        .collect()
}

fn decode_chunk(chunk: &Chunk, profile: &Profile) -> Result<Note> {
    let bounds = &profile.pitch_bounds;
    let pitch = u8::try_from(sanitize::wrap(chunk.data, bounds)).map_err(|_| {
        TranscodeError::InvalidRange {
            low: bounds.low,
            high: bounds.high,
        }
    })?;
    let duration = duration::resolve(chunk.control, profile.smallest_duration, profile.dot_rule);
    let is_rest = rest::is_rest(chunk, profile.rest_rule);

    Ok(Note::new(pitch, duration, is_rest))
}

/// Run the whole pipeline: decode, trace, assemble
pub fn transcribe(input: &[u8], profile: &Profile) -> Result<Transcription> {
    let notes = decode_notes(input, profile)?;
    trace_notes(&notes);

    let events = assemble(&notes, profile.emission);
    log::info!(
        "transcribed {} bytes into {} notes, {} events (profile '{}')",
        input.len(),
        notes.len(),
        events.len(),
        profile.name
    );

    Ok(Transcription { notes, events })
}

/// Events only; see [`transcribe`]
pub fn bytes_to_events(input: &[u8], profile: &Profile) -> Result<Vec<NoteEvent>> {
    transcribe(input, profile).map(|t| t.events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PitchBounds, Ticks};

    #[test]
    fn test_single_byte_scenario() {
        let profile = Profile::reference();
        let result = transcribe(&[72], &profile).unwrap();

        assert_eq!(
            result.notes,
            vec![Note::new(64, Ticks::from_integer((8 << 2) * 3 / 2), true)]
        );
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let result = transcribe(&[], &Profile::reference()).unwrap();
        assert!(result.notes.is_empty());
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_invalid_profile_aborts_before_decoding() {
        let mut profile = Profile::reference();
        profile.pitch_bounds = PitchBounds::symmetric(108, 21);
        assert_eq!(
            decode_notes(b"anything", &profile),
            Err(TranscodeError::InvalidRange { low: 108, high: 21 })
        );
    }

    #[test]
    fn test_note_count_equals_chunk_count() {
        let input = b"The quick brown fox";
        let profile = Profile::reference();
        let notes = decode_notes(input, &profile).unwrap();
        let bits = Bitstream::pack(input, 11).unwrap().len();
        assert_eq!(notes.len(), bits / 11);
    }
}
