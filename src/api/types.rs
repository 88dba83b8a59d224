//! Shared types for the WASM API
//!
//! JSON-friendly views of the transcoder's output. Durations are plain
//! numbers here instead of exact ratios.

use serde::{Deserialize, Serialize};

use crate::converters::Transcription;
use crate::models::{ticks_to_f64, Note, NoteEvent};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub pitch: u8,
    pub duration: f64,
    pub is_rest: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteEventView {
    pub pitch: u8,
    pub duration: f64,
    pub leading_silence: f64,
}

/// Result of a text-to-notes conversion
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionView {
    pub profile: String,
    pub notes: Vec<NoteView>,
    pub events: Vec<NoteEventView>,
}

impl From<&Note> for NoteView {
    fn from(note: &Note) -> Self {
        Self {
            pitch: note.pitch,
            duration: ticks_to_f64(&note.duration),
            is_rest: note.is_rest,
        }
    }
}

impl From<&NoteEvent> for NoteEventView {
    fn from(event: &NoteEvent) -> Self {
        Self {
            pitch: event.pitch,
            duration: ticks_to_f64(&event.duration),
            leading_silence: ticks_to_f64(&event.leading_silence),
        }
    }
}

impl TranscriptionView {
    pub fn new(profile: &str, transcription: &Transcription) -> Self {
        Self {
            profile: profile.to_string(),
            notes: transcription.notes.iter().map(NoteView::from).collect(),
            events: transcription.events.iter().map(NoteEventView::from).collect(),
        }
    }
}
