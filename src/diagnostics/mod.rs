//! Per-note trace lines
//!
//! One human-readable line per decoded note, in chunk order, written
//! before rests are folded away. Tracing is observation only; the
//! converter never reads anything back from here.

use serde::{Deserialize, Serialize};

use crate::models::{ticks_to_f64, Note};

/// A single traced note
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteTrace {
    /// Chunk index the note was decoded from
    pub index: usize,
    pub is_rest: bool,
    pub duration: f64,
    pub pitch: u8,
}

impl NoteTrace {
    pub fn new(index: usize, note: &Note) -> Self {
        Self {
            index,
            is_rest: note.is_rest,
            duration: ticks_to_f64(&note.duration),
            pitch: note.pitch,
        }
    }

    /// `r: <isRest>, d: <duration>, p: <pitch>`
    pub fn line(&self) -> String {
        format!("r: {}, d: {}, p: {}", self.is_rest, self.duration, self.pitch)
    }
}

/// Trace lines for `notes`
pub fn describe_notes(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| NoteTrace::new(i, note).line())
        .collect()
}

/// Log one debug line per note
pub fn trace_notes(notes: &[Note]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for line in describe_notes(notes) {
        log::debug!("{}", line);
    }
}
