//! Note sequence assembly
//!
//! Turns decoded notes into the events the track builder consumes.

use crate::models::{Emission, Note, NoteEvent, Ticks};

/// Fold rests into the lead-in silence of the next sounding note
///
/// Rests after the last sounding note have nothing to attach to and are
/// dropped.
pub fn fold_rests(notes: &[Note]) -> Vec<NoteEvent> {
    let mut events = Vec::new();
    let mut leading_silence = Ticks::from_integer(0);

    for note in notes {
        if note.is_rest {
            leading_silence += note.duration;
        } else {
            events.push(NoteEvent {
                pitch: note.pitch,
                duration: note.duration,
                leading_silence,
            });
            leading_silence = Ticks::from_integer(0);
        }
    }

    events
}

/// One event per note, all with `fixed_duration` and no silence
pub fn fixed_length(notes: &[Note], fixed_duration: u64) -> Vec<NoteEvent> {
    notes
        .iter()
        .map(|note| NoteEvent {
            pitch: note.pitch,
            duration: Ticks::from_integer(fixed_duration),
            leading_silence: Ticks::from_integer(0),
        })
        .collect()
}

/// Build events according to the profile's emission mode
pub fn assemble(notes: &[Note], emission: Emission) -> Vec<NoteEvent> {
    match emission {
        Emission::Folded => fold_rests(notes),
        Emission::Legacy { fixed_duration } => fixed_length(notes, fixed_duration),
    }
}
