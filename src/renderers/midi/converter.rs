//! Note events → MIDI Score
//!
//! [`TrackBuilder`] is the track-building surface the transcoder talks to:
//! every note arrives through `add_note(channel, pitch, duration,
//! leading_silence)` and is placed right after the previous one, offset by
//! its lead-in silence. Positions are tracked exactly and rounded to whole
//! ticks only when a note is placed.

use super::defaults::{
    CHANNEL_COUNT, DEFAULT_CHANNEL, DEFAULT_PROGRAM, DEFAULT_TEMPO_BPM, DEFAULT_TRACK_NAME,
    DEFAULT_VELOCITY,
};
use super::model::{Note, Part, Score, Tempo};
use crate::converters::bytes_to_notes::{Result, TranscodeError};
use crate::models::{NoteEvent, Ticks};

/// Settings for the rendered track
#[derive(Debug, Clone, PartialEq)]
pub struct MidiOptions {
    /// Channel every note is written on
    pub channel: u8,
    pub tempo_bpm: f64,
    pub velocity: u8,
    pub program: Option<u8>,
    pub track_name: String,
}

impl Default for MidiOptions {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL,
            tempo_bpm: DEFAULT_TEMPO_BPM,
            velocity: DEFAULT_VELOCITY,
            program: Some(DEFAULT_PROGRAM),
            track_name: DEFAULT_TRACK_NAME.to_string(),
        }
    }
}

/// Sequential note track builder
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    part: Part,
    velocity: u8,
    cursor: Ticks,
}

impl TrackBuilder {
    pub fn new(options: &MidiOptions) -> Result<Self> {
        check_channel(options.channel)?;
        if options.velocity == 0 || options.velocity > 127 {
            return Err(TranscodeError::Midi(format!(
                "velocity {} outside 1..=127",
                options.velocity
            )));
        }
        if let Some(program) = options.program {
            if program > 127 {
                return Err(TranscodeError::Midi(format!("program {} outside 0..=127", program)));
            }
        }

        Ok(Self {
            part: Part {
                name: options.track_name.clone(),
                channel: options.channel,
                program: options.program,
                notes: Vec::new(),
            },
            velocity: options.velocity,
            cursor: Ticks::from_integer(0),
        })
    }

    /// Place a note `leading_silence` ticks after the end of the previous one
    ///
    /// `channel` must be the channel the builder was created for, so that
    /// every note shares the track's program change.
    pub fn add_note(
        &mut self,
        channel: u8,
        pitch: u8,
        duration: Ticks,
        leading_silence: Ticks,
    ) -> Result<()> {
        check_channel(channel)?;
        if channel != self.part.channel {
            return Err(TranscodeError::Midi(format!(
                "note on channel {} in a track built for channel {}",
                channel, self.part.channel
            )));
        }
        if pitch > 127 {
            return Err(TranscodeError::Midi(format!("pitch {} outside 0..=127", pitch)));
        }

        let start = self.cursor + leading_silence;
        let end = start + duration;
        let start_tick = start.round().to_integer();
        let end_tick = end.round().to_integer();

        self.part.notes.push(Note {
            start_tick,
            dur_tick: end_tick - start_tick,
            channel,
            pitch,
            vel: self.velocity,
        });
        self.cursor = end;
        Ok(())
    }

    /// Exact position where the next note would start without silence
    pub fn cursor(&self) -> Ticks {
        self.cursor
    }

    pub fn finish(self) -> Part {
        self.part
    }
}

fn check_channel(channel: u8) -> Result<()> {
    if channel >= CHANNEL_COUNT {
        return Err(TranscodeError::Midi(format!(
            "channel {} outside 0..={}",
            channel,
            CHANNEL_COUNT - 1
        )));
    }
    Ok(())
}

/// Convert assembled note events to a one-part MIDI Score
pub fn events_to_score(events: &[NoteEvent], tpq: u16, options: &MidiOptions) -> Result<Score> {
    let mut track = TrackBuilder::new(options)?;
    for event in events {
        track.add_note(options.channel, event.pitch, event.duration, event.leading_silence)?;
    }

    Ok(Score {
        tpq,
        tempos: vec![Tempo {
            tick: 0,
            bpm: options.tempo_bpm,
        }],
        parts: vec![track.finish()],
    })
}
