//! Note descriptors produced by the transcoder

use num_rational::Ratio;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact tick count; the x1.5 multiplier can leave half ticks
pub type Ticks = Ratio<u64>;

/// Convert ticks to `f64` for display and JSON
pub fn ticks_to_f64(ticks: &Ticks) -> f64 {
    *ticks.numer() as f64 / *ticks.denom() as f64
}

/// One decoded chunk
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// MIDI key, inside the profile's pitch bounds
    pub pitch: u8,
    pub duration: Ticks,
    pub is_rest: bool,
}

impl Note {
    pub fn new(pitch: u8, duration: Ticks, is_rest: bool) -> Self {
        Self {
            pitch,
            duration,
            is_rest,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r: {}, d: {}, p: {}",
            self.is_rest,
            ticks_to_f64(&self.duration),
            self.pitch
        )
    }
}

/// A sounding note as handed to the track builder
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteEvent {
    pub pitch: u8,
    pub duration: Ticks,
    /// Silence before the note starts (sum of the rests folded into it)
    pub leading_silence: Ticks,
}
