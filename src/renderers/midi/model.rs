/// Lean score representation for SMF export
///
/// Just what the writer needs: one tempo map and note tracks with
/// absolute tick positions.

#[derive(Debug, Clone)]
pub struct Score {
    pub tpq: u16,               // Ticks per quarter note
    pub tempos: Vec<Tempo>,     // sorted by tick
    pub parts: Vec<Part>,       // One note track each
}

#[derive(Debug, Clone)]
pub struct Tempo {
    pub tick: u64,
    pub bpm: f64,
}

#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub channel: u8,          // MIDI channel 0-15 (used for the program change)
    pub program: Option<u8>,  // MIDI program 0-127 (GM instrument)
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub start_tick: u64,
    pub dur_tick: u64,
    pub channel: u8,
    pub pitch: u8,      // MIDI note number 0-127
    pub vel: u8,        // Velocity 1-127
}

impl Score {
    /// Total note count across all parts
    pub fn note_count(&self) -> usize {
        self.parts.iter().map(|p| p.notes.len()).sum()
    }

    /// Tick at which the last note ends
    pub fn end_tick(&self) -> u64 {
        self.parts
            .iter()
            .flat_map(|p| p.notes.iter())
            .map(|n| n.start_tick + n.dur_tick)
            .max()
            .unwrap_or(0)
    }
}
