//! Default values for MIDI export
//!
//! Provides defaults for tempo, velocity, channel and instrument.

/// Default tempo in beats per minute
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Default MIDI velocity (1-127, where 64 is "normal")
pub const DEFAULT_VELOCITY: u8 = 64;

/// Default MIDI program (0 = Acoustic Grand Piano in General MIDI)
pub const DEFAULT_PROGRAM: u8 = 0;

/// Default MIDI channel for the whole sequence
pub const DEFAULT_CHANNEL: u8 = 0;

/// Name written into the note track
pub const DEFAULT_TRACK_NAME: &str = "midipocalypse";

/// MIDI has 16 channels (0-15)
pub const CHANNEL_COUNT: u8 = 16;

/// Largest delta time a track event can carry (28-bit VLQ)
pub const MAX_DELTA_TICKS: u64 = (1 << 28) - 1;

/// Largest tempo value a Set Tempo meta event can carry (24 bits)
pub const MAX_TEMPO_MICROS: u32 = 0xFF_FFFF;
