//! Transcoding profiles
//!
//! A [`Profile`] bundles every constant the bytes-to-notes pipeline reads:
//! chunk geometry, pitch bounds and their wrap offsets, the base duration
//! unit, the rest and dot rules, and how notes are handed to the MIDI track
//! builder. Several variants of the scheme exist side by side as named
//! profiles; [`Profile::reference`] is the default.

use serde::{Deserialize, Serialize};

use crate::converters::bytes_to_notes::{Result, TranscodeError};

/// Widest chunk the bit reader supports (fields are read into a `u32`)
pub const MAX_CHUNK_WIDTH: u32 = 32;

/// Exclusive upper limit for pitch bounds (MIDI keys are 0-127)
pub const MIDI_KEY_LIMIT: u32 = 128;

/// Bits available for the longest single duration, in ticks
pub const MAX_DURATION_BITS: u32 = 32;

/// Names accepted by [`Profile::named`]
pub const PROFILE_NAMES: [&str; 3] = ["reference", "legacy", "conventional"];

/// How a chunk is classified as a rest
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RestRule {
    /// Rest when the chunk's popcount itself has exactly one set bit
    NestedPopcount,
    /// Rest when the chunk has an odd number of set bits
    OddParity,
    /// No chunk is ever a rest
    Never,
}

/// Which state of the control field's low bit selects the x1.5 multiplier
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DotRule {
    /// x1.5 when the dot bit is clear
    Inverted,
    /// x1.5 when the dot bit is set
    Conventional,
}

/// How notes reach the track builder
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum Emission {
    /// Sounding notes only, with preceding rests folded into lead-in silence
    Folded,
    /// Every note, back to back, each with the same fixed duration
    ///
    /// Decoding still resolves a per-chunk duration from the control field,
    /// and that decoded value is what trace lines report. Only the emitted
    /// events carry `fixed_duration`.
    #[serde(rename_all = "camelCase")]
    Legacy { fixed_duration: u64 },
}

/// Pitch interval and the offsets used to wrap values into it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PitchBounds {
    /// Inclusive lower bound
    pub low: u32,
    /// Exclusive upper bound
    pub high: u32,
    /// Added to values below `low`
    pub wrap_up: u32,
    /// Subtracted (repeatedly) from values at or above `high`
    pub wrap_down: u32,
}

impl PitchBounds {
    /// Bounds whose wrap offsets both equal the interval width
    pub fn symmetric(low: u32, high: u32) -> Self {
        let span = high.saturating_sub(low);
        Self {
            low,
            high,
            wrap_up: span,
            wrap_down: span,
        }
    }

    /// Check that every non-negative input lands in `[low, high)`
    pub fn validate(&self) -> Result<()> {
        let invalid = || TranscodeError::InvalidRange {
            low: self.low,
            high: self.high,
        };

        if self.high <= self.low || self.high > MIDI_KEY_LIMIT {
            return Err(invalid());
        }
        // Values below `low` take one upward wrap and must land inside
        if self.wrap_up < self.low || self.low.saturating_add(self.wrap_up) > self.high {
            return Err(invalid());
        }
        // Downward wraps must make progress and never go negative
        if self.wrap_down == 0 || self.wrap_down > self.high {
            return Err(invalid());
        }
        Ok(())
    }
}

/// Complete configuration for one conversion
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile name, informational only
    pub name: String,
    /// Bits per chunk
    pub chunk_width: u32,
    /// Leading bits of each chunk that form the control field
    pub control_width: u32,
    /// Pitch interval for the data field
    pub pitch_bounds: PitchBounds,
    /// Shortest duration, in ticks
    pub smallest_duration: u64,
    /// MIDI resolution the durations are expressed in
    pub ticks_per_quarter: u16,
    pub rest_rule: RestRule,
    pub dot_rule: DotRule,
    pub emission: Emission,
}

impl Default for Profile {
    fn default() -> Self {
        Self::reference()
    }
}

impl Profile {
    /// 11-bit chunks (4 control + 7 data), pitches in `[21, 108)`
    pub fn reference() -> Self {
        Self {
            name: "reference".to_string(),
            chunk_width: 11,
            control_width: 4,
            pitch_bounds: PitchBounds::symmetric(21, 108),
            smallest_duration: 8,
            ticks_per_quarter: 128,
            rest_rule: RestRule::NestedPopcount,
            dot_rule: DotRule::Inverted,
            emission: Emission::Folded,
        }
    }

    /// 7-bit chunks with no control field, one fixed-length note per chunk
    ///
    /// Pitches land in `[32, 127)`; values below 32 wrap up by 95 while
    /// values at or above 127 wrap down by 96.
    pub fn legacy() -> Self {
        Self {
            name: "legacy".to_string(),
            chunk_width: 7,
            control_width: 0,
            pitch_bounds: PitchBounds {
                low: 32,
                high: 127,
                wrap_up: 95,
                wrap_down: 96,
            },
            smallest_duration: 8,
            ticks_per_quarter: 128,
            rest_rule: RestRule::Never,
            dot_rule: DotRule::Inverted,
            emission: Emission::Legacy { fixed_duration: 64 },
        }
    }

    /// Reference geometry with ordinary parity rests and conventional dots
    pub fn conventional() -> Self {
        Self {
            name: "conventional".to_string(),
            rest_rule: RestRule::OddParity,
            dot_rule: DotRule::Conventional,
            ..Self::reference()
        }
    }

    /// Look up a built-in profile by name
    pub fn named(name: &str) -> Result<Self> {
        match name {
            "reference" => Ok(Self::reference()),
            "legacy" => Ok(Self::legacy()),
            "conventional" => Ok(Self::conventional()),
            other => Err(TranscodeError::UnknownProfile(other.to_string())),
        }
    }

    /// Width of the data field in bits
    pub fn data_width(&self) -> u32 {
        self.chunk_width.saturating_sub(self.control_width)
    }

    /// Reject any configuration the pipeline cannot run to completion
    pub fn validate(&self) -> Result<()> {
        if self.chunk_width == 0 || self.chunk_width > MAX_CHUNK_WIDTH {
            return Err(TranscodeError::InvalidLayout(format!(
                "chunk width {} outside 1..={}",
                self.chunk_width, MAX_CHUNK_WIDTH
            )));
        }
        if self.control_width >= self.chunk_width {
            return Err(TranscodeError::InvalidLayout(format!(
                "control width {} leaves no data bits in a {}-bit chunk",
                self.control_width, self.chunk_width
            )));
        }
        if self.smallest_duration == 0 {
            return Err(TranscodeError::InvalidLayout(
                "smallest duration must be positive".to_string(),
            ));
        }
        if self.ticks_per_quarter == 0 || self.ticks_per_quarter > 0x7FFF {
            return Err(TranscodeError::InvalidLayout(format!(
                "ticks per quarter {} outside 1..=32767",
                self.ticks_per_quarter
            )));
        }
        if let Emission::Legacy { fixed_duration: 0 } = self.emission {
            return Err(TranscodeError::InvalidLayout(
                "legacy fixed duration must be positive".to_string(),
            ));
        }

        // Longest duration (largest shift, then x1.5) must fit in 32 bits
        let max_control = (1u64 << self.control_width) - 1;
        let max_shift = (max_control >> 1) as u32;
        let needed_bits = 64 - self.smallest_duration.leading_zeros() + max_shift + 1;
        if needed_bits > MAX_DURATION_BITS {
            return Err(TranscodeError::InvalidLayout(format!(
                "smallest duration {} shifted by {} exceeds {} bits",
                self.smallest_duration, max_shift, MAX_DURATION_BITS
            )));
        }

        self.pitch_bounds.validate()
    }
}
