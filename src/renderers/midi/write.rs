use super::defaults::{MAX_DELTA_TICKS, MAX_TEMPO_MICROS};
use super::model::*;
use crate::converters::bytes_to_notes::{Result, TranscodeError};
use midly::num::u24;
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind};

/// Write Score to Standard MIDI File (SMF) Format 1
pub fn write_smf(score: &Score, out: &mut Vec<u8>) -> Result<()> {
    let mut tracks = Vec::new();

    // Track 0: Tempo map
    tracks.push(build_conductor_track(score)?);

    // Tracks 1+: One per part
    for part in &score.parts {
        tracks.push(build_part_track(part)?);
    }

    let header = Header {
        format: Format::Parallel,
        timing: Timing::Metrical(score.tpq.into()),
    };

    let smf = Smf { header, tracks };

    smf.write(out)
        .map_err(|e| TranscodeError::Midi(format!("Failed to write MIDI: {}", e)))?;

    Ok(())
}

fn build_conductor_track<'a>(score: &Score) -> Result<Track<'a>> {
    let mut events = Vec::new();

    for tempo in &score.tempos {
        events.push((
            tempo.tick,
            TrackEventKind::Meta(MetaMessage::Tempo(tempo_micros(tempo.bpm)?)),
        ));
    }

    finish_track(events)
}

/// Microseconds per quarter note for `bpm`, as the 24-bit value SMF stores
fn tempo_micros(bpm: f64) -> Result<u24> {
    let micros = (60_000_000.0 / bpm).round();
    if !bpm.is_finite() || !micros.is_finite() || micros < 1.0 || micros > MAX_TEMPO_MICROS as f64 {
        return Err(TranscodeError::Midi(format!(
            "tempo {} bpm outside the 1..={} microseconds per quarter range",
            bpm, MAX_TEMPO_MICROS
        )));
    }
    Ok(u24::new(micros as u32))
}

fn build_part_track(part: &Part) -> Result<Track<'_>> {
    let mut events = Vec::new();

    // Track name
    events.push((
        0,
        TrackEventKind::Meta(MetaMessage::TrackName(part.name.as_bytes())),
    ));

    // Program change (instrument)
    if let Some(program) = part.program {
        events.push((
            0,
            TrackEventKind::Midi {
                channel: part.channel.into(),
                message: MidiMessage::ProgramChange {
                    program: program.into(),
                },
            },
        ));
    }

    for note in &part.notes {
        events.push((
            note.start_tick,
            TrackEventKind::Midi {
                channel: note.channel.into(),
                message: MidiMessage::NoteOn {
                    key: note.pitch.into(),
                    vel: note.vel.into(),
                },
            },
        ));
        events.push((
            note.start_tick + note.dur_tick,
            TrackEventKind::Midi {
                channel: note.channel.into(),
                message: MidiMessage::NoteOff {
                    key: note.pitch.into(),
                    vel: 0.into(),
                },
            },
        ));
    }

    finish_track(events)
}

/// Sort events by absolute tick, convert to deltas and close the track
///
/// The sort is stable, so a note-off and the next note-on at the same tick
/// keep their order.
fn finish_track(mut events: Vec<(u64, TrackEventKind<'_>)>) -> Result<Track<'_>> {
    events.sort_by_key(|(tick, _)| *tick);

    let mut track = Vec::with_capacity(events.len() + 1);
    let mut prev_tick = 0u64;
    for (tick, kind) in events {
        let delta = to_delta(tick - prev_tick)?;
        track.push(TrackEvent { delta, kind });
        prev_tick = tick;
    }

    // End of track
    track.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    Ok(track)
}

fn to_delta(ticks: u64) -> Result<midly::num::u28> {
    if ticks > MAX_DELTA_TICKS {
        return Err(TranscodeError::Midi(format!(
            "delta of {} ticks exceeds the {} tick limit",
            ticks, MAX_DELTA_TICKS
        )));
    }
    Ok((ticks as u32).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_part_score(notes: Vec<Note>) -> Score {
        Score {
            tpq: 128,
            tempos: vec![Tempo { tick: 0, bpm: 120.0 }],
            parts: vec![Part {
                name: "Text".to_string(),
                channel: 0,
                program: Some(0),
                notes,
            }],
        }
    }

    #[test]
    fn test_write_minimal_smf() {
        let score = one_part_score(vec![Note {
            start_tick: 0,
            dur_tick: 48,
            channel: 0,
            pitch: 60,
            vel: 64,
        }]);

        let mut out = Vec::new();
        write_smf(&score, &mut out).expect("Failed to write SMF");

        // Verify header
        assert_eq!(&out[0..4], b"MThd");
        // Format 1, two tracks (conductor + notes)
        assert_eq!(out[9], 0x01);
        assert_eq!(out[11], 0x02);
    }

    #[test]
    fn test_deltas_between_notes() {
        let score = one_part_score(vec![
            Note { start_tick: 0, dur_tick: 48, channel: 0, pitch: 60, vel: 64 },
            Note { start_tick: 80, dur_tick: 16, channel: 0, pitch: 62, vel: 64 },
        ]);
        let track = build_part_track(&score.parts[0]).unwrap();

        let deltas: Vec<u32> = track.iter().map(|e| e.delta.as_int()).collect();
        // name, program, on, off, on, off, end
        assert_eq!(deltas, vec![0, 0, 0, 48, 32, 16, 0]);
    }

    #[test]
    fn test_back_to_back_notes_keep_off_before_on() {
        let score = one_part_score(vec![
            Note { start_tick: 0, dur_tick: 32, channel: 0, pitch: 60, vel: 64 },
            Note { start_tick: 32, dur_tick: 32, channel: 0, pitch: 60, vel: 64 },
        ]);
        let track = build_part_track(&score.parts[0]).unwrap();

        assert!(matches!(
            track[3].kind,
            TrackEventKind::Midi { message: MidiMessage::NoteOff { .. }, .. }
        ));
        assert!(matches!(
            track[4].kind,
            TrackEventKind::Midi { message: MidiMessage::NoteOn { .. }, .. }
        ));
        assert_eq!(track[4].delta.as_int(), 0);
    }

    #[test]
    fn test_oversized_delta_rejected() {
        let score = one_part_score(vec![Note {
            start_tick: MAX_DELTA_TICKS + 1,
            dur_tick: 8,
            channel: 0,
            pitch: 60,
            vel: 64,
        }]);
        let mut out = Vec::new();
        assert!(matches!(write_smf(&score, &mut out), Err(TranscodeError::Midi(_))));
    }

    #[test]
    fn test_invalid_tempo_rejected() {
        for bpm in [0.0, -120.0, f64::NAN, f64::INFINITY, 1.0, 3.0] {
            let mut score = one_part_score(vec![]);
            score.tempos[0].bpm = bpm;
            let mut out = Vec::new();
            assert!(
                matches!(write_smf(&score, &mut out), Err(TranscodeError::Midi(_))),
                "{} bpm should be rejected",
                bpm
            );
        }
    }

    #[test]
    fn test_tempo_written_exactly() {
        for (bpm, micros) in [(120.0, 500_000), (60.0, 1_000_000), (4.0, 15_000_000)] {
            let mut score = one_part_score(vec![]);
            score.tempos[0].bpm = bpm;
            let mut out = Vec::new();
            write_smf(&score, &mut out).unwrap();

            let smf = Smf::parse(&out).unwrap();
            let written = smf.tracks[0].iter().find_map(|e| match e.kind {
                TrackEventKind::Meta(MetaMessage::Tempo(t)) => Some(t.as_int()),
                _ => None,
            });
            assert_eq!(written, Some(micros), "{} bpm", bpm);
        }
    }
}
