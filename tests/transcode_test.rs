use midipocalypse::converters::bytes_to_notes::{Bitstream, Chunks};
use midipocalypse::converters::{decode_notes, transcribe, TranscodeError};
use midipocalypse::diagnostics::describe_notes;
use midipocalypse::models::{Note, NoteEvent, PitchBounds, Profile, Ticks};
use midipocalypse::utils::text_to_bytes;

fn ticks(n: u64) -> Ticks {
    Ticks::from_integer(n)
}

/// Deterministic byte soup for property checks
fn pseudo_random_bytes(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

/// `[72]` = 01001000 → 01001000000: control 0100, data 1000000, popcount 2
#[test]
fn test_single_h_is_a_lone_rest() {
    let profile = Profile::reference();
    let result = transcribe(&[72], &profile).unwrap();

    assert_eq!(result.notes, vec![Note::new(64, ticks(48), true)]);
    assert!(result.events.is_empty());
}

/// `[72, 7]`: chunk 1 is the rest above, chunk 2 = 00111000000
/// (control 0011 → 16 ticks, data 64, popcount 3 → sounding)
#[test]
fn test_leading_rest_becomes_silence_of_next_note() {
    let result = transcribe(&[72, 7], &Profile::reference()).unwrap();

    assert_eq!(
        result.notes,
        vec![Note::new(64, ticks(48), true), Note::new(64, ticks(16), false)]
    );
    assert_eq!(
        result.events,
        vec![NoteEvent {
            pitch: 64,
            duration: ticks(16),
            leading_silence: ticks(48),
        }]
    );
}

/// `[73, 1]`: chunk 1 = 01001001000 (sounding, pitch 72, 48 ticks),
/// chunk 2 = 00001000000 (popcount 1 → rest, 12 ticks) is trailing
#[test]
fn test_trailing_rest_is_dropped() {
    let result = transcribe(&[73, 1], &Profile::reference()).unwrap();

    assert_eq!(
        result.notes,
        vec![Note::new(72, ticks(48), false), Note::new(64, ticks(12), true)]
    );
    assert_eq!(
        result.events,
        vec![NoteEvent {
            pitch: 72,
            duration: ticks(48),
            leading_silence: ticks(0),
        }]
    );
}

/// 10000000 repeated: every 11-bit window holds one or two set bits
#[test]
fn test_all_rest_input_yields_no_events() {
    let result = transcribe(&[0x80; 11], &Profile::reference()).unwrap();

    assert_eq!(result.notes.len(), 8);
    assert!(result.notes.iter().all(|n| n.is_rest));
    assert!(result.events.is_empty());
}

#[test]
fn test_empty_input_yields_nothing() {
    for profile in [Profile::reference(), Profile::legacy(), Profile::conventional()] {
        let result = transcribe(&[], &profile).unwrap();
        assert!(result.notes.is_empty());
        assert!(result.events.is_empty());
    }
}

#[test]
fn test_invariants_hold_for_arbitrary_input() {
    let profile = Profile::reference();
    for seed in 0..50u32 {
        let input = pseudo_random_bytes(seed, seed as usize * 7);
        let result = transcribe(&input, &profile).unwrap();

        let stream = Bitstream::pack(&input, profile.chunk_width).unwrap();
        assert_eq!(stream.len() % 11, 0);
        assert_eq!(Chunks::new(&stream, 11, 4).len(), stream.len() / 11);
        assert_eq!(result.notes.len(), stream.len() / 11);

        assert!(result.notes.iter().all(|n| (21..108).contains(&n.pitch)));
        assert!(result.notes.iter().all(|n| n.duration > ticks(0)));

        let sounding = result.notes.iter().filter(|n| !n.is_rest).count();
        assert_eq!(result.events.len(), sounding);
    }
}

#[test]
fn test_silence_sums_the_rests_between_notes() {
    let profile = Profile::reference();
    let input = pseudo_random_bytes(7, 200);
    let result = transcribe(&input, &profile).unwrap();

    // Recompute each event's silence from the raw notes
    let mut expected = Vec::new();
    let mut silence = ticks(0);
    for note in &result.notes {
        if note.is_rest {
            silence += note.duration;
        } else {
            expected.push(silence);
            silence = ticks(0);
        }
    }
    let actual: Vec<Ticks> = result.events.iter().map(|e| e.leading_silence).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_conversion_is_deterministic() {
    let input = text_to_bytes("Zażółć gęślą jaźń - the quick brown fox");
    for profile in [Profile::reference(), Profile::legacy(), Profile::conventional()] {
        let first = transcribe(&input, &profile).unwrap();
        let second = transcribe(&input, &profile).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_legacy_profile_emits_every_chunk() {
    // "A" = 01000001 → 7-bit chunks 0100000 (32), 1000000 (64)
    let profile = Profile::legacy();
    let result = transcribe(b"A", &profile).unwrap();

    assert_eq!(result.notes.len(), 2);
    assert!(result.notes.iter().all(|n| !n.is_rest));
    let pitches: Vec<u8> = result.events.iter().map(|e| e.pitch).collect();
    assert_eq!(pitches, vec![32, 64]);
    assert!(result
        .events
        .iter()
        .all(|e| e.duration == ticks(64) && e.leading_silence == ticks(0)));
}

#[test]
fn test_legacy_trace_shows_decoded_duration() {
    // No control bits: shift 0, dot bit clear → 8 x 1.5
    let profile = Profile::legacy();
    let result = transcribe(b"A", &profile).unwrap();

    assert_eq!(
        describe_notes(&result.notes),
        vec!["r: false, d: 12, p: 32", "r: false, d: 12, p: 64"]
    );
    assert!(result.events.iter().all(|e| e.duration == ticks(64)));
}

#[test]
fn test_legacy_pitches_stay_in_their_bounds() {
    let profile = Profile::legacy();
    let input: Vec<u8> = (0..=255).collect();
    let notes = decode_notes(&input, &profile).unwrap();
    assert!(notes.iter().all(|n| (32..127).contains(&n.pitch)));
}

#[test]
fn test_conventional_profile_differs_on_h() {
    // popcount 2 is even → sounding; dot bit clear → no multiplier
    let result = transcribe(&[72], &Profile::conventional()).unwrap();
    assert_eq!(
        result.events,
        vec![NoteEvent {
            pitch: 64,
            duration: ticks(32),
            leading_silence: ticks(0),
        }]
    );
}

#[test]
fn test_invalid_range_aborts_without_notes() {
    let mut profile = Profile::reference();
    profile.pitch_bounds = PitchBounds::symmetric(90, 30);

    assert_eq!(
        transcribe(b"hello", &profile),
        Err(TranscodeError::InvalidRange { low: 90, high: 30 })
    );
}

#[test]
fn test_custom_geometry() {
    // 16-bit chunks: 4 control bits, 12 data bits wrapped into [0, 128)
    let profile = Profile {
        name: "wide".to_string(),
        chunk_width: 16,
        control_width: 4,
        pitch_bounds: PitchBounds::symmetric(0, 128),
        ..Profile::reference()
    };
    let notes = decode_notes(&[0x12, 0x34], &profile).unwrap();

    assert_eq!(notes.len(), 1);
    // data 0x234 = 564 → 564 % 128 = 52
    assert_eq!(notes[0].pitch, 52);
    // control 0001: dot set, shift 0 → 8
    assert_eq!(notes[0].duration, ticks(8));
}
