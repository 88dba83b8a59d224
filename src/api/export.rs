//! Export operations for the WASM API
//!
//! This module provides functions to turn text from the page into:
//! - MIDI: Standard MIDI File Format 1, ready to wrap in a Blob
//! - Notes JSON: decoded notes and assembled events for inspection
//! - Trace lines: one `r: …, d: …, p: …` line per decoded note

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, midi_options, resolve_profile, serialize, transcode_error};
use crate::api::types::TranscriptionView;
use crate::converters::transcribe;
use crate::diagnostics::describe_notes;
use crate::models::{Profile, PROFILE_NAMES};
use crate::renderers::midi::events_to_midi;
use crate::utils::text_to_bytes;
use crate::{wasm_log, wasm_info, wasm_warn, wasm_error};

// ============================================================================
// MIDI Export
// ============================================================================

/// Convert text to MIDI with a built-in profile
///
/// # Parameters
/// - `text`: Text from the form
/// - `profile_name`: `reference` (default), `legacy` or `conventional`
/// - `channel`: MIDI channel 0-15 for every note (default 0)
///
/// # Returns
/// MIDI file as Uint8Array (Standard MIDI File Format 1)
#[wasm_bindgen(js_name = textToMidi)]
pub fn text_to_midi(
    text: &str,
    profile_name: Option<String>,
    channel: Option<u8>,
) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("textToMidi called: {} chars, profile={:?}, channel={:?}",
        text.chars().count(), profile_name, channel);

    let profile = resolve_profile(profile_name)
        .map_err(|e| transcode_error("Profile lookup failed", e))?;

    render_midi(text, &profile, channel)
}

/// Convert text to MIDI with a profile object supplied by JavaScript
///
/// The object uses the camelCase field names of `Profile`
/// (e.g. `{ chunkWidth: 11, controlWidth: 4, pitchBounds: {...}, ... }`).
#[wasm_bindgen(js_name = textToMidiWithProfile)]
pub fn text_to_midi_with_profile(
    text: &str,
    profile: JsValue,
    channel: Option<u8>,
) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("textToMidiWithProfile called: {} chars, channel={:?}", text.chars().count(), channel);

    let profile: Profile = deserialize(profile, "Invalid profile object")?;
    wasm_log!("  Using custom profile '{}'", profile.name);

    render_midi(text, &profile, channel)
}

fn render_midi(text: &str, profile: &Profile, channel: Option<u8>) -> Result<js_sys::Uint8Array, JsValue> {
    let input = text_to_bytes(text);
    wasm_log!("  Input: {} bytes", input.len());

    let transcription = transcribe(&input, profile)
        .map_err(|e| transcode_error(&format!("Transcoding error (profile '{}')", profile.name), e))?;

    wasm_log!("  Decoded {} notes, {} events", transcription.notes.len(), transcription.events.len());
    if transcription.events.is_empty() && !input.is_empty() {
        wasm_warn!("Every chunk decoded as a rest; the MIDI file has no notes");
    }

    let options = midi_options(channel);
    let midi_bytes = events_to_midi(&transcription.events, profile.ticks_per_quarter, &options)
        .map_err(|e| transcode_error("MIDI write error", e))?;

    wasm_info!("  MIDI generated: {} bytes", midi_bytes.len());

    // Convert to Uint8Array for JavaScript
    let uint8_array = js_sys::Uint8Array::new_with_length(midi_bytes.len() as u32);
    uint8_array.copy_from(&midi_bytes);

    Ok(uint8_array)
}

// ============================================================================
// Inspection
// ============================================================================

/// Decode text and return notes plus assembled events as JSON
#[wasm_bindgen(js_name = textToNotesJson)]
pub fn text_to_notes_json(text: &str, profile_name: Option<String>) -> Result<String, JsValue> {
    wasm_info!("textToNotesJson called: {} chars, profile={:?}", text.chars().count(), profile_name);

    let profile = resolve_profile(profile_name)
        .map_err(|e| transcode_error("Profile lookup failed", e))?;
    let transcription = transcribe(&text_to_bytes(text), &profile)
        .map_err(|e| transcode_error("Transcoding error", e))?;

    let view = TranscriptionView::new(&profile.name, &transcription);
    let json = serde_json::to_string_pretty(&view)
        .map_err(|e| {
            wasm_error!("JSON serialization error: {}", e);
            JsValue::from_str(&format!("JSON serialization error: {}", e))
        })?;

    wasm_info!("  Notes JSON generated: {} bytes", json.len());
    Ok(json)
}

/// One trace line per decoded note, before rests are folded
#[wasm_bindgen(js_name = describeText)]
pub fn describe_text(text: &str, profile_name: Option<String>) -> Result<Vec<String>, JsValue> {
    let profile = resolve_profile(profile_name)
        .map_err(|e| transcode_error("Profile lookup failed", e))?;
    let transcription = transcribe(&text_to_bytes(text), &profile)
        .map_err(|e| transcode_error("Transcoding error", e))?;

    Ok(describe_notes(&transcription.notes))
}

// ============================================================================
// Profiles
// ============================================================================

/// Names of the built-in profiles
#[wasm_bindgen(js_name = profileNames)]
pub fn profile_names() -> Vec<String> {
    PROFILE_NAMES.iter().map(|n| n.to_string()).collect()
}

/// Built-in profile as a JavaScript object (a starting point for custom ones)
#[wasm_bindgen(js_name = getProfile)]
pub fn get_profile(name: &str) -> Result<JsValue, JsValue> {
    let profile = Profile::named(name)
        .map_err(|e| transcode_error("Profile lookup failed", e))?;
    serialize(&profile, "Profile serialization failed")
}
