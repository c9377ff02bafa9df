//! Note and key lookups for the WASM API
//!
//! Each exported function has a plain Rust counterpart (`*_info`) that does
//! the parsing and resolution, so the logic can be exercised without a
//! JavaScript host. The exported wrappers only log and serialize.

use wasm_bindgen::prelude::*;

use super::helpers::{js_error, serialize, to_json};
use super::types::{KeyInfo, NoteInfo};
use crate::keys::{Key, KeyError};
use crate::models::{Note, ParseError, PitchClass};
use crate::{wasm_info, wasm_log};

/// Errors surfaced to JavaScript callers
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid pitch: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("octave {0} is beyond the note range")]
    OctaveOutOfRange(i32),
}

pub fn note_info(number: i32) -> NoteInfo {
    NoteInfo::from(&Note::new(number))
}

pub fn note_label_info(text: &str) -> Result<NoteInfo, LookupError> {
    let note: Note = text.parse()?;
    Ok(NoteInfo::from(&note))
}

pub fn key_info(tonic: &str) -> Result<KeyInfo, LookupError> {
    let tonic: PitchClass = tonic.parse()?;
    let key = Key::new(tonic)?;
    Ok(KeyInfo::from(&key))
}

pub fn major_scale_info(
    tonic: &str,
    octave: i32,
    include_octave: bool,
) -> Result<Vec<NoteInfo>, LookupError> {
    let tonic: PitchClass = tonic.parse()?;
    let key = Key::new(tonic)?;
    let scale = key
        .scale(octave, include_octave)
        .ok_or(LookupError::OctaveOutOfRange(octave))?;
    Ok(scale.map(|note| NoteInfo::from(&note)).collect())
}

// ============================================================================
// JavaScript exports
// ============================================================================

/// Describe the note at a chromatic number (C4 = 48)
#[wasm_bindgen(js_name = describeNote)]
pub fn describe_note(number: i32) -> Result<JsValue, JsValue> {
    wasm_log!("describeNote({})", number);
    serialize(&note_info(number), "describeNote serialization failed")
}

/// Describe a note written as text, e.g. "F#4" or "Bb-1"
#[wasm_bindgen(js_name = describeNoteLabel)]
pub fn describe_note_label(text: &str) -> Result<JsValue, JsValue> {
    wasm_log!("describeNoteLabel('{}')", text);
    let info = note_label_info(text).map_err(|e| js_error("describeNoteLabel", e))?;
    serialize(&info, "describeNoteLabel serialization failed")
}

/// Resolve the major key for a tonic such as "F#" or "Db"
#[wasm_bindgen(js_name = getKey)]
pub fn get_key(tonic: &str) -> Result<JsValue, JsValue> {
    let info = key_info(tonic).map_err(|e| js_error("getKey", e))?;
    wasm_info!("getKey('{}') -> {}", tonic, info.name);
    serialize(&info, "getKey serialization failed")
}

/// Same as `getKey`, rendered as a JSON string
#[wasm_bindgen(js_name = getKeyJson)]
pub fn get_key_json(tonic: &str) -> Result<String, JsValue> {
    let info = key_info(tonic).map_err(|e| js_error("getKeyJson", e))?;
    to_json(&info, "getKeyJson serialization failed")
}

/// Notes of the major scale for `tonic`, starting at `octave`
#[wasm_bindgen(js_name = getMajorScale)]
pub fn get_major_scale(tonic: &str, octave: i32, include_octave: bool) -> Result<JsValue, JsValue> {
    wasm_log!("getMajorScale('{}', {}, {})", tonic, octave, include_octave);
    let notes = major_scale_info(tonic, octave, include_octave)
        .map_err(|e| js_error("getMajorScale", e))?;
    serialize(&notes, "getMajorScale serialization failed")
}
