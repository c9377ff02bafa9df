//! Shared types for the WASM API
//!
//! Plain serializable snapshots of the core values. Names are rendered as
//! strings ("F#4", "Gb") so JavaScript does not need to know the enums.

use crate::keys::{Key, KeySignature};
use crate::models::Note;

/// Description of a single chromatic note
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct NoteInfo {
    pub number: i32,
    pub midi_number: i64,
    pub piano_number: i64,
    pub octave: i32,
    pub name: String,
    pub alternative_name: Option<String>,
    pub frequency: f64,
}

impl From<&Note> for NoteInfo {
    fn from(note: &Note) -> Self {
        Self {
            number: note.number(),
            midi_number: note.midi_number(),
            piano_number: note.piano_number(),
            octave: note.octave(),
            name: note.name().to_string(),
            alternative_name: note.alternative_name().map(|n| n.to_string()),
            frequency: note.frequency(),
        }
    }
}

/// One resolved major key signature
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct KeySignatureInfo {
    pub name: String,
    pub notes: Vec<String>,
    pub accidentals: Vec<String>,
    pub accidental: String, // "flat", "natural" or "sharp"
    pub accidental_count: usize,
}

impl From<&KeySignature> for KeySignatureInfo {
    fn from(sig: &KeySignature) -> Self {
        Self {
            name: sig.name(),
            notes: sig.notes().iter().map(|pc| pc.to_string()).collect(),
            accidentals: sig.accidentals().map(|pc| pc.to_string()).collect(),
            accidental: format!("{:?}", sig.accidental()).to_lowercase(),
            accidental_count: sig.accidental_count(),
        }
    }
}

/// A key with its optional enharmonic alternative
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct KeyInfo {
    pub name: String,
    pub key_signature: KeySignatureInfo,
    pub alternative_key_signature: Option<KeySignatureInfo>,
    pub flat: bool,
    pub natural: bool,
    pub sharp: bool,
}

impl From<&Key> for KeyInfo {
    fn from(key: &Key) -> Self {
        Self {
            name: key.to_string(),
            key_signature: key.key_signature().into(),
            alternative_key_signature: key.alternative_key_signature().map(KeySignatureInfo::from),
            flat: key.flat(),
            natural: key.natural(),
            sharp: key.sharp(),
        }
    }
}
