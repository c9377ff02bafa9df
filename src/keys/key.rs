/// Keys with enharmonic alternatives
///
/// A key pairs the signature of its tonic with the signature of the tonic's
/// other spelling when both exist (F# major / Gb major). Tonics whose own
/// signature would need double accidentals fall back to the other spelling
/// (D# resolves to Eb major).

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::scale::MajorScale;
use super::signature::KeySignature;
use crate::models::{Accidental, Note, PitchClass, REFERENCE_OCTAVE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Neither the tonic nor its enharmonic spelling yields a signature
    #[error("no major key signature exists for tonic {0}")]
    UnresolvableTonic(PitchClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Key {
    key_signature: KeySignature,
    alternative_key_signature: Option<KeySignature>,
    flat: bool,
    natural: bool,
    sharp: bool,
}

impl Key {
    pub fn new(tonic: PitchClass) -> Result<Key, KeyError> {
        let first = KeySignature::resolve(tonic);

        let alternative = enharmonic_tonic(tonic);
        let second = alternative.and_then(KeySignature::resolve);

        let (key_signature, alternative_key_signature) = match (first, second) {
            (Some(first), second) => (first, second.filter(|s| *s != first)),
            (None, Some(second)) => {
                log::debug!("Key {}: using enharmonic tonic {}", tonic, second.tonic());
                (second, None)
            }
            (None, None) => return Err(KeyError::UnresolvableTonic(tonic)),
        };

        let uses = |accidental: Accidental| {
            key_signature.accidental() == accidental
                || alternative_key_signature.map(|s| s.accidental()) == Some(accidental)
        };

        Ok(Key {
            key_signature,
            alternative_key_signature,
            flat: uses(Accidental::Flat),
            natural: uses(Accidental::Natural),
            sharp: uses(Accidental::Sharp),
        })
    }

    /// Primary signature
    pub fn key_signature(&self) -> &KeySignature {
        &self.key_signature
    }

    /// Enharmonic signature, when the tonic's other spelling also resolves
    pub fn alternative_key_signature(&self) -> Option<&KeySignature> {
        self.alternative_key_signature.as_ref()
    }

    pub fn name(&self) -> String {
        self.key_signature.name()
    }

    pub fn flat(&self) -> bool {
        self.flat
    }

    pub fn natural(&self) -> bool {
        self.natural
    }

    pub fn sharp(&self) -> bool {
        self.sharp
    }

    /// The seven scale notes of the primary signature, starting at `octave`
    ///
    /// `None` when the tonic at `octave` is beyond the `i32` note line.
    pub fn notes(&self, octave: i32) -> Option<MajorScale> {
        self.scale(octave, false)
    }

    /// Like `notes`, optionally ending on the tonic an octave up
    pub fn scale(&self, octave: i32, include_octave: bool) -> Option<MajorScale> {
        let start = Note::from_pitch_class(self.key_signature.tonic(), octave)?;
        Some(if include_octave {
            MajorScale::with_octave(start)
        } else {
            MajorScale::new(start)
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alternative_key_signature {
            Some(alt) => write!(f, "{} ({})", self.key_signature, alt),
            None => write!(f, "{}", self.key_signature),
        }
    }
}

/// The other table spelling of `tonic`, if it has one
///
/// If the tonic is not the canonical name of its note, the canonical name is
/// the alternative; otherwise the note's alternative name is.
fn enharmonic_tonic(tonic: PitchClass) -> Option<PitchClass> {
    let note = Note::from_pitch_class(tonic, REFERENCE_OCTAVE)?;
    let name = note.name().pitch_class;

    let candidate = if name != tonic {
        Some(name)
    } else {
        note.alternative_name().map(|label| label.pitch_class)
    };

    candidate.filter(|pc| *pc != tonic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(s: &str) -> PitchClass {
        s.parse().unwrap()
    }

    #[test]
    fn test_enharmonic_tonic() {
        assert_eq!(enharmonic_tonic(pc("F#")), Some(pc("Gb")));
        assert_eq!(enharmonic_tonic(pc("Gb")), Some(pc("F#")));
        assert_eq!(enharmonic_tonic(pc("C")), Some(pc("B#")));
        assert_eq!(enharmonic_tonic(pc("Cb")), Some(pc("B")));
        assert_eq!(enharmonic_tonic(pc("D")), None);
    }

    #[test]
    fn test_c_major_has_no_alternative() {
        let key = Key::new(pc("C")).unwrap();
        assert_eq!(key.name(), "C");
        assert!(key.alternative_key_signature().is_none());
        assert!(key.natural());
        assert!(!key.flat());
        assert!(!key.sharp());
    }

    #[test]
    fn test_f_sharp_pairs_with_g_flat() {
        let key = Key::new(pc("F#")).unwrap();
        assert_eq!(key.to_string(), "F# (Gb)");
        assert!(key.sharp());
        assert!(key.flat());
        assert!(!key.natural());
    }

    #[test]
    fn test_unresolvable_tonic_promotes_alternative() {
        let key = Key::new(pc("D#")).unwrap();
        assert_eq!(key.name(), "Eb");
        assert!(key.alternative_key_signature().is_none());
        assert!(key.flat());
        assert!(!key.sharp());
    }

    #[test]
    fn test_notes_follow_primary_tonic() {
        let key = Key::new(pc("Bb")).unwrap();
        let numbers: Vec<i32> = key.notes(3).unwrap().map(|n| n.number()).collect();
        assert_eq!(numbers, vec![46, 48, 50, 51, 53, 55, 57]);
        assert_eq!(key.scale(3, true).unwrap().last().map(|n| n.number()), Some(58));
    }

    #[test]
    fn test_notes_beyond_note_line() {
        let key = Key::new(pc("C")).unwrap();
        assert!(key.notes(i32::MAX).is_none());
        assert!(key.scale(i32::MIN, true).is_none());
    }

    #[test]
    fn test_key_error_message() {
        let err = KeyError::UnresolvableTonic(pc("D#"));
        assert_eq!(err.to_string(), "no major key signature exists for tonic D#");
    }
}
