//! Major key signature resolution
//!
//! A major key signature names each of the seven letters exactly once, in
//! letter order from the tonic. The chromatic scale only gives us sounding
//! pitches, so for each degree we pick whichever of the note's two table
//! spellings carries the expected letter. If neither does (the degree would
//! need a double accidental) the tonic has no signature.

use serde::Serialize;
use std::fmt;

use super::scale::MajorScale;
use crate::models::{Accidental, Letter, Note, PitchClass, REFERENCE_OCTAVE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeySignature {
    notes: [PitchClass; 7],
    accidental: Accidental,
    accidental_count: usize,
    /// Indexed by `Letter::index()`
    letter_accidentals: [Accidental; 7],
}

impl KeySignature {
    /// Resolve the major key signature starting at `tonic`
    ///
    /// Returns `None` when some degree cannot be spelled with the expected
    /// letter using a single accidental (e.g. D# major would need F##).
    pub fn resolve(tonic: PitchClass) -> Option<KeySignature> {
        let start = Note::from_pitch_class(tonic, REFERENCE_OCTAVE)?;
        let mut notes = [tonic; 7];

        for (degree, note) in MajorScale::new(start).enumerate() {
            let letter = tonic.letter.step_by(degree as i32);
            match spell_with_letter(&note, letter) {
                Some(pitch_class) => notes[degree] = pitch_class,
                None => {
                    log::debug!(
                        "No {} major signature: degree {} ({}) has no {} spelling",
                        tonic,
                        degree + 1,
                        note,
                        letter
                    );
                    return None;
                }
            }
        }

        Some(KeySignature::from_notes(notes))
    }

    fn from_notes(notes: [PitchClass; 7]) -> Self {
        let mut accidental = Accidental::Natural;
        let mut accidental_count = 0;
        let mut letter_accidentals = [Accidental::Natural; 7];

        for note in &notes {
            if note.accidental != Accidental::Natural {
                accidental_count += 1;
                accidental = note.accidental;
            }
            letter_accidentals[note.letter.index()] = note.accidental;
        }

        Self {
            notes,
            accidental,
            accidental_count,
            letter_accidentals,
        }
    }

    /// The seven pitch classes in letter order from the tonic
    pub fn notes(&self) -> &[PitchClass; 7] {
        &self.notes
    }

    pub fn tonic(&self) -> PitchClass {
        self.notes[0]
    }

    /// Display name of the key (its tonic, e.g. "Gb")
    pub fn name(&self) -> String {
        self.tonic().to_string()
    }

    /// Accidental type used by the signature, `Natural` when there is none
    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn accidental_count(&self) -> usize {
        self.accidental_count
    }

    /// Accidental applied to `letter` in this key
    pub fn accidental_for(&self, letter: Letter) -> Accidental {
        self.letter_accidentals[letter.index()]
    }

    /// The altered pitch classes, in scale order
    pub fn accidentals(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.notes
            .iter()
            .copied()
            .filter(|pc| pc.accidental != Accidental::Natural)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tonic())
    }
}

/// Pick the spelling of `note` that uses `letter`, canonical name first
fn spell_with_letter(note: &Note, letter: Letter) -> Option<PitchClass> {
    let name = note.name().pitch_class;
    if name.letter == letter {
        return Some(name);
    }

    note.alternative_name()
        .map(|alt| alt.pitch_class)
        .filter(|alt| alt.letter == letter)
}
