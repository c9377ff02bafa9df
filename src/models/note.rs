//! Chromatic note model
//!
//! A `Note` is keyed by a single integer chromatic number, with 0 spelled C0
//! and 48 spelled C4. MIDI = number + 12 and piano key = number - 8.
//! Frequency is anchored at number 45, which sounds at 440 Hz.
//!
//! Spelling is a fixed table lookup: every chromatic position has one
//! canonical name, and most have a second common spelling.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::errors::ParseError;
use super::pitch::{Accidental, Letter, NoteLabel, PitchClass};

/// Frequency of the reference note
pub const FIXED_NOTE_FREQUENCY: f64 = 440.0;

/// Chromatic number of the reference note (A at 440 Hz)
pub const FIXED_NOTE_NUMBER: i32 = 45;

/// Equal-tempered semitone ratio
pub const FREQUENCY_MULTIPLIER: f64 = 1.059463;

const NAMES: [PitchClass; 12] = [
    PitchClass::new(Letter::C, Accidental::Natural),
    PitchClass::new(Letter::C, Accidental::Sharp),
    PitchClass::new(Letter::D, Accidental::Natural),
    PitchClass::new(Letter::E, Accidental::Flat),
    PitchClass::new(Letter::E, Accidental::Natural),
    PitchClass::new(Letter::F, Accidental::Natural),
    PitchClass::new(Letter::F, Accidental::Sharp),
    PitchClass::new(Letter::G, Accidental::Natural),
    PitchClass::new(Letter::A, Accidental::Flat),
    PitchClass::new(Letter::A, Accidental::Natural),
    PitchClass::new(Letter::B, Accidental::Flat),
    PitchClass::new(Letter::B, Accidental::Natural),
];

// D, G and A would need double accidentals
const ALTERNATIVE_NAMES: [Option<PitchClass>; 12] = [
    Some(PitchClass::new(Letter::B, Accidental::Sharp)),
    Some(PitchClass::new(Letter::D, Accidental::Flat)),
    None,
    Some(PitchClass::new(Letter::D, Accidental::Sharp)),
    Some(PitchClass::new(Letter::F, Accidental::Flat)),
    Some(PitchClass::new(Letter::E, Accidental::Sharp)),
    Some(PitchClass::new(Letter::G, Accidental::Flat)),
    None,
    Some(PitchClass::new(Letter::G, Accidental::Sharp)),
    None,
    Some(PitchClass::new(Letter::A, Accidental::Sharp)),
    Some(PitchClass::new(Letter::C, Accidental::Flat)),
];

/// B# belongs to the octave below its C, Cb to the octave above its B
fn alternative_octave_offset(pitch_class: usize) -> i32 {
    match pitch_class {
        0 => -1,
        11 => 1,
        _ => 0,
    }
}

/// Chromatic number for a spelled label
///
/// `None` when the octave puts the label outside the `i32` note line.
pub fn note_number(label: &NoteLabel) -> Option<i32> {
    // Widened: octave * 12 alone can overflow even when the sum fits (E at i32::MIN)
    let offset = label.letter().semitone() + label.accidental().semitone_offset();
    let number = i64::from(label.octave) * 12 + i64::from(offset);
    i32::try_from(number).ok()
}

/// A point on the twelve-tone equal-tempered line
///
/// Equality, ordering and hashing consider only the chromatic number; the
/// spellings are derived from it.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    number: i32,
    octave: i32,
    name: NoteLabel,
    alternative_name: Option<NoteLabel>,
    frequency: f64,
}

impl Note {
    pub fn new(number: i32) -> Self {
        let pitch_class = number.rem_euclid(12) as usize;
        let octave = number.div_euclid(12);

        let name = NoteLabel::new(NAMES[pitch_class], octave);
        let alternative_name = ALTERNATIVE_NAMES[pitch_class].map(|alt| {
            NoteLabel::new(alt, octave + alternative_octave_offset(pitch_class))
        });

        // Exponent in f64: number - 45 does not fit in i32 near i32::MIN
        let frequency = FIXED_NOTE_FREQUENCY
            * FREQUENCY_MULTIPLIER.powf(f64::from(number) - f64::from(FIXED_NOTE_NUMBER));

        Self {
            number,
            octave,
            name,
            alternative_name,
            frequency,
        }
    }

    /// `None` when the label's octave is beyond the `i32` note line
    pub fn from_label(label: &NoteLabel) -> Option<Self> {
        note_number(label).map(Self::new)
    }

    pub fn from_pitch_class(pitch_class: PitchClass, octave: i32) -> Option<Self> {
        Self::from_label(&NoteLabel::new(pitch_class, octave))
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    /// Widened so every note on the `i32` line has one
    pub fn midi_number(&self) -> i64 {
        i64::from(self.number) + 12
    }

    pub fn piano_number(&self) -> i64 {
        i64::from(self.number) - 8
    }

    /// Floored octave, so number -1 is in octave -1
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Canonical spelling
    pub fn name(&self) -> NoteLabel {
        self.name
    }

    /// Second common spelling, absent for D, G and A
    pub fn alternative_name(&self) -> Option<NoteLabel> {
        self.alternative_name
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// One semitone up, wrapping like `+`
    pub fn semitone_up(&self) -> Note {
        *self + 1
    }

    /// One semitone down, wrapping like `-`
    pub fn semitone_down(&self) -> Note {
        *self - 1
    }

    /// `None` instead of wrapping past either end of the note line
    pub fn checked_add(&self, semitones: i32) -> Option<Note> {
        self.number.checked_add(semitones).map(Note::new)
    }

    pub fn checked_sub(&self, semitones: i32) -> Option<Note> {
        self.number.checked_sub(semitones).map(Note::new)
    }

    /// True if `label` is one of this note's two spellings
    pub fn is_spelled(&self, label: &NoteLabel) -> bool {
        self.name == *label || self.alternative_name.as_ref() == Some(label)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

// The operators wrap around the ends of the i32 line in every build
// profile; use `checked_add`/`checked_sub` to detect the boundary.

impl Add<i32> for Note {
    type Output = Note;

    fn add(self, semitones: i32) -> Note {
        Note::new(self.number.wrapping_add(semitones))
    }
}

impl Add<Note> for i32 {
    type Output = Note;

    fn add(self, note: Note) -> Note {
        note + self
    }
}

impl Sub<i32> for Note {
    type Output = Note;

    fn sub(self, semitones: i32) -> Note {
        Note::new(self.number.wrapping_sub(semitones))
    }
}

impl From<i32> for Note {
    fn from(number: i32) -> Self {
        Note::new(number)
    }
}

impl TryFrom<NoteLabel> for Note {
    type Error = ParseError;

    fn try_from(label: NoteLabel) -> Result<Self, Self::Error> {
        Note::from_label(&label).ok_or_else(|| ParseError::InvalidOctave(label.octave.to_string()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alternative_name {
            Some(alt) => write!(f, "{} ({})", self.name, alt),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for Note {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::try_from(s.parse::<NoteLabel>()?)
    }
}
