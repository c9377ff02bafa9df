//! Pitch primitives
//!
//! Letters, accidentals, pitch classes and octave-qualified note labels.
//! These are plain values; the chromatic arithmetic lives in `note`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ParseError;

/// Octave assumed when a label is written without one
pub const REFERENCE_OCTAVE: i32 = 4;

/// The seven diatonic letter names, cyclic with modulus 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in ascending order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position of the letter within C..B (0-6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Advance cyclically by `steps` letters (negative steps move down)
    ///
    /// Examples:
    ///   B.step_by(1)  → C
    ///   C.step_by(-1) → B
    pub fn step_by(self, steps: i32) -> Letter {
        Letter::ALL[(self as i32 + steps).rem_euclid(7) as usize]
    }

    /// Semitones above C for the natural form of this letter
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Letter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        match trimmed.to_uppercase().as_str() {
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            "E" => Ok(Letter::E),
            "F" => Ok(Letter::F),
            "G" => Ok(Letter::G),
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            _ => Err(ParseError::InvalidLetter(trimmed.to_string())),
        }
    }
}

/// Single accidentals only; double sharps and double flats are not representable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    /// Chromatic adjustment applied to the letter (-1, 0, +1)
    pub fn semitone_offset(self) -> i32 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }

    /// ASCII symbol; naturals are written without a sign
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Accidental {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "n" | "♮" | "natural" => Ok(Accidental::Natural),
            "#" | "♯" | "s" | "sharp" => Ok(Accidental::Sharp),
            "b" | "♭" | "flat" => Ok(Accidental::Flat),
            _ => Err(ParseError::InvalidAccidental(trimmed.to_string())),
        }
    }
}

/// A letter plus accidental, independent of octave (e.g. F#)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchClass {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl PitchClass {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Chromatic pitch class 0-11 (C=0), wrapping B# to 0 and Cb to 11
    pub fn semitone(self) -> i32 {
        (self.letter.semitone() + self.accidental.semitone_offset()).rem_euclid(12)
    }

    /// True when both spellings sound the same pitch class
    pub fn is_enharmonic(self, other: PitchClass) -> bool {
        self.semitone() == other.semitone()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

impl FromStr for PitchClass {
    type Err = ParseError;

    /// Accepts the compact form ("F#", "Bb", "C") or the word form ("F sharp")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts.as_slice() {
            [single] => {
                let (letter, accidental) = split_letter(single);
                Ok(PitchClass::new(letter.parse()?, accidental.parse()?))
            }
            [letter, accidental] => Ok(PitchClass::new(letter.parse()?, accidental.parse()?)),
            _ => Err(ParseError::InvalidAccidental(parts[1..].join(" "))),
        }
    }
}

/// A pitch class at a specific octave (e.g. F#4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteLabel {
    pub pitch_class: PitchClass,
    pub octave: i32,
}

impl NoteLabel {
    pub const fn new(pitch_class: PitchClass, octave: i32) -> Self {
        Self { pitch_class, octave }
    }

    pub const fn from_parts(letter: Letter, accidental: Accidental, octave: i32) -> Self {
        Self::new(PitchClass::new(letter, accidental), octave)
    }

    pub fn letter(&self) -> Letter {
        self.pitch_class.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.pitch_class.accidental
    }
}

impl fmt::Display for NoteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for NoteLabel {
    type Err = ParseError;

    /// Accepts "F#4", "Bb-1", "C" (octave 4) or the word form "C sharp 5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() == 1 {
            let (letter, rest) = split_letter(trimmed);
            let octave_start = rest
                .find(|c: char| c == '-' || c == '+' || c.is_ascii_digit())
                .unwrap_or(rest.len());
            let (accidental, octave) = rest.split_at(octave_start);

            let pitch_class = PitchClass::new(letter.parse()?, accidental.parse()?);
            return Ok(NoteLabel::new(pitch_class, parse_octave(octave)?));
        }

        // Word form: the trailing part is an octave only if it is numeric
        let (pitch_parts, octave) = match parts.last().map(|p| p.parse::<i32>()) {
            Some(Ok(octave)) if parts.len() > 1 => (&parts[..parts.len() - 1], octave),
            _ => (&parts[..], REFERENCE_OCTAVE),
        };
        let pitch_class: PitchClass = pitch_parts.join(" ").parse()?;

        Ok(NoteLabel::new(pitch_class, octave))
    }
}

/// Split off the leading letter character
fn split_letter(s: &str) -> (&str, &str) {
    match s.char_indices().nth(1) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}

fn parse_octave(s: &str) -> Result<i32, ParseError> {
    if s.is_empty() {
        return Ok(REFERENCE_OCTAVE);
    }
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidOctave(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_by_wraps_forward() {
        assert_eq!(Letter::B.step_by(1), Letter::C);
        assert_eq!(Letter::G.step_by(3), Letter::C);
        assert_eq!(Letter::C.step_by(7), Letter::C);
        assert_eq!(Letter::D.step_by(15), Letter::E);
    }

    #[test]
    fn test_step_by_wraps_backward() {
        assert_eq!(Letter::C.step_by(-1), Letter::B);
        assert_eq!(Letter::E.step_by(-9), Letter::C);
        assert_eq!(Letter::A.step_by(-7), Letter::A);
    }

    #[test]
    fn test_pitch_class_semitone_wraps() {
        assert_eq!(PitchClass::new(Letter::C, Accidental::Flat).semitone(), 11);
        assert_eq!(PitchClass::new(Letter::B, Accidental::Sharp).semitone(), 0);
        assert_eq!(PitchClass::new(Letter::F, Accidental::Sharp).semitone(), 6);
    }

    #[test]
    fn test_is_enharmonic() {
        let fs = PitchClass::new(Letter::F, Accidental::Sharp);
        let gb = PitchClass::new(Letter::G, Accidental::Flat);
        assert!(fs.is_enharmonic(gb));
        assert!(!fs.is_enharmonic(PitchClass::natural(Letter::G)));
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!("#".parse::<Accidental>().unwrap(), Accidental::Sharp);
        assert_eq!("♭".parse::<Accidental>().unwrap(), Accidental::Flat);
        assert_eq!("Natural".parse::<Accidental>().unwrap(), Accidental::Natural);
        assert_eq!("".parse::<Accidental>().unwrap(), Accidental::Natural);
        assert_eq!(
            "##".parse::<Accidental>(),
            Err(ParseError::InvalidAccidental("##".to_string()))
        );
    }

    #[test]
    fn test_parse_pitch_class_compact() {
        assert_eq!(
            "F#".parse::<PitchClass>().unwrap(),
            PitchClass::new(Letter::F, Accidental::Sharp)
        );
        assert_eq!(
            "bb".parse::<PitchClass>().unwrap(),
            PitchClass::new(Letter::B, Accidental::Flat)
        );
        assert_eq!("c".parse::<PitchClass>().unwrap(), PitchClass::natural(Letter::C));
    }

    #[test]
    fn test_parse_pitch_class_word_form() {
        assert_eq!(
            "G flat".parse::<PitchClass>().unwrap(),
            PitchClass::new(Letter::G, Accidental::Flat)
        );
    }

    #[test]
    fn test_parse_pitch_class_invalid() {
        assert_eq!("".parse::<PitchClass>(), Err(ParseError::Empty));
        assert_eq!(
            "H".parse::<PitchClass>(),
            Err(ParseError::InvalidLetter("H".to_string()))
        );
        assert!("Cbb".parse::<PitchClass>().is_err());
        assert!("C sharp extra".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_parse_note_label() {
        assert_eq!(
            "F#4".parse::<NoteLabel>().unwrap(),
            NoteLabel::from_parts(Letter::F, Accidental::Sharp, 4)
        );
        assert_eq!(
            "Bb-1".parse::<NoteLabel>().unwrap(),
            NoteLabel::from_parts(Letter::B, Accidental::Flat, -1)
        );
        assert_eq!(
            "C".parse::<NoteLabel>().unwrap(),
            NoteLabel::from_parts(Letter::C, Accidental::Natural, REFERENCE_OCTAVE)
        );
        assert_eq!(
            "C sharp 5".parse::<NoteLabel>().unwrap(),
            NoteLabel::from_parts(Letter::C, Accidental::Sharp, 5)
        );
        assert_eq!(
            "E 2".parse::<NoteLabel>().unwrap(),
            NoteLabel::from_parts(Letter::E, Accidental::Natural, 2)
        );
    }

    #[test]
    fn test_parse_note_label_invalid_octave() {
        assert_eq!(
            "C#4-".parse::<NoteLabel>(),
            Err(ParseError::InvalidOctave("4-".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PitchClass::new(Letter::E, Accidental::Flat).to_string(), "Eb");
        assert_eq!(PitchClass::natural(Letter::A).to_string(), "A");
        assert_eq!(NoteLabel::from_parts(Letter::C, Accidental::Sharp, -1).to_string(), "C#-1");
    }

    #[test]
    fn test_serde_roundtrip() {
        let label = NoteLabel::from_parts(Letter::G, Accidental::Flat, 3);
        let json = serde_json::to_string(&label).unwrap();
        let parsed: NoteLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, label);
    }
}
