/// Major scale generation by chromatic stepping
///
/// Interval pattern for major scale from root: whole, whole, half, whole,
/// whole, whole, half. The generator only adds semitones; it does not pick
/// letters, so its notes carry the default table spellings. Choosing the
/// correct letter per degree is the job of `KeySignature::resolve`.

use std::iter::FusedIterator;

use crate::models::Note;

/// Semitone steps between consecutive degrees, ending with the step back to the octave
pub const MAJOR_STEPS: [i32; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Lazy major scale over `Note`s
///
/// Single-pass: the iterator is not `Clone`, build a new one to walk the
/// scale again. A scale that would step past `i32::MAX` ends early.
#[derive(Debug)]
pub struct MajorScale {
    current: Option<Note>,
    emitted: usize,
    len: usize,
}

impl MajorScale {
    /// The seven degrees starting at `start`
    pub fn new(start: Note) -> Self {
        Self {
            current: Some(start),
            emitted: 0,
            len: 7,
        }
    }

    /// The seven degrees followed by the octave above `start`
    pub fn with_octave(start: Note) -> Self {
        Self {
            current: Some(start),
            emitted: 0,
            len: 8,
        }
    }
}

impl Iterator for MajorScale {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        if self.emitted >= self.len {
            return None;
        }

        let note = self.current?;
        self.current = note.checked_add(MAJOR_STEPS[self.emitted % MAJOR_STEPS.len()]);
        self.emitted += 1;
        Some(note)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.emitted;
        match self.current {
            Some(_) if remaining > 0 => (1, Some(remaining)),
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for MajorScale {}
