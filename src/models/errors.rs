//! Error types for textual pitch input
//!
//! Parsing never falls back to a default pitch: every malformed input
//! surfaces as one of these variants.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty pitch text")]
    Empty,

    /// Letter is not one of A-G
    #[error("invalid letter: '{0}'")]
    InvalidLetter(String),

    /// Accidental is not flat, natural or sharp (double accidentals included)
    #[error("invalid accidental: '{0}'")]
    InvalidAccidental(String),

    #[error("invalid octave: '{0}'")]
    InvalidOctave(String),
}
