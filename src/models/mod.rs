//! Pitch models
//!
//! Spelled pitch primitives and the chromatic note line they map onto.

pub mod errors;
pub mod note;
pub mod pitch;

// Re-export commonly used types
pub use errors::ParseError;
pub use note::Note;
pub use pitch::{Accidental, Letter, NoteLabel, PitchClass, REFERENCE_OCTAVE};
