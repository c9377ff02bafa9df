//! Pitch Spelling and Key Signature WASM Module
//!
//! Models twelve-tone equal-tempered pitch as an integer line, spells
//! positions on that line with letter names, and resolves major key
//! signatures (with their enharmonic alternatives) from a tonic.

pub mod api;
pub mod keys;
pub mod models;

// Re-export commonly used types
pub use keys::{Key, KeyError, KeySignature, MajorScale};
pub use models::{Accidental, Letter, Note, NoteLabel, ParseError, PitchClass};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second start call finds the logger already installed
    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            return;
        }
    }

    log::info!("Pitch spelling WASM module initialized");
}
