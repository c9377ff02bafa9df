//! WASM API
//!
//! JavaScript-facing entry points for note description, key lookup and
//! scale generation.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `types`: serializable snapshots of notes, signatures and keys
//! - `keys`: the exported lookup functions

pub mod helpers;
pub mod keys;
pub mod types;

pub use keys::{describe_note, describe_note_label, get_key, get_key_json, get_major_scale, LookupError};
pub use types::{KeyInfo, KeySignatureInfo, NoteInfo};
