pub mod key;
pub mod scale;
pub mod signature;

pub use key::{Key, KeyError};
pub use scale::{MajorScale, MAJOR_STEPS};
pub use signature::KeySignature;
