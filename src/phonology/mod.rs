//! # Latin Phonology
//!
//! Text → letters → sounds → syllables.
//! Pure functions over text. Nothing here touches the bridge.

pub mod letter;
pub mod sound;
pub mod syllable;
pub mod splitter;

pub use letter::{Letter, LetterType};
pub use sound::{Sound, SoundKind, find_sounds_for_text};
pub use syllable::Syllable;
pub use splitter::{join_into_syllables, redistribute, split_sounds};
