//! # Bridge
//!
//! The contract between the scansion engine and whatever stores irregular
//! lexemes, observed weight patterns and scanned verses.
//!
//! ## Implementations
//!
//! | Bridge | Module | Description |
//! |--------|--------|-------------|
//! | `DummyBridge` | here | No overrides, no persistence |
//! | `LocalDictionaryBridge` | `memory` | In-memory dictionary for testing/embedding |

pub mod memory;

use crate::phonology::Syllable;
use crate::Result;

pub use memory::{DictionaryEntry, LocalDictionaryBridge};

// ============================================================================
// Bridge trait
// ============================================================================

/// Collaborator consulted while splitting words and after a verse scans.
///
/// Lookups take the normalized lowercase text (`v`→`u`, `j`→`i`).
pub trait Bridge: Send + Sync {
    /// Opaque record handed back to [`Bridge::dump`].
    type Entry: Send;

    /// Lexicalized syllabification of an irregular lexeme, or empty.
    fn split_from_deviant_word(&self, lexeme: &str) -> Result<Vec<Syllable>>;

    /// Observed weight strings (digits `0`-`3`) for this exact surface form.
    fn use_dictionary(&self, word: &str) -> Result<Vec<String>>;

    /// Build one record of a word's weights in a scanned verse.
    fn make_entry(&self, word: &str, structure: &str, verse_id: u64) -> Self::Entry;

    /// Persist the records of one verse.
    fn dump(&self, entries: Vec<Self::Entry>) -> Result<()>;
}

// ============================================================================
// DummyBridge
// ============================================================================

/// A bridge that knows nothing and stores nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DummyBridge;

impl Bridge for DummyBridge {
    type Entry = ();

    fn split_from_deviant_word(&self, _lexeme: &str) -> Result<Vec<Syllable>> { Ok(Vec::new()) }

    fn use_dictionary(&self, _word: &str) -> Result<Vec<String>> { Ok(Vec::new()) }

    fn make_entry(&self, _word: &str, _structure: &str, _verse_id: u64) {}

    fn dump(&self, _entries: Vec<()>) -> Result<()> { Ok(()) }
}
