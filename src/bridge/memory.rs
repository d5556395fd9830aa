//! In-memory dictionary bridge.
//!
//! The reference implementation of `Bridge`. Deviant lexemes and observed
//! weight strings live in hash maps behind `RwLock`s; every dumped entry is
//! kept in a log and also recorded as a new observation of its word, so a
//! corpus scanned twice benefits from its own first pass.
//!
//! Clones share the same state.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::Bridge;
use crate::phonology::Syllable;
use crate::phonology::letter::normalize;
use crate::Result;

/// One word of one scanned verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub structure: String,
    pub verse_id: u64,
}

/// Serialized form accepted by [`LocalDictionaryBridge::from_json`].
#[derive(Debug, Default, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    dictionary: HashMap<String, Vec<String>>,
    #[serde(default)]
    deviants: HashMap<String, Vec<String>>,
}

/// In-memory bridge for testing and embedding.
#[derive(Clone, Default)]
pub struct LocalDictionaryBridge {
    inner: Arc<DictionaryInner>,
}

#[derive(Default)]
struct DictionaryInner {
    /// word → every weight string recorded for it
    occurrences: RwLock<HashMap<String, Vec<String>>>,
    /// lexeme → syllable texts
    deviants: RwLock<HashMap<String, Vec<String>>>,
    entries: RwLock<Vec<DictionaryEntry>>,
}

fn normalize_key(word: &str) -> String {
    word.chars().map(normalize).collect()
}

impl LocalDictionaryBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `{"dictionary": {word: [structure]}, "deviants": {lexeme: [syllable]}}`.
    /// Both keys are optional.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        let bridge = Self::new();
        for (word, structures) in &file.dictionary {
            for structure in structures {
                bridge.insert_word(word, structure);
            }
        }
        for (lexeme, syllables) in &file.deviants {
            let syllables: Vec<&str> = syllables.iter().map(String::as_str).collect();
            bridge.insert_deviant(lexeme, &syllables);
        }
        Ok(bridge)
    }

    /// Record one observed weight string for a word.
    pub fn insert_word(&self, word: &str, structure: &str) {
        self.inner
            .occurrences
            .write()
            .entry(normalize_key(word))
            .or_default()
            .push(structure.to_string());
    }

    /// Register the syllabification of an irregular lexeme.
    pub fn insert_deviant(&self, lexeme: &str, syllables: &[&str]) {
        self.inner.deviants.write().insert(
            normalize_key(lexeme),
            syllables.iter().map(|s| s.to_string()).collect(),
        );
    }

    /// Every entry dumped so far, in dump order.
    pub fn entries(&self) -> Vec<DictionaryEntry> {
        self.inner.entries.read().clone()
    }
}

impl Bridge for LocalDictionaryBridge {
    type Entry = DictionaryEntry;

    fn split_from_deviant_word(&self, lexeme: &str) -> Result<Vec<Syllable>> {
        let deviants = self.inner.deviants.read();
        match deviants.get(lexeme) {
            Some(syllables) => syllables.iter().map(|s| Syllable::new(s)).collect(),
            None => Ok(Vec::new()),
        }
    }

    /// Distinct observed structures. A lone elided `0` says nothing and is
    /// skipped; a trailing `0` or `3` on a longer structure only reflects the
    /// following word and is dropped.
    fn use_dictionary(&self, word: &str) -> Result<Vec<String>> {
        let occurrences = self.inner.occurrences.read();
        let mut structures: Vec<String> = Vec::new();
        for recorded in occurrences.get(word).into_iter().flatten() {
            let mut structure = recorded.clone();
            if structure == "0" {
                continue;
            }
            if structure.len() > 1 && (structure.ends_with('3') || structure.ends_with('0')) {
                structure.pop();
            }
            if !structures.contains(&structure) {
                structures.push(structure);
            }
        }
        Ok(structures)
    }

    fn make_entry(&self, word: &str, structure: &str, verse_id: u64) -> DictionaryEntry {
        DictionaryEntry {
            word: word.to_string(),
            structure: structure.to_string(),
            verse_id,
        }
    }

    fn dump(&self, entries: Vec<DictionaryEntry>) -> Result<()> {
        {
            let mut occurrences = self.inner.occurrences.write();
            for entry in &entries {
                occurrences
                    .entry(entry.word.clone())
                    .or_default()
                    .push(entry.structure.clone());
            }
        }
        self.inner.entries.write().extend(entries);
        Ok(())
    }
}
