//! Verse preprocessing: tokenize, weigh every word in context, flatten,
//! then try the candidate meters until one scans.

use tracing::debug;

use super::Verse;
use crate::bridge::Bridge;
use crate::meter::Registry;
use crate::model::{VerseType, Weight};
use crate::word::Word;
use crate::{Error, Result};

/// Alphabetic tokens of a line. Everything outside `a-z`/`A-Z` separates
/// words.
pub fn split_words(text: &str) -> Result<Vec<Word>> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(Word::new)
        .collect()
}

/// Weights of every non-elided syllable, in reading order.
pub fn flat_list(words: &[Word]) -> Vec<Weight> {
    words
        .iter()
        .flat_map(Word::syllable_structure)
        .filter(|&w| w != Weight::None)
        .collect()
}

/// One line on its way to becoming a [`Verse`].
pub struct VersePreprocessor<'a, B: Bridge> {
    text: &'a str,
    bridge: &'a B,
    registry: &'a Registry,
    hint: &'a [VerseType],
}

impl<'a, B: Bridge> VersePreprocessor<'a, B> {
    pub fn new(text: &'a str, bridge: &'a B, registry: &'a Registry, hint: &'a [VerseType]) -> Self {
        Self { text, bridge, registry, hint }
    }

    /// Split and weigh every word, then apply word contact between each
    /// pair of neighbours.
    pub fn analyze(&self) -> Result<Vec<Word>> {
        let mut words = split_words(self.text)?;
        for word in &mut words {
            word.analyze_structure(self.bridge)?;
        }
        for index in 1..words.len() {
            let (head, tail) = words.split_at_mut(index);
            head[index - 1].apply_word_contact(&tail[0])?;
        }
        Ok(words)
    }

    /// Per-word syllable weights after word contact.
    pub fn layer(&self) -> Result<Vec<Vec<Weight>>> {
        Ok(self.analyze()?.iter().map(Word::syllable_structure).collect())
    }

    /// Try each candidate meter in registry order and return the first
    /// verse that scans.
    ///
    /// A non-zero `verse_id` with `persist` set hands the result to the
    /// bridge. When no candidate accepts the syllable count the error is
    /// [`Error::VerseCreator`]; once any candidate got as far as scanning,
    /// it is [`Error::Unscannable`] with every failure.
    pub fn create_verse(&self, verse_id: u64, persist: bool) -> Result<Verse> {
        let words = self.analyze()?;
        let flat = flat_list(&words);
        let mut failures = Vec::new();
        let mut scanned = false;

        for candidate in self.registry.candidates(self.hint) {
            let meter = match (candidate.classify)(&flat) {
                Ok(meter) => meter,
                Err(error) => {
                    debug!(verse_type = ?candidate.verse_type, %error, "meter rejected syllable count");
                    failures.push(error);
                    continue;
                }
            };
            scanned = true;
            let mut verse = Verse::new(self.text, words.clone(), flat.clone(), meter);
            match verse.parse() {
                Ok(()) => {
                    debug!(%meter, structure = %verse.structure(), "verse scanned");
                    if persist && verse_id != 0 {
                        verse.save(verse_id, self.bridge)?;
                    }
                    return Ok(verse);
                }
                Err(error) => {
                    debug!(%meter, %error, "meter rejected verse");
                    failures.push(error);
                }
            }
        }

        if scanned {
            return Err(Error::Unscannable { failures });
        }
        if failures.is_empty() {
            return Err(Error::VerseCreator("no candidate meter".into()));
        }
        let messages: Vec<String> = failures.iter().map(ToString::to_string).collect();
        Err(Error::VerseCreator(messages.join("; ")))
    }
}
