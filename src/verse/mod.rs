//! # Verses
//!
//! A [`Verse`] is a fully scanned line: its words with every syllable
//! weight resolved, the flattened weights the meter ran on, the feet, and
//! the stress accents. Verses are only ever produced by a successful scan;
//! there is no partially resolved verse.

pub mod preprocessor;

use serde::Serialize;

pub use preprocessor::{VersePreprocessor, flat_list, split_words};

use crate::bridge::Bridge;
use crate::meter::Meter;
use crate::model::{Foot, VerseType, Weight};
use crate::word::Word;
use crate::{Error, Result};

/// A scanned line of verse.
#[derive(Debug, Clone)]
pub struct Verse {
    text: String,
    words: Vec<Word>,
    flat_list: Vec<Weight>,
    feet: Vec<Foot>,
    meter: Meter,
}

impl PartialEq for Verse {
    /// Same characters, same verse.
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Verse {
    pub(crate) fn new(text: &str, words: Vec<Word>, flat_list: Vec<Weight>, meter: Meter) -> Self {
        Self { text: text.to_string(), words, flat_list, feet: Vec::new(), meter }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Resolved weights of the non-elided syllables, in reading order.
    pub fn flat_list(&self) -> &[Weight] {
        &self.flat_list
    }

    pub fn feet(&self) -> &[Foot] {
        &self.feet
    }

    pub fn meter(&self) -> Meter {
        self.meter
    }

    pub fn verse_type(&self) -> VerseType {
        self.meter.verse_type()
    }

    pub(crate) fn parse(&mut self) -> Result<()> {
        self.feet = self.meter.scan(&mut self.flat_list)?;
        self.save_structure()?;
        self.add_accents();
        Ok(())
    }

    /// Expand the feet over the flattened weights, then push the result
    /// back onto every non-elided syllable.
    fn save_structure(&mut self) -> Result<()> {
        let mut start = 0;
        for (number, foot) in self.feet.iter().enumerate() {
            if *foot == Foot::Unknown {
                return Err(Error::Verse(format!("impossible to determine foot number {number}")));
            }
            for (offset, &weight) in foot.structure()?.iter().enumerate() {
                let position = start + offset;
                let Some(current) = self.flat_list.get_mut(position) else {
                    return Err(Error::Verse(format!(
                        "foot number {number} runs past syllable #{position}"
                    )));
                };
                if weight != Weight::Anceps && *current != Weight::Anceps && weight != *current {
                    return Err(Error::Verse(format!(
                        "weight #{position} was already {current}, tried to assign {weight}"
                    )));
                }
                *current = weight;
            }
            start += foot.length()?;
        }

        let mut resolved = self.flat_list.iter();
        for syllable in self.words.iter_mut().flat_map(|w| w.syllables_mut().iter_mut()) {
            if syllable.weight() == Some(Weight::None) {
                continue;
            }
            let weight = resolved
                .next()
                .ok_or_else(|| Error::Verse("more syllables than resolved weights".into()))?;
            syllable.set_weight(*weight);
        }
        Ok(())
    }

    /// One stress per word: the first syllable of short words, otherwise
    /// the penultimate when HEAVY, else the antepenultimate.
    fn add_accents(&mut self) {
        for word in &mut self.words {
            let syllables = word.syllables_mut();
            let count = syllables.len();
            let stressed = match count {
                0 => continue,
                1 | 2 => 0,
                _ if syllables[count - 2].weight() == Some(Weight::Heavy) => count - 2,
                _ => count - 3,
            };
            syllables[stressed].set_stressed(true);
        }
    }

    /// One digit per foot.
    pub fn structure(&self) -> String {
        self.feet.iter().map(|f| f.code()).collect()
    }

    /// Syllable weight summed per stress group, a group running from one
    /// stressed syllable up to the next. Elided syllables count 0, LIGHT 1,
    /// anything else 2.
    pub fn zeleny_score(&self) -> Vec<u32> {
        let mut score = Vec::new();
        let mut current = 0;
        for syllable in self.words.iter().flat_map(Word::syllables) {
            if current > 0 && syllable.stressed() {
                score.push(current);
                current = 0;
            }
            current += match syllable.weight() {
                Some(Weight::None) => 0,
                Some(Weight::Light) => 1,
                _ => 2,
            };
        }
        score.push(current);
        score
    }

    /// Hand one dictionary record per word to the bridge.
    pub fn save<B: Bridge>(&self, verse_id: u64, bridge: &B) -> Result<()> {
        let entries: Vec<B::Entry> = self
            .words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let (text, structure) = word.dictionary_record(self.words.get(index + 1));
                bridge.make_entry(&text, &structure, verse_id)
            })
            .collect();
        if entries.is_empty() {
            return Ok(());
        }
        bridge.dump(entries)
    }

    /// Serializable summary of the scansion.
    pub fn summary(&self) -> VerseSummary {
        VerseSummary {
            text: self.text.clone(),
            meter: self.meter,
            structure: self.structure(),
            feet: self.feet.clone(),
            weights: self.flat_list.clone(),
            zeleny: self.zeleny_score(),
        }
    }
}

/// What a presentation layer needs from a scanned verse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerseSummary {
    pub text: String,
    pub meter: Meter,
    pub structure: String,
    pub feet: Vec<Foot>,
    pub weights: Vec<Weight>,
    pub zeleny: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{DummyBridge, LocalDictionaryBridge};
    use crate::meter::Registry;
    use pretty_assertions::assert_eq;
    use Foot::{Dactylus as D, Spondaeus as S};

    const AENEID: &str = "Arma virumque cano, Troiae qui primus ab oris";

    fn scan(text: &str) -> Verse {
        VersePreprocessor::new(text, &DummyBridge, &Registry::standard(), &[VerseType::Hexameter])
            .create_verse(0, false)
            .unwrap()
    }

    #[test]
    fn test_structure_and_weights() {
        use Weight::{Heavy as H, Light as L};
        let verse = scan(AENEID);
        assert_eq!(verse.feet(), [D, D, S, S, D, S]);
        assert_eq!(verse.structure(), "883383");
        assert_eq!(verse.flat_list(), [H, L, L, H, L, L, H, H, H, H, H, L, L, H, H]);
        assert_eq!(verse.verse_type(), VerseType::Hexameter);
    }

    #[test]
    fn test_accents() {
        let verse = scan(AENEID);
        let stressed: Vec<String> = verse
            .words()
            .iter()
            .flat_map(Word::syllables)
            .filter(|s| s.stressed())
            .map(|s| s.text())
            .collect();
        assert_eq!(stressed, ["ar", "rum", "ca", "tro", "qui", "pri", "ab", "o"]);
    }

    #[test]
    fn test_zeleny_score() {
        assert_eq!(scan(AENEID).zeleny_score(), [4, 3, 3, 4, 2, 3, 1, 4]);
    }

    #[test]
    fn test_save_records_every_word() {
        let bridge = LocalDictionaryBridge::new();
        scan(AENEID).save(12, &bridge).unwrap();
        let records: Vec<(String, String)> =
            bridge.entries().into_iter().map(|e| (e.word, e.structure)).collect();
        let expected = [
            ("arma", "23"),
            ("uirum", "21"),
            ("cano", "12"),
            ("troiae", "22"),
            ("qui", "2"),
            ("primus", "23"),
            ("ab", "1"),
            ("oris", "22"),
        ];
        let expected: Vec<(String, String)> =
            expected.iter().map(|(w, s)| (w.to_string(), s.to_string())).collect();
        assert_eq!(records, expected);
        assert!(bridge.entries().iter().all(|e| e.verse_id == 12));
    }

    #[test]
    fn test_equality_is_textual() {
        assert_eq!(scan(AENEID), scan(AENEID));
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_value(scan(AENEID).summary()).unwrap();
        assert_eq!(json["structure"], "883383");
        assert_eq!(json["meter"]["Hexameter"], "Balanced");
    }
}
