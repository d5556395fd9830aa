//! # Words
//!
//! A `Word` owns its sounds and, once split, its syllables. Splitting asks
//! the bridge for irregular lexemes first, falls back to the phonological
//! splitter, repairs proclitic boundaries, and finally lets observed
//! dictionary structures override the computed weights.
//!
//! Word-level weights come from [`Word::analyze_structure`] and are then
//! adjusted against the following word by [`Word::apply_word_contact`].

use tracing::{trace, warn};

use crate::bridge::{Bridge, DummyBridge};
use crate::model::Weight;
use crate::phonology::{Sound, Syllable, split_sounds};
use crate::{Error, Result};

/// Bound suffixes that are stripped before dictionary storage.
pub const ENCLITICS: [&str; 2] = ["que", "ue"];

/// Prefixes that keep their own syllable when the stem starts independently.
pub const PROCLITICS: [&str; 7] = ["ab", "ad", "con", "dis", "in", "ob", "sub"];

/// One alphabetic token of a verse.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Normalized lowercase text, rebuilt from the sounds.
    text: String,
    sounds: Vec<Sound>,
    syllables: Vec<Syllable>,
    /// Capitalized in the source, which marks (mostly Greek) proper names.
    is_title: bool,
}

impl Word {
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() || !text.chars().all(char::is_alphabetic) {
            return Err(Error::Word(format!("'{text}' is not a single alphabetic word")));
        }
        let sounds = crate::phonology::find_sounds_for_text(text)?;
        let mut chars = text.chars();
        let is_title =
            chars.next().is_some_and(char::is_uppercase) && !chars.any(char::is_uppercase);
        Ok(Self {
            text: sounds.iter().map(Sound::text).collect(),
            sounds,
            syllables: Vec::new(),
            is_title,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub(crate) fn syllables_mut(&mut self) -> &mut [Syllable] {
        &mut self.syllables
    }

    pub fn is_title(&self) -> bool {
        self.is_title
    }

    // ========================================================================
    // Clitics
    // ========================================================================

    pub fn proclitic(&self) -> Option<&'static str> {
        PROCLITICS
            .into_iter()
            .find(|p| self.text.starts_with(p) && self.text != *p)
    }

    /// The enclitic this word ends in. A bare `que` or `ue` is a word of
    /// its own, not an enclitic.
    pub fn enclitic(&self) -> Option<&'static str> {
        if ENCLITICS.contains(&self.text.as_str()) {
            return None;
        }
        ENCLITICS.into_iter().find(|e| self.text.ends_with(e))
    }

    pub fn ends_in_enclitic(&self) -> bool {
        self.enclitic().is_some()
    }

    pub fn without_enclitic(&self) -> &str {
        match self.enclitic() {
            Some(enclitic) => &self.text[..self.text.len() - enclitic.len()],
            None => &self.text,
        }
    }

    /// Nominative/accusative endings whose final vowel quantity depends on
    /// the case, so the dictionary must not learn it.
    pub fn ends_in_variable_declension(&self) -> bool {
        self.syllables.len() > 1 && (self.text.ends_with("us") || self.text.ends_with('a'))
    }

    // ========================================================================
    // Splitting
    // ========================================================================

    /// Split into syllables, consulting the bridge for deviant lexemes and
    /// observed weight structures.
    pub fn split<B: Bridge>(&mut self, bridge: &B) -> Result<()> {
        self.split_with(bridge, true)
    }

    fn split_with<B: Bridge>(&mut self, bridge: &B, repair: bool) -> Result<()> {
        let deviant = bridge.split_from_deviant_word(self.without_enclitic())?;
        if !deviant.is_empty() {
            let consumed: usize = deviant.iter().map(|s| s.text().chars().count()).sum();
            let rest: String = self.text.chars().skip(consumed).collect();
            self.syllables = deviant;
            if !rest.is_empty() {
                let mut tail = Word::new(&rest)?;
                tail.split(&DummyBridge)?;
                self.syllables.extend(tail.syllables);
            }
            return Ok(());
        }

        if self.syllables.is_empty() {
            self.syllables = split_sounds(&self.sounds)?;
            if repair {
                self.check_consistency()?;
            }
        }
        if self.syllables.len() == 1 && self.text.chars().count() == 1 {
            self.syllables[0].set_weight(Weight::Heavy);
        }
        let structures = bridge.use_dictionary(&self.text)?;
        self.assign_weights_from_dict(&structures);
        Ok(())
    }

    /// Boundary repairs the splitter cannot see. A proclitic before an
    /// independent stem keeps its own syllable; otherwise invalid syllables
    /// are re-split and a stranded semivowel joins the vowel after it
    /// (`a-chi-u-is` → `a-chi-uis`).
    fn check_consistency(&mut self) -> Result<()> {
        if let Some(proclitic) = self.proclitic() {
            let stem = &self.text[proclitic.len()..];
            if starts_independently(stem)? {
                trace!(word = %self.text, proclitic, "keeping proclitic as its own syllable");
                let mut rest = Word::new(stem)?;
                rest.split(&DummyBridge)?;
                let prefix = Syllable::new(proclitic)?;
                self.sounds = prefix.sounds().iter().chain(rest.sounds.iter()).cloned().collect();
                self.syllables = std::iter::once(prefix).chain(rest.syllables).collect();
                return Ok(());
            }
        }

        let mut repaired = Vec::with_capacity(self.syllables.len());
        for syllable in std::mem::take(&mut self.syllables) {
            if syllable.is_valid() {
                repaired.push(syllable);
                continue;
            }
            let mut fallback = Word::new(&syllable.text())?;
            fallback.split_with(&DummyBridge, false)?;
            repaired.extend(fallback.syllables);
        }
        self.syllables = repaired;

        let mut index = 0;
        while index + 1 < self.syllables.len() {
            let current = &self.syllables[index];
            let next = &self.syllables[index + 1];
            let stranded = current.len() == 1 && current.sounds()[0].is_semivowel();
            if stranded && next.starts_with_vowel(true) {
                if let Ok(merged) = Syllable::new(&format!("{}{}", current.text(), next.text())) {
                    self.syllables[index] = merged;
                    self.syllables.remove(index + 1);
                }
            }
            index += 1;
        }
        Ok(())
    }

    /// Overwrite computed weights with observed ones.
    ///
    /// A single structure is taken as is. Several are merged per position:
    /// undetermined codes (`0`, `3`) abstain, and disagreement among the
    /// rest yields ANCEPS.
    pub fn assign_weights_from_dict(&mut self, structures: &[String]) {
        match structures {
            [] => {}
            [only] => {
                let codes: Vec<char> = only.chars().collect();
                for (position, code) in codes.into_iter().enumerate() {
                    self.assign_code(position, code);
                }
            }
            _ => {
                let mut sorted: Vec<&String> = structures.iter().collect();
                sorted.sort_by_key(|s| std::cmp::Reverse(s.len()));
                let width = sorted.first().map_or(0, |s| s.len());
                for position in 0..width {
                    let mut value: Option<char> = None;
                    for structure in &sorted {
                        let Some(code) = structure.chars().nth(position) else { continue };
                        let decisive = code != '3' && code != '0';
                        match value {
                            None if decisive => value = Some(code),
                            Some(agreed) if agreed != code && decisive => {
                                value = Some('3');
                                break;
                            }
                            _ => {}
                        }
                    }
                    if let Some(code) = value {
                        self.assign_code(position, code);
                    }
                }
            }
        }
    }

    fn assign_code(&mut self, position: usize, code: char) {
        let Some(syllable) = self.syllables.get_mut(position) else { return };
        match Weight::from_code(code) {
            Some(weight) => syllable.set_weight(weight),
            None => warn!(word = %self.text, %code, "ignoring malformed dictionary weight"),
        }
    }

    // ========================================================================
    // Weights
    // ========================================================================

    /// Split if needed, then fix every syllable's weight from its own shape
    /// and the syllable after it. Capitalized words keep no inner LIGHT.
    pub fn analyze_structure<B: Bridge>(&mut self, bridge: &B) -> Result<()> {
        if self.syllables.is_empty() {
            self.split(bridge)?;
        }
        let mut weights = self.syllable_structure();
        if self.is_title {
            let inner = weights.len().saturating_sub(1);
            for weight in &mut weights[..inner] {
                if *weight == Weight::Light {
                    *weight = Weight::Anceps;
                }
            }
        }
        for (syllable, weight) in self.syllables.iter_mut().zip(weights) {
            syllable.set_weight(weight);
        }
        Ok(())
    }

    /// Current weight of every syllable, derived where not yet assigned.
    pub fn syllable_structure(&self) -> Vec<Weight> {
        self.syllables
            .iter()
            .enumerate()
            .map(|(index, syllable)| syllable.weigh(self.syllables.get(index + 1)))
            .collect()
    }

    /// Adjust the final syllable against the first syllable of `next`:
    /// elision, closure by a following consonant, and the light `-que`.
    pub fn apply_word_contact(&mut self, next: &Word) -> Result<()> {
        let first = next
            .syllables
            .first()
            .ok_or_else(|| Error::Word(format!("'{}' has not been split", next.text)))?;
        let Some(last) = self.syllables.last_mut() else {
            return Err(Error::Word(format!("'{}' has not been split", self.text)));
        };

        if last.can_elide_if_final() && first.starts_with_vowel(true) {
            last.set_weight(Weight::None);
        } else if last.must_be_heavy() {
            last.set_weight(Weight::Heavy);
        } else if last.ends_with_consonant() {
            let redistributable = !last.ends_with_consonant_cluster() && !last.has_diphthong();
            if redistributable && first.starts_with_vowel(true) {
                if last.weigh(None) != Weight::Light {
                    last.set_weight(Weight::Anceps);
                }
            } else if first.starts_with_consonant(true) {
                last.set_weight(Weight::Heavy);
            }
        } else if last.ends_with_vowel() && first.starts_with_consonant_cluster() {
            last.set_weight(Weight::Heavy);
        }

        if last.text() == "que" && last.weigh(None) != Weight::None {
            last.set_weight(Weight::Light);
        }
        Ok(())
    }

    /// Whether the final syllable is closed, or would be closed by the
    /// onset of `next`, which makes its recorded weight positional.
    pub fn may_be_heavy_by_position(&self, next: &Word) -> bool {
        let (Some(last), Some(first)) = (self.syllables.last(), next.syllables.first()) else {
            return false;
        };
        last.is_heavy(None)
            && ((first.starts_with_consonant_cluster() && last.ends_with_vowel())
                || (last.ends_with_consonant() && first.starts_with_consonant(true)))
    }

    /// The text and weight string this word contributes to the dictionary
    /// once its verse has scanned.
    ///
    /// Weights that only hold in this verse are recorded as `3`: a final
    /// syllable heavy by position before `next`, a closed stem before a
    /// stripped enclitic, and a variable declension ending.
    pub fn dictionary_record(&self, next: Option<&Word>) -> (String, String) {
        let mut structure: String = self
            .syllables
            .iter()
            .map(|s| s.weight().map_or(' ', Weight::code))
            .collect();
        if let (Some(next), Some(last)) = (next, self.syllables.last()) {
            if self.may_be_heavy_by_position(next) && last.weight() != Some(Weight::None) {
                structure.pop();
                structure.push(Weight::Anceps.code());
            }
        }

        let mut text = self.text.clone();
        if self.ends_in_enclitic() {
            structure.pop();
            text = self.without_enclitic().to_string();
            let closed_stem = text
                .chars()
                .last()
                .and_then(|c| Sound::new(&c.to_string()).ok())
                .is_some_and(|s| s.is_consonant() && !s.is_heavy_making());
            if structure.ends_with(Weight::Heavy.code()) && closed_stem {
                structure.pop();
                structure.push(Weight::Anceps.code());
            }
        }
        if self.ends_in_variable_declension() && structure.pop().is_some() {
            structure.push(Weight::Anceps.code());
        }
        (text, structure)
    }
}

/// Whether a stem after a proclitic starts with a consonant, or with a
/// semivowel used consonantally before a vowel (`ad-iuvat`).
fn starts_independently(stem: &str) -> Result<bool> {
    let mut chars = stem.chars();
    let Some(first) = chars.next() else { return Ok(false) };
    let first = Sound::new(&first.to_string())?;
    if first.is_consonant() {
        return Ok(true);
    }
    match chars.next() {
        Some(second) if first.is_semivowel() => {
            Ok(!Sound::new(&second.to_string())?.is_consonant())
        }
        _ => Ok(false),
    }
}
