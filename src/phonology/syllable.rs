//! Syllables: validity, onset/coda predicates and weight rules.

use super::sound::{Sound, find_sounds_for_text};
use crate::model::Weight;
use crate::{Error, Result};

/// An ordered run of sounds forming one phonological unit.
///
/// Equality compares the sounds only; weight and stress are annotations.
#[derive(Debug, Clone)]
pub struct Syllable {
    sounds: Vec<Sound>,
    weight: Option<Weight>,
    stressed: bool,
}

impl PartialEq for Syllable {
    fn eq(&self, other: &Self) -> bool {
        self.sounds == other.sounds
    }
}

impl Syllable {
    /// Build a syllable from text, rejecting it unless it is valid.
    pub fn new(text: &str) -> Result<Self> {
        let mut syllable = Self::unchecked(text)?;
        if !syllable.is_valid() {
            return Err(Error::Syllable(format!("'{text}' is not a valid syllable")));
        }
        syllable.split_gu_nucleus();
        Ok(syllable)
    }

    /// Build a syllable from text without validating the sound combination.
    pub fn unchecked(text: &str) -> Result<Self> {
        Ok(Self::from_sounds(find_sounds_for_text(text)?))
    }

    pub(crate) fn from_sounds(sounds: Vec<Sound>) -> Self {
        Self { sounds, weight: None, stressed: false }
    }

    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    pub fn text(&self) -> String {
        self.sounds.iter().map(Sound::text).collect()
    }

    /// The resolved weight, if one has been assigned.
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = Some(weight);
    }

    pub fn stressed(&self) -> bool {
        self.stressed
    }

    pub(crate) fn set_stressed(&mut self, stressed: bool) {
        self.stressed = stressed;
    }

    // ========================================================================
    // Validity
    // ========================================================================

    /// A syllable holds exactly one nucleus and nothing after its coda that
    /// would start a new nucleus.
    pub fn is_valid(&self) -> bool {
        sounds_are_valid(&self.sounds, false)
    }

    /// Append a sound if the syllable stays valid while still being built
    /// (a run of consonants alone is acceptable at this stage).
    pub fn add_sound(&mut self, sound: Sound) -> Result<()> {
        let mut candidate = self.sounds.clone();
        candidate.push(sound);
        if !sounds_are_valid(&candidate, true) {
            return Err(Error::Syllable(format!(
                "'{}' cannot take another sound",
                self.text()
            )));
        }
        self.sounds = candidate;
        Ok(())
    }

    /// A leading `gu` whose `u` is the only possible nucleus is split into
    /// `g` + `u` (`gus`); `gu` before another vowel stays one consonant (`gui`).
    pub(crate) fn split_gu_nucleus(&mut self) {
        let starts_with_gu = self.sounds.first().is_some_and(|s| s.is("gu"));
        let has_other_nucleus = self.sounds.iter().skip(1).any(|s| s.is_vowel() || s.is_semivowel());
        if starts_with_gu && !has_other_nucleus {
            self.sounds[0] = Sound::semivowel_u();
            self.sounds.insert(0, Sound::consonant_g());
        }
    }

    pub(crate) fn push_sound(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    pub(crate) fn insert_sound(&mut self, sound: Sound) {
        self.sounds.insert(0, sound);
    }

    pub(crate) fn pop_sound(&mut self) -> Option<Sound> {
        self.sounds.pop()
    }

    pub(crate) fn remove_first_sound(&mut self) -> Option<Sound> {
        if self.sounds.is_empty() { None } else { Some(self.sounds.remove(0)) }
    }

    // ========================================================================
    // Onset and coda
    // ========================================================================

    fn first(&self) -> Option<&Sound> {
        self.sounds.first()
    }

    fn last(&self) -> Option<&Sound> {
        self.sounds.last()
    }

    pub fn ends_with_vowel(&self) -> bool {
        self.last().is_some_and(|s| s.is_vowel() || s.is_semivowel())
    }

    pub fn ends_with_consonant(&self) -> bool {
        self.last().is_some_and(Sound::is_consonant)
    }

    pub fn ends_with_consonant_cluster(&self) -> bool {
        match self.sounds.as_slice() {
            [.., before, last] => before.is_consonant() && last.is_consonant(),
            _ => false,
        }
    }

    pub fn ends_with_heavymaker(&self) -> bool {
        self.last().is_some_and(Sound::is_heavy_making)
    }

    /// Ends in a vowel, or in `m` after a vowel or semivowel.
    pub fn can_elide_if_final(&self) -> bool {
        self.ends_with_vowel()
            || match self.sounds.as_slice() {
                [.., before, last] => last.is("m") && (before.is_vowel() || before.is_semivowel()),
                _ => false,
            }
    }

    /// Closed in a way no following word can undo: a heavy-maker, a true
    /// consonant cluster, or a final diphthong.
    pub fn must_be_heavy(&self) -> bool {
        self.ends_with_heavymaker()
            || self.ends_with_consonant_cluster()
            || (self.ends_with_vowel() && self.has_diphthong())
    }

    /// Whether the syllable opens with a vowel sound.
    ///
    /// An initial semivowel only counts as a vowel when it stands alone or
    /// before a consonant (`ius` starts consonantally word-initially). `h`
    /// before a vowel is transparent.
    pub fn starts_with_vowel(&self, initial: bool) -> bool {
        match self.sounds.as_slice() {
            [] => false,
            [first, ..] if first.is_vowel() => true,
            [first, second, ..] if first.is_h() && !second.is_consonant() => true,
            [first] => first.is_semivowel(),
            [first, second, ..] => first.is_semivowel() && (!initial || second.is_consonant()),
        }
    }

    pub fn starts_with_consonant(&self, initial: bool) -> bool {
        !self.starts_with_vowel(initial)
    }

    /// Two consonant sounds in the onset, or a heavy-maker.
    pub fn starts_with_consonant_cluster(&self) -> bool {
        let Some(first) = self.first() else { return false };
        self.starts_with_consonant(true)
            && !first.is("gu")
            && (self.sounds.get(1).is_some_and(Sound::is_consonant) || self.makes_previous_heavy())
    }

    pub fn makes_previous_heavy(&self) -> bool {
        self.first().is_some_and(Sound::is_heavy_making)
    }

    /// Index of the nucleus: the last vowel or semivowel.
    pub fn vowel_location(&self) -> Result<usize> {
        self.sounds
            .iter()
            .rposition(|s| s.is_vowel() || s.is_semivowel())
            .ok_or_else(|| Error::Syllable(format!("'{}' has no vowel", self.text())))
    }

    pub fn vowel(&self) -> Result<&Sound> {
        Ok(&self.sounds[self.vowel_location()?])
    }

    pub fn has_diphthong(&self) -> bool {
        self.vowel().is_ok_and(Sound::is_diphthong)
    }

    // ========================================================================
    // Weight rules
    // ========================================================================

    /// Heavy by nature or by position. With a following syllable known, an
    /// initial `h` there does not lengthen a single final consonant.
    pub fn is_heavy(&self, next: Option<&Syllable>) -> bool {
        match next {
            Some(next) if next.first().is_some_and(Sound::is_h) => {
                self.ends_with_consonant_cluster() || self.ends_with_heavymaker()
            }
            Some(next) => {
                self.ends_with_consonant()
                    || next.makes_previous_heavy()
                    || (!self.is_light(Some(next)) && self.has_diphthong())
            }
            None => self.ends_with_consonant() || self.has_diphthong(),
        }
    }

    /// Light when an open syllable meets a vowel. Never light in isolation.
    pub fn is_light(&self, next: Option<&Syllable>) -> bool {
        next.is_some_and(|next| self.ends_with_vowel() && next.starts_with_vowel(true))
    }

    /// A diphthong before a vowel is metrically ambiguous.
    pub fn must_be_anceps(&self, next: Option<&Syllable>) -> bool {
        next.is_some_and(|next| {
            self.ends_with_vowel() && self.has_diphthong() && next.starts_with_vowel(true)
        })
    }

    /// The assigned weight, or the weight these rules derive before `next`.
    pub fn weigh(&self, next: Option<&Syllable>) -> Weight {
        if let Some(weight) = self.weight {
            weight
        } else if self.must_be_anceps(next) {
            Weight::Anceps
        } else if self.is_light(next) {
            Weight::Light
        } else if self.is_heavy(next) {
            Weight::Heavy
        } else {
            Weight::Anceps
        }
    }
}

/// Validity over a plain sound list.
///
/// `building` accepts a run of consonants with no nucleus yet, which is how
/// a syllable looks before its vowel has been added.
fn sounds_are_valid(sounds: &[Sound], building: bool) -> bool {
    let Some(first) = sounds.first() else { return false };
    if sounds.len() > 1 && first.is("i") && sounds[1].is("i") {
        return false;
    }
    if first.is("gu") {
        let mut as_vowel = Vec::with_capacity(sounds.len());
        as_vowel.push(Sound::semivowel_u());
        as_vowel.extend_from_slice(&sounds[1..]);
        return sounds_are_valid(&as_vowel, building);
    }

    let mut has_vowel = false;
    let mut has_semivowel = false;
    let mut has_final_consonant = false;
    let mut only_consonants = true;
    for (index, sound) in sounds.iter().enumerate() {
        if sound.is_consonant() {
            if has_vowel || has_semivowel {
                if sound.is("gu") {
                    return false;
                }
                has_final_consonant = true;
            }
        } else if sound.is_vowel() {
            if has_vowel || (has_final_consonant && has_semivowel) {
                return false;
            }
            has_vowel = true;
            only_consonants = false;
        } else if sound.is_semivowel() {
            if has_vowel || (has_final_consonant && has_semivowel) {
                return false;
            }
            if index > 0 {
                has_vowel = true;
            }
            has_semivowel = true;
            only_consonants = false;
        }
    }
    has_vowel || has_semivowel || only_consonants == building
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn syl(text: &str) -> Syllable {
        Syllable::new(text).unwrap()
    }

    #[test]
    fn test_valid_syllables() {
        for text in [
            "ti", "it", "o", "oe", "aen", "sau", "iu", "thy", "hos", "trux", "sprau", "sphroc",
            "urbs", "vos", "vis", "uus", "iam", "qui", "quod", "quae", "zeph", "xoe", "hux",
            "guis", "gui", "guo", "gus",
        ] {
            assert!(Syllable::new(text).is_ok(), "{text} should be valid");
        }
    }

    #[test]
    fn test_invalid_syllables() {
        for text in [
            "tia", "tii", "oa", "aeu", "ahe", "inos", "sepa", "iit", "quia", "guia", "guisa",
            "lt", "b", "rh", "qu", "prout", "cui",
        ] {
            assert!(
                matches!(Syllable::new(text), Err(Error::Syllable(_))),
                "{text} should be invalid"
            );
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(syl("quo"), syl("qvo"));
        assert_eq!(syl("vjs"), syl("uis"));
        assert_ne!(syl("quo"), syl("qua"));
    }

    #[test]
    fn test_gu_gives_up_its_vowel_only_when_needed() {
        let texts = |s: Syllable| s.sounds().iter().map(Sound::text).collect::<Vec<_>>();
        assert_eq!(texts(syl("gus")), ["g", "u", "s"]);
        assert_eq!(texts(syl("gui")), ["gu", "i"]);
        assert!(syl("gus").is_valid());
        assert!(syl("gui").is_valid());
    }

    #[test]
    fn test_vowel_location() {
        assert_eq!(syl("sprau").vowel_location().unwrap(), 2);
        assert_eq!(syl("qua").vowel_location().unwrap(), 1);
        assert_eq!(syl("ua").vowel_location().unwrap(), 1);
        assert_eq!(syl("io").vowel().unwrap(), &Sound::new("o").unwrap());
        assert!(Syllable::unchecked("st").unwrap().vowel_location().is_err());
    }

    #[test]
    fn test_starts_with_vowel() {
        assert!(syl("a").starts_with_vowel(true));
        assert!(syl("hac").starts_with_vowel(true));
        assert!(syl("u").starts_with_vowel(true));
        assert!(syl("it").starts_with_vowel(true));
        assert!(!syl("ius").starts_with_vowel(true));
        assert!(syl("ius").starts_with_vowel(false));
        assert!(!syl("ta").starts_with_vowel(true));
        assert!(!syl("hrac").starts_with_vowel(true));
    }

    #[test]
    fn test_starts_with_consonant_cluster() {
        assert!(syl("spi").starts_with_consonant_cluster());
        assert!(syl("xe").starts_with_consonant_cluster());
        assert!(syl("spru").starts_with_consonant_cluster());
        assert!(!syl("pro").starts_with_consonant_cluster());
        assert!(!syl("pa").starts_with_consonant_cluster());
        assert!(!syl("pha").starts_with_consonant_cluster());
        assert!(!syl("u").starts_with_consonant_cluster());
        assert!(!syl("gui").starts_with_consonant_cluster());
    }

    #[test]
    fn test_isolated_weight() {
        for text in ["as", "ax", "ae", "ras", "dax", "tae"] {
            assert!(syl(text).is_heavy(None), "{text}");
        }
        for text in ["u", "o", "i", "e", "a"] {
            assert!(!syl(text).is_heavy(None), "{text}");
            assert!(!syl(text).is_light(None), "{text}");
        }
    }

    #[test]
    fn test_contextual_weight() {
        assert!(syl("re").is_light(Some(&syl("ac"))));
        assert!(syl("rae").is_light(Some(&syl("ac"))));
        assert!(syl("re").is_heavy(Some(&syl("xac"))));
        assert!(syl("res").is_heavy(Some(&syl("sac"))));
        assert!(syl("rae").is_heavy(Some(&syl("bac"))));
        assert!(!syl("re").is_heavy(Some(&syl("prac"))));
        assert!(!syl("res").is_heavy(Some(&syl("hac"))));
        assert!(syl("rex").is_heavy(Some(&syl("hac"))));
    }

    #[test]
    fn test_weigh() {
        assert_eq!(syl("rae").weigh(Some(&syl("ac"))), Weight::Anceps);
        assert_eq!(syl("re").weigh(Some(&syl("ac"))), Weight::Light);
        assert_eq!(syl("res").weigh(Some(&syl("ta"))), Weight::Heavy);
        assert_eq!(syl("re").weigh(Some(&syl("ta"))), Weight::Anceps);

        let mut assigned = syl("re");
        assigned.set_weight(Weight::Heavy);
        assert_eq!(assigned.weigh(Some(&syl("ac"))), Weight::Heavy);
    }

    #[test]
    fn test_elision_candidates() {
        assert!(syl("to").can_elide_if_final());
        assert!(syl("tum").can_elide_if_final());
        assert!(!syl("tus").can_elide_if_final());
    }

    #[test]
    fn test_must_be_heavy() {
        assert!(syl("rex").must_be_heavy());
        assert!(syl("urbs").must_be_heavy());
        assert!(syl("iae").must_be_heavy());
        assert!(!syl("tus").must_be_heavy());
        assert!(!syl("to").must_be_heavy());
    }

    #[test]
    fn test_add_sound() {
        let mut syllable = Syllable::from_sounds(vec![]);
        syllable.add_sound(Sound::new("s").unwrap()).unwrap();
        syllable.add_sound(Sound::new("a").unwrap()).unwrap();
        syllable.add_sound(Sound::new("n").unwrap()).unwrap();
        assert!(syllable.add_sound(Sound::new("e").unwrap()).is_err());
        assert_eq!(syllable.text(), "san");
    }
}
