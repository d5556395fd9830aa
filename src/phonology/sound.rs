//! Sound assembly: grouping letters into phonological units.
//!
//! A sound is one or two letters: a vowel, a diphthong (`ae`, `au`, `oe`),
//! a semivowel, a consonant (including the digraphs `qu`, `gu`, muta cum
//! liquida and aspirates) or a heavy-maker. Sounds are plain values;
//! equality is structural over the normalized letters.

use smallvec::{SmallVec, smallvec};

use super::letter::{HARD_MUTA, LIQUIDA, Letter, LetterType, MUTA, normalize};
use crate::{Error, Result};

/// Variant tag of a [`Sound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Vowel,
    Diphthong,
    Semivowel,
    Consonant,
    Heavymaker,
}

const DIPHTHONGS: [&str; 3] = ["au", "ae", "oe"];

/// One phonological unit of one or two letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sound {
    kind: SoundKind,
    letters: SmallVec<[char; 2]>,
}

impl Sound {
    /// Build a sound from one or two letters, rejecting any combination that
    /// is not a valid unit.
    pub fn new(text: &str) -> Result<Self> {
        let letters = text.chars().map(Letter::new).collect::<Result<Vec<_>>>()?;
        let sound = match letters.as_slice() {
            [single] => Self {
                kind: match single.kind() {
                    LetterType::Vowel => SoundKind::Vowel,
                    LetterType::Semivowel => SoundKind::Semivowel,
                    LetterType::Consonant => SoundKind::Consonant,
                    LetterType::Heavymaker => SoundKind::Heavymaker,
                },
                letters: SmallVec::from_slice(&[single.as_char()]),
            },
            [first, second] => Self {
                kind: match first.kind() {
                    LetterType::Vowel | LetterType::Semivowel => SoundKind::Diphthong,
                    LetterType::Consonant | LetterType::Heavymaker => SoundKind::Consonant,
                },
                letters: SmallVec::from_slice(&[first.as_char(), second.as_char()]),
            },
            _ => return Err(Error::Sound(format!("'{text}' is not one or two letters"))),
        };
        if !sound.is_well_formed() {
            return Err(Error::Sound(format!("'{text}' is not a valid sound")));
        }
        Ok(sound)
    }

    fn is_well_formed(&self) -> bool {
        match (self.kind, self.letters.as_slice()) {
            (SoundKind::Diphthong, _) => DIPHTHONGS.contains(&self.text().as_str()),
            (SoundKind::Consonant, [_]) => true,
            (SoundKind::Consonant, &[first, second]) => {
                (second == 'u' && (first == 'q' || first == 'g'))
                    || (MUTA.contains(&first) && LIQUIDA.contains(&second))
                    || (second == 'h' && (first == 'r' || HARD_MUTA.contains(&first)))
            }
            (_, letters) => letters.len() == 1,
        }
    }

    /// The semivowel `u`, used when the `gu` digraph has to give up its vowel.
    pub(crate) fn semivowel_u() -> Self {
        Self { kind: SoundKind::Semivowel, letters: SmallVec::from_slice(&['u']) }
    }

    /// The consonant `g`, the other half of a split `gu`.
    pub(crate) fn consonant_g() -> Self {
        Self { kind: SoundKind::Consonant, letters: SmallVec::from_slice(&['g']) }
    }

    pub fn kind(&self) -> SoundKind {
        self.kind
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Whether this sound is written exactly as `text` (already normalized).
    pub fn is(&self, text: &str) -> bool {
        self.letters.iter().copied().eq(text.chars())
    }

    /// Vowels and diphthongs.
    pub fn is_vowel(&self) -> bool {
        matches!(self.kind, SoundKind::Vowel | SoundKind::Diphthong)
    }

    pub fn is_diphthong(&self) -> bool {
        self.kind == SoundKind::Diphthong
    }

    pub fn is_semivowel(&self) -> bool {
        self.kind == SoundKind::Semivowel
    }

    /// Consonants and heavy-makers.
    pub fn is_consonant(&self) -> bool {
        matches!(self.kind, SoundKind::Consonant | SoundKind::Heavymaker)
    }

    pub fn is_heavy_making(&self) -> bool {
        self.kind == SoundKind::Heavymaker
    }

    pub fn is_h(&self) -> bool {
        self.kind == SoundKind::Consonant && self.letters.first() == Some(&'h')
    }

    pub fn is_muta_cum_liquida(&self) -> bool {
        self.kind == SoundKind::Consonant
            && matches!(self.letters.as_slice(), [m, l] if MUTA.contains(m) && LIQUIDA.contains(l))
    }
}

// ============================================================================
// Sound factory
// ============================================================================

fn is_vowel_letter(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Sounds for the next one to three normalized characters.
///
/// A vowel–semivowel–vowel window yields its first two letters as separate
/// sounds, so the semivowel starts the next syllable (`no-vae`, `tro-iae`).
/// Otherwise the longest valid sound at the start of the window wins.
pub fn create_sounds_from_text(window: &[char]) -> Result<SmallVec<[Sound; 2]>> {
    let text: String = window.iter().map(|&c| normalize(c)).collect();
    let chars: Vec<char> = text.chars().collect();
    match chars.as_slice() {
        [] => Err(Error::Sound("no text to build a sound from".into())),
        &[first, middle, last] if is_vowel_letter(first) && matches!(middle, 'i' | 'u') && is_vowel_letter(last) => {
            let mut sounds = SmallVec::new();
            sounds.push(Sound::new(&first.to_string())?);
            sounds.push(Sound::new(&middle.to_string())?);
            Ok(sounds)
        }
        [_, _, _, _, ..] => Err(Error::Sound(format!("window '{text}' is longer than three letters"))),
        [first, rest @ ..] => {
            let pair: String = std::iter::once(*first).chain(rest.iter().take(1).copied()).collect();
            let sound = match Sound::new(&pair) {
                Ok(sound) => sound,
                Err(_) => Sound::new(&first.to_string())?,
            };
            Ok(smallvec![sound])
        }
    }
}

/// Split a whole text into sounds. Every character is consumed exactly once.
pub fn find_sounds_for_text(text: &str) -> Result<Vec<Sound>> {
    let chars: Vec<char> = text.chars().collect();
    let mut sounds = Vec::with_capacity(chars.len());
    let mut position = 0;
    while position < chars.len() {
        let end = (position + 3).min(chars.len());
        for sound in create_sounds_from_text(&chars[position..end])? {
            position += sound.len();
            sounds.push(sound);
        }
    }
    Ok(sounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(sounds: &[Sound]) -> Vec<String> {
        sounds.iter().map(Sound::text).collect()
    }

    #[test]
    fn test_equality_ignores_case_and_consonantal_spelling() {
        assert_eq!(Sound::new("u").unwrap(), Sound::new("v").unwrap());
        assert_eq!(Sound::new("I").unwrap(), Sound::new("j").unwrap());
        assert_eq!(Sound::new("QV").unwrap(), Sound::new("qu").unwrap());
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(Sound::new("th").unwrap().kind(), SoundKind::Consonant);
        assert_eq!(Sound::new("rh").unwrap().kind(), SoundKind::Consonant);
        assert!(Sound::new("tr").unwrap().is_muta_cum_liquida());
        assert!(Sound::new("ae").unwrap().is_diphthong());
        assert!(!Sound::new("qu").unwrap().is_muta_cum_liquida());
    }

    #[test]
    fn test_invalid_sounds() {
        assert!(matches!(Sound::new("qi"), Err(Error::Sound(_))));
        assert!(Sound::new("gy").is_err());
        assert!(Sound::new("xr").is_err());
        assert!(Sound::new("ui").is_err());
        assert!(Sound::new("abc").is_err());
        assert!(Sound::new("").is_err());
    }

    #[test]
    fn test_two_vowels_fall_back_to_first_letter() {
        for text in ["ui", "uu", "ou", "ea"] {
            let window: Vec<char> = text.chars().collect();
            let sounds = create_sounds_from_text(&window).unwrap();
            assert_eq!(sounds.len(), 1, "{text}");
            assert_eq!(sounds[0].len(), 1, "{text}");
        }
    }

    #[test]
    fn test_find_sounds() {
        assert_eq!(texts(&find_sounds_for_text("fors").unwrap()), ["f", "o", "r", "s"]);
        assert_eq!(texts(&find_sounds_for_text("quae").unwrap()), ["qu", "ae"]);
        assert_eq!(texts(&find_sounds_for_text("thea").unwrap()), ["th", "e", "a"]);
        assert_eq!(texts(&find_sounds_for_text("aeum").unwrap()), ["ae", "u", "m"]);
        assert_eq!(texts(&find_sounds_for_text("aevum").unwrap()), ["ae", "u", "u", "m"]);
    }

    #[test]
    fn test_intervocalic_semivowel_stays_separate() {
        assert_eq!(texts(&find_sounds_for_text("novae").unwrap()), ["n", "o", "u", "ae"]);
        assert_eq!(texts(&find_sounds_for_text("Troiae").unwrap()), ["tr", "o", "i", "ae"]);
    }

    #[test]
    fn test_unknown_letter_fails() {
        assert!(matches!(find_sounds_for_text("waw"), Err(Error::Sound(_))));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn consumed_length_equals_input(text in "[abcdefghiklmnopqrstuxyz]{1,24}") {
                let sounds = find_sounds_for_text(&text).unwrap();
                let consumed: usize = sounds.iter().map(Sound::len).sum();
                prop_assert_eq!(consumed, text.chars().count());
                let rebuilt: String = sounds.iter().map(Sound::text).collect();
                prop_assert_eq!(rebuilt, text);
            }
        }
    }
}
