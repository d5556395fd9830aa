//! Letter classification.

use crate::{Error, Result};

/// Phonological class of a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterType {
    Vowel,
    Consonant,
    /// `i` and `u`, which act as either vowel or consonant.
    Semivowel,
    /// `x` and `z`, which close the preceding syllable on their own.
    Heavymaker,
}

/// Liquids: the second half of a muta cum liquida cluster.
pub const LIQUIDA: [char; 2] = ['r', 'l'];
/// Voiceless stops.
pub const HARD_MUTA: [char; 3] = ['p', 't', 'c'];
/// Stops and `f`: the first half of a muta cum liquida cluster.
pub const MUTA: [char; 7] = ['b', 'd', 'g', 'f', 'p', 't', 'c'];

/// Lowercase a character and identify `v` with `u` and `j` with `i`.
pub fn normalize(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some('v'), None) => 'u',
        (Some('j'), None) => 'i',
        (Some(c), None) => c,
        _ => ch,
    }
}

/// Classify a normalized character. Characters outside the Latin
/// alphabet map have no class.
pub fn classify(ch: char) -> Option<LetterType> {
    match ch {
        'e' | 'a' | 'o' | 'y' | 'ë' => Some(LetterType::Vowel),
        'i' | 'u' => Some(LetterType::Semivowel),
        'x' | 'z' => Some(LetterType::Heavymaker),
        't' | 's' | 'r' | 'n' | 'm' | 'c' | 'l' | 'p' | 'd' | 'q' | 'b' | 'g' | 'f' | 'h'
        | 'k' => Some(LetterType::Consonant),
        _ => None,
    }
}

/// One normalized character with its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    ch: char,
    kind: LetterType,
}

impl Letter {
    pub fn new(ch: char) -> Result<Self> {
        let ch = normalize(ch);
        match classify(ch) {
            Some(kind) => Ok(Self { ch, kind }),
            None => Err(Error::Sound(format!("unknown letter '{ch}'"))),
        }
    }

    pub fn as_char(&self) -> char {
        self.ch
    }

    pub fn kind(&self) -> LetterType {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_consonantal_forms_are_identified() {
        assert_eq!(Letter::new('V').unwrap(), Letter::new('u').unwrap());
        assert_eq!(Letter::new('j').unwrap(), Letter::new('I').unwrap());
        assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    }

    #[test]
    fn test_classes() {
        assert_eq!(Letter::new('a').unwrap().kind(), LetterType::Vowel);
        assert_eq!(Letter::new('y').unwrap().kind(), LetterType::Vowel);
        assert_eq!(Letter::new('v').unwrap().kind(), LetterType::Semivowel);
        assert_eq!(Letter::new('x').unwrap().kind(), LetterType::Heavymaker);
        assert_eq!(Letter::new('k').unwrap().kind(), LetterType::Consonant);
    }

    #[test]
    fn test_unknown_letters_are_rejected() {
        assert!(matches!(Letter::new('w'), Err(Error::Sound(_))));
        assert!(Letter::new('3').is_err());
        assert!(Letter::new(' ').is_err());
    }
}
