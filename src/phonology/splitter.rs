//! Syllable segmentation.
//!
//! Two passes: a greedy join that grows each syllable until the next sound
//! would invalidate it, then a redistribution pass that moves single sounds
//! across boundaries the greedy pass got wrong. Any syllable left invalid
//! afterwards is re-split on its own.

use tracing::trace;

use super::sound::{Sound, find_sounds_for_text};
use super::syllable::Syllable;
use crate::{Error, Result};

/// Segment a word's sounds into syllables.
pub fn split_sounds(sounds: &[Sound]) -> Result<Vec<Syllable>> {
    redistribute(join_into_syllables(sounds)?)
}

/// Greedy pass: append sounds while the syllable stays valid, then start a
/// new syllable with the rejected sound.
pub fn join_into_syllables(sounds: &[Sound]) -> Result<Vec<Syllable>> {
    let mut syllables = Vec::new();
    let mut current = Syllable::from_sounds(Vec::new());
    for sound in sounds {
        if let Err(error) = current.add_sound(sound.clone()) {
            if current.is_empty() {
                return Err(error);
            }
            syllables.push(std::mem::replace(&mut current, Syllable::from_sounds(Vec::new())));
            current.add_sound(sound.clone())?;
        }
    }
    if !current.is_empty() {
        syllables.push(current);
    }
    Ok(syllables)
}

/// Boundary repair. Each boundary is visited once, left to right, and moves
/// at most one sound:
///
/// - open syllable before a consonant cluster or heavy-maker: the first
///   onset sound moves left
/// - closed syllable before a vowel onset: the final consonant moves right
///   (`arm-a` → `ar-ma`), except an `r` or `l` before a consonantal `u`
///   (`ar-va`) and anything before a final enclitic `-ve`
pub fn redistribute(mut syllables: Vec<Syllable>) -> Result<Vec<Syllable>> {
    let count = syllables.len();
    for index in 0..count.saturating_sub(1) {
        if index + 2 == count && syllables[index + 1].text() == "ue" {
            continue;
        }
        let (head, tail) = syllables.split_at_mut(index + 1);
        let (current, next) = (&mut head[index], &mut tail[0]);

        if current.ends_with_vowel() && next.starts_with_consonant_cluster() {
            move_left(current, next);
        } else if current.ends_with_consonant() {
            let consonantal_u = next.sounds().first().is_some_and(|s| s.is("u"))
                && next.sounds().get(1).is_some_and(|s| !s.is_consonant())
                && !current.ends_with_consonant_cluster();
            if consonantal_u {
                let liquid = current.sounds().last().is_some_and(|s| s.is("r") || s.is("l"));
                if !liquid {
                    move_right(current, next);
                }
            } else if next.starts_with_vowel(false) {
                move_right(current, next);
            }
        }
    }

    let mut repaired = Vec::with_capacity(syllables.len());
    for mut syllable in syllables {
        if syllable.is_valid() {
            syllable.split_gu_nucleus();
            repaired.push(syllable);
            continue;
        }
        let text = syllable.text();
        trace!(syllable = %text, "re-splitting invalid syllable");
        for mut part in join_into_syllables(&find_sounds_for_text(&text)?)? {
            if !part.is_valid() {
                return Err(Error::Syllable(format!("unparseable syllable '{text}'")));
            }
            part.split_gu_nucleus();
            repaired.push(part);
        }
    }
    Ok(repaired)
}

fn move_left(current: &mut Syllable, next: &mut Syllable) {
    if next.len() > 1 {
        if let Some(sound) = next.remove_first_sound() {
            current.push_sound(sound);
        }
    }
}

fn move_right(current: &mut Syllable, next: &mut Syllable) {
    if current.len() > 1 {
        if let Some(sound) = current.pop_sound() {
            next.insert_sound(sound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str) -> Vec<String> {
        split_sounds(&find_sounds_for_text(text).unwrap())
            .unwrap()
            .iter()
            .map(Syllable::text)
            .collect()
    }

    fn joined(text: &str) -> Vec<String> {
        join_into_syllables(&find_sounds_for_text(text).unwrap())
            .unwrap()
            .iter()
            .map(Syllable::text)
            .collect()
    }

    #[test]
    fn test_greedy_join() {
        assert_eq!(joined("arma"), ["arm", "a"]);
        assert_eq!(joined("recentia"), ["rec", "ent", "ia"]);
        assert_eq!(joined("sanguine"), ["san", "guin", "e"]);
    }

    #[test]
    fn test_consonant_moves_right_before_vowel() {
        assert_eq!(split("arma"), ["ar", "ma"]);
        assert_eq!(split("cano"), ["ca", "no"]);
        assert_eq!(split("memor"), ["me", "mor"]);
    }

    #[test]
    fn test_invalid_syllables_are_resplit() {
        assert_eq!(split("recentia"), ["re", "cen", "ti", "a"]);
        assert_eq!(split("mortuus"), ["mor", "tu", "us"]);
        assert_eq!(split("italiam"), ["i", "ta", "li", "am"]);
    }

    #[test]
    fn test_liquid_stays_before_consonantal_u() {
        assert_eq!(split("arua"), ["ar", "ua"]);
        assert_eq!(split("uoluere"), ["uol", "ue", "re"]);
    }

    #[test]
    fn test_enclitic_ve_is_left_alone() {
        assert_eq!(split("quidue"), ["quid", "ue"]);
    }

    #[test]
    fn test_consonant_only_text_fails() {
        let sounds = find_sounds_for_text("ss").unwrap();
        assert!(matches!(split_sounds(&sounds), Err(Error::Syllable(_))));
    }

    #[test]
    fn test_cluster_onset_is_kept() {
        assert_eq!(split("sphrostrurbs"), ["sphros", "trurbs"]);
        assert_eq!(split("strabo"), ["stra", "bo"]);
    }
}
