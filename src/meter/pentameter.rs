//! Pentameter, the second line of the elegiac distich.
//!
//! The back half is fixed (`MACRON DACTYLUS DACTYLUS MACRON`), so only the
//! first two feet are free and the syllable count decides how many of them
//! are dactyls.

use serde::{Deserialize, Serialize};

use crate::model::{Foot, Weight};
use crate::{Error, Result};

pub const MIN_SYLLABLES: usize = 12;
pub const MAX_SYLLABLES: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PentameterShape {
    Spondaic,
    Balanced,
    Dactylic,
}

const ORDERED: [PentameterShape; 3] =
    [PentameterShape::Spondaic, PentameterShape::Balanced, PentameterShape::Dactylic];

/// Weights the fixed back half forbids, counted from the end.
const BACK_HALF: [(usize, Weight); 8] = [
    (1, Weight::Light),
    (2, Weight::Heavy),
    (3, Weight::Heavy),
    (4, Weight::Light),
    (5, Weight::Heavy),
    (6, Weight::Heavy),
    (7, Weight::Light),
    (8, Weight::Light),
];

pub fn classify(flat: &[Weight]) -> Result<PentameterShape> {
    let size = flat.len();
    if size > MAX_SYLLABLES {
        return Err(Error::VerseCreator("too many syllables".into()));
    }
    if size < MIN_SYLLABLES {
        return Err(Error::VerseCreator("too few syllables".into()));
    }
    ORDERED.get(size - MIN_SYLLABLES).copied().ok_or_else(|| {
        Error::VerseCreator(format!("{size} is an illegal number of syllables in a pentameter"))
    })
}

/// Check the back half against its template.
pub fn preparse(flat: &[Weight]) -> Result<()> {
    let violated = BACK_HALF.iter().any(|&(from_end, forbidden)| {
        flat.len().checked_sub(from_end).is_none_or(|i| flat[i] == forbidden)
    });
    if violated {
        return Err(Error::Pentameter("problem in second half with syllable weight".into()));
    }
    Ok(())
}

pub fn scan(shape: PentameterShape, flat: &[Weight]) -> Result<Vec<Foot>> {
    if !(MIN_SYLLABLES..=MAX_SYLLABLES).contains(&flat.len()) {
        return Err(Error::Pentameter(format!("cannot scan {} syllables", flat.len())));
    }
    let front = match shape {
        PentameterShape::Spondaic => {
            if let Some(i) = (0..4).find(|&i| flat[i] == Weight::Light) {
                return Err(Error::Pentameter(format!(
                    "no light syllable allowed on pos {i} of spondaic pentameter"
                )));
            }
            [Foot::Spondaeus, Foot::Spondaeus]
        }
        PentameterShape::Dactylic => {
            let clash = flat[0] == Weight::Light
                || flat[1] == Weight::Heavy
                || flat[2] == Weight::Heavy
                || flat[3] == Weight::Light
                || flat[4] == Weight::Heavy
                || flat[5] == Weight::Heavy;
            if clash {
                return Err(Error::Pentameter("problem with first half of dactylic pentameter".into()));
            }
            [Foot::Dactylus, Foot::Dactylus]
        }
        PentameterShape::Balanced => balanced_front(flat)?,
    };
    Ok(vec![front[0], front[1], Foot::Macron, Foot::Dactylus, Foot::Dactylus, Foot::Macron])
}

/// The first decisive weight in positions 1-4 places the dactyl; the other
/// foot is the spondee.
fn balanced_front(flat: &[Weight]) -> Result<[Foot; 2]> {
    let (i, weight) = (1..5)
        .map(|i| (i, flat[i]))
        .find(|&(_, w)| w != Weight::Anceps)
        .ok_or_else(|| Error::Pentameter("not enough info in first half of balanced pentameter".into()))?;
    let (here, there) = if weight == Weight::Light {
        (Foot::Dactylus, Foot::Spondaeus)
    } else {
        (Foot::Spondaeus, Foot::Dactylus)
    };
    let mut front = [Foot::Unknown; 2];
    front[i / 3] = here;
    front[(5 - i) / 3] = there;
    Ok(front)
}
