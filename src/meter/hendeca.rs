//! Hendecasyllables: eleven syllables on one of three fixed templates.
//!
//! ```text
//! Phalaecian  xx-uu-u-u-x
//! Alcaic      x-u-x-uu-u-
//! Sapphic     -x-x-uu-u--
//! ```
//!
//! `-` is HEAVY, `u` is LIGHT and `x` is free. There are no free feet: once
//! the template is chosen, every fixed slot is written into the verse.

use serde::{Deserialize, Serialize};

use crate::model::Weight;
use crate::{Error, Result};

pub const SYLLABLES: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HendecaShape {
    Phalaecian,
    Alcaic,
    Sapphic,
}

impl HendecaShape {
    pub fn template(self) -> &'static str {
        match self {
            HendecaShape::Phalaecian => "xx-uu-u-u-x",
            HendecaShape::Alcaic => "x-u-x-uu-u-",
            HendecaShape::Sapphic => "-x-x-uu-u--",
        }
    }
}

/// Choose the template: single-position signals first, then eliminate the
/// templates that some known weight contradicts.
pub fn classify(flat: &[Weight]) -> Result<HendecaShape> {
    use Weight::{Heavy, Light};

    if flat.len() != SYLLABLES {
        return Err(Error::VerseCreator(format!(
            "incorrect number of syllables: {}",
            flat.len()
        )));
    }
    let is = |i: usize, w: Weight| flat[i] == w;

    if is(10, Light) {
        return Ok(HendecaShape::Phalaecian);
    }
    if is(2, Light) || is(7, Light) || is(8, Heavy) || is(9, Light) {
        return Ok(HendecaShape::Alcaic);
    }
    if is(5, Light) {
        return Ok(HendecaShape::Sapphic);
    }

    let phalaecian = !(is(3, Heavy) || is(4, Heavy));
    let alcaic = !(is(1, Light)
        || is(2, Heavy)
        || is(3, Light)
        || is(7, Heavy)
        || is(8, Light)
        || is(9, Heavy));
    let sapphic = !(is(0, Light) || is(4, Light) || is(5, Heavy));

    let remaining: Vec<HendecaShape> = [
        (phalaecian, HendecaShape::Phalaecian),
        (alcaic, HendecaShape::Alcaic),
        (sapphic, HendecaShape::Sapphic),
    ]
    .into_iter()
    .filter_map(|(possible, shape)| possible.then_some(shape))
    .collect();

    match remaining.as_slice() {
        [shape] => Ok(*shape),
        [] => Err(Error::VerseCreator(
            "could not determine hendecasyllable subtype: conflicting hints".into(),
        )),
        _ => Err(Error::VerseCreator(
            "could not determine hendecasyllable subtype: not enough information".into(),
        )),
    }
}

/// Write the template into the verse, failing on any contradiction.
pub fn preparse(shape: HendecaShape, flat: &mut [Weight]) -> Result<()> {
    if flat.len() != SYLLABLES {
        return Err(Error::Hendeca(format!("cannot scan {} syllables", flat.len())));
    }
    for (slot, weight) in shape.template().chars().zip(flat.iter_mut()) {
        match slot {
            '-' if *weight == Weight::Light => {
                return Err(Error::Hendeca("cannot be light".into()));
            }
            'u' if *weight == Weight::Heavy => {
                return Err(Error::Hendeca("cannot be heavy".into()));
            }
            '-' => *weight = Weight::Heavy,
            'u' => *weight = Weight::Light,
            _ => {}
        }
    }

    if shape == HendecaShape::Phalaecian {
        match (flat[0], flat[1]) {
            (Weight::Light, Weight::Light) => {
                return Err(Error::Hendeca(
                    "phalaecian hendecasyllable cannot start with two light syllables".into(),
                ));
            }
            (_, Weight::Light) => flat[0] = Weight::Heavy,
            (Weight::Light, _) => flat[1] = Weight::Heavy,
            _ => {}
        }
    }
    Ok(())
}
