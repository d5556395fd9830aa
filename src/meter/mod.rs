//! # Meters
//!
//! Each meter is a pair of plain functions: a classifier that picks a
//! shape from the flattened weights (mostly by syllable count) and a
//! scanner that propagates weights and assigns feet for that shape.
//!
//! The [`Registry`] is the explicit table of meters a scanner tries, built
//! once and passed by reference. Candidate order is registry order.
//!
//! | Meter           | Syllables | Shapes                                    |
//! |-----------------|-----------|-------------------------------------------|
//! | Hexameter       | 12-17     | Spondaic … Dactylic (by dactyl count)     |
//! | Pentameter      | 12-14     | Spondaic, Balanced, Dactylic (first half) |
//! | Hendecasyllable | 11        | Phalaecian, Alcaic, Sapphic               |

pub mod hendeca;
pub mod hexameter;
pub mod pentameter;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use hendeca::HendecaShape;
pub use hexameter::HexameterShape;
pub use pentameter::PentameterShape;

use crate::model::{Foot, VerseType, Weight};
use crate::Result;

/// A meter together with the shape its classifier chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meter {
    Hexameter(HexameterShape),
    Pentameter(PentameterShape),
    Hendeca(HendecaShape),
}

impl Meter {
    pub fn verse_type(self) -> VerseType {
        match self {
            Meter::Hexameter(_) => VerseType::Hexameter,
            Meter::Pentameter(_) => VerseType::Pentameter,
            Meter::Hendeca(_) => VerseType::Hendecasyllable,
        }
    }

    /// Propagate weights into `flat` and assign the feet.
    ///
    /// Hendecasyllables have no feet; their template is written into `flat`
    /// directly and the returned list is empty.
    pub fn scan(self, flat: &mut [Weight]) -> Result<Vec<Foot>> {
        match self {
            Meter::Hexameter(shape) => {
                hexameter::preparse(flat)?;
                hexameter::scan(shape, flat)
            }
            Meter::Pentameter(shape) => {
                pentameter::preparse(flat)?;
                pentameter::scan(shape, flat)
            }
            Meter::Hendeca(shape) => {
                hendeca::preparse(shape, flat)?;
                Ok(Vec::new())
            }
        }
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meter::Hexameter(shape) => write!(f, "{shape:?} hexameter"),
            Meter::Pentameter(shape) => write!(f, "{shape:?} pentameter"),
            Meter::Hendeca(shape) => write!(f, "{shape:?} hendecasyllable"),
        }
    }
}

/// One registry row: the verse type and its classifier.
#[derive(Debug, Clone, Copy)]
pub struct MeterDef {
    pub verse_type: VerseType,
    pub classify: fn(&[Weight]) -> Result<Meter>,
}

fn classify_hexameter(flat: &[Weight]) -> Result<Meter> {
    hexameter::classify(flat).map(Meter::Hexameter)
}

fn classify_pentameter(flat: &[Weight]) -> Result<Meter> {
    pentameter::classify(flat).map(Meter::Pentameter)
}

fn classify_hendeca(flat: &[Weight]) -> Result<Meter> {
    hendeca::classify(flat).map(Meter::Hendeca)
}

/// The meters a scanner may try, in trial order.
#[derive(Debug, Clone)]
pub struct Registry {
    meters: Vec<MeterDef>,
}

impl Registry {
    /// Hexameter, pentameter, hendecasyllable.
    pub fn standard() -> Self {
        Self {
            meters: vec![
                MeterDef { verse_type: VerseType::Hexameter, classify: classify_hexameter },
                MeterDef { verse_type: VerseType::Pentameter, classify: classify_pentameter },
                MeterDef { verse_type: VerseType::Hendecasyllable, classify: classify_hendeca },
            ],
        }
    }

    pub fn meters(&self) -> &[MeterDef] {
        &self.meters
    }

    /// Meters to try for `hint`. An empty hint, or one naming
    /// `VerseType::Unknown`, means every registered meter.
    pub fn candidates(&self, hint: &[VerseType]) -> Vec<&MeterDef> {
        let all = hint.is_empty() || hint.contains(&VerseType::Unknown);
        self.meters
            .iter()
            .filter(|def| all || hint.contains(&def.verse_type))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn types(defs: Vec<&MeterDef>) -> Vec<VerseType> {
        defs.into_iter().map(|d| d.verse_type).collect()
    }

    #[test]
    fn test_candidates() {
        let registry = Registry::standard();
        let all = [VerseType::Hexameter, VerseType::Pentameter, VerseType::Hendecasyllable];
        assert_eq!(types(registry.candidates(&[])), all);
        assert_eq!(types(registry.candidates(&[VerseType::Unknown])), all);
        assert_eq!(
            types(registry.candidates(&[VerseType::Pentameter, VerseType::Hexameter])),
            [VerseType::Hexameter, VerseType::Pentameter]
        );
        assert_eq!(
            types(registry.candidates(&[VerseType::Hendecasyllable])),
            [VerseType::Hendecasyllable]
        );
    }

    #[test]
    fn test_classifiers_wrap_shapes() {
        let registry = Registry::standard();
        let flat = [Weight::Anceps; 17];
        let meter = (registry.meters()[0].classify)(&flat).unwrap();
        assert_eq!(meter, Meter::Hexameter(HexameterShape::Dactylic));
        assert_eq!(meter.verse_type(), VerseType::Hexameter);
        assert_eq!(meter.to_string(), "Dactylic hexameter");
        assert!((registry.meters()[1].classify)(&flat).is_err());
    }

    #[test]
    fn test_hendeca_scan_has_no_feet() {
        let mut flat = [Weight::Anceps; 11];
        let feet = Meter::Hendeca(HendecaShape::Sapphic).scan(&mut flat).unwrap();
        assert!(feet.is_empty());
        assert_eq!(flat[0], Weight::Heavy);
        assert_eq!(flat[5], Weight::Light);
    }
}
