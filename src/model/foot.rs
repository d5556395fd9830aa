//! Metrical feet.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Weight;
use crate::{Error, Result};

use super::weight::Weight::{Anceps, Heavy, Light};

/// A fixed short sequence of syllable weights.
///
/// The discriminants are the digits used in a verse's structure string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foot {
    Unknown = 0,
    Macron = 1,
    Breve = 2,
    Spondaeus = 3,
    Trochaeus = 4,
    BinaryAnceps = 5,
    Iambus = 6,
    Pyrrhicus = 7,
    Dactylus = 8,
}

impl Foot {
    /// The weight template of this foot. `Unknown` has none.
    pub fn structure(self) -> Result<&'static [Weight]> {
        Ok(match self {
            Foot::Dactylus => &[Heavy, Light, Light],
            Foot::Spondaeus => &[Heavy, Heavy],
            Foot::Trochaeus => &[Heavy, Light],
            Foot::Iambus => &[Light, Heavy],
            Foot::Pyrrhicus => &[Light, Light],
            Foot::BinaryAnceps => &[Heavy, Anceps],
            Foot::Macron => &[Heavy],
            Foot::Breve => &[Light],
            Foot::Unknown => return Err(Error::IllegalFoot(self)),
        })
    }

    /// Number of syllables this foot spans.
    pub fn length(self) -> Result<usize> {
        Ok(self.structure()?.len())
    }

    pub fn code(self) -> char {
        char::from(b'0' + self as u8)
    }
}

impl fmt::Display for Foot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
