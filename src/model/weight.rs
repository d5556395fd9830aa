//! Syllable weight.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metrical weight of a single syllable.
///
/// The numeric codes (`0`..`3`) are the ones used in dictionary weight
/// strings and in persisted word occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    /// Elided: the syllable contributes nothing to the scansion.
    None,
    Light,
    Heavy,
    /// Metrically fixed position whose phonological weight is undetermined.
    Anceps,
}

impl Weight {
    pub fn code(self) -> char {
        match self {
            Weight::None => '0',
            Weight::Light => '1',
            Weight::Heavy => '2',
            Weight::Anceps => '3',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Weight::None),
            '1' => Some(Weight::Light),
            '2' => Some(Weight::Heavy),
            '3' => Some(Weight::Anceps),
            _ => None,
        }
    }

    /// `Light` or `Heavy`: a weight that settles the position on its own.
    pub fn is_decisive(self) -> bool {
        matches!(self, Weight::Light | Weight::Heavy)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Render a weight sequence as its digit string, e.g. `[Heavy, Light]` → `"21"`.
pub fn to_code_string(weights: &[Weight]) -> String {
    weights.iter().map(|w| w.code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        for weight in [Weight::None, Weight::Light, Weight::Heavy, Weight::Anceps] {
            assert_eq!(Weight::from_code(weight.code()), Some(weight));
        }
        assert_eq!(Weight::from_code('4'), None);
        assert_eq!(Weight::from_code('x'), None);
    }

    #[test]
    fn test_code_string() {
        let weights = [Weight::Heavy, Weight::Light, Weight::Anceps, Weight::None];
        assert_eq!(to_code_string(&weights), "2130");
    }

    #[test]
    fn test_decisive() {
        assert!(Weight::Light.is_decisive());
        assert!(Weight::Heavy.is_decisive());
        assert!(!Weight::Anceps.is_decisive());
        assert!(!Weight::None.is_decisive());
    }
}
