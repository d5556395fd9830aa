//! Verse types and poem forms.

use serde::{Deserialize, Serialize};

/// The meter a single line may be scanned as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerseType {
    /// Not known in advance: every registered meter is a candidate.
    Unknown,
    Hexameter,
    Pentameter,
    Hendecasyllable,
}

/// The form of a whole poem, which restricts the meters of its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerseForm {
    Unknown,
    Hexametric,
    ElegiacDistichon,
    Hendecasyllabus,
}

impl VerseForm {
    /// Candidate meters for lines of this form. Empty means "try all".
    pub fn verse_types(self) -> &'static [VerseType] {
        match self {
            VerseForm::Unknown => &[],
            VerseForm::Hexametric => &[VerseType::Hexameter],
            VerseForm::ElegiacDistichon => &[VerseType::Hexameter, VerseType::Pentameter],
            VerseForm::Hendecasyllabus => &[VerseType::Hendecasyllable],
        }
    }
}
