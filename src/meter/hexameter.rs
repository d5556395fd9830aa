//! Dactylic hexameter.
//!
//! Six feet. The fifth is a dactyl unless the tail shows a spondee; the
//! sixth is decided by the final syllable. The first four feet are the hard
//! part, and the syllable count fixes how many of them are dactyls:
//!
//! | Shape            | Dactyls in feet 1-4 |
//! |------------------|---------------------|
//! | Spondaic         | 0                   |
//! | SpondaicDominant | 1                   |
//! | Balanced         | 2                   |
//! | DactylicDominant | 3                   |
//! | Dactylic         | 4                   |
//!
//! The cascades below are decision tables tuned on the corpus. Position
//! indices and branch order are significant.

use serde::{Deserialize, Serialize};

use crate::model::{Foot, Weight};
use crate::{Error, Result};

pub const MIN_SYLLABLES: usize = 12;
pub const MAX_SYLLABLES: usize = 17;

/// Distribution of dactyls over the first four feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexameterShape {
    Spondaic,
    SpondaicDominant,
    Balanced,
    DactylicDominant,
    Dactylic,
}

impl HexameterShape {
    const ORDERED: [HexameterShape; 5] = [
        HexameterShape::Spondaic,
        HexameterShape::SpondaicDominant,
        HexameterShape::Balanced,
        HexameterShape::DactylicDominant,
        HexameterShape::Dactylic,
    ];
}

/// Whether the fifth foot is a spondee, judged from the tail.
pub fn has_spondaic_fifth_foot(flat: &[Weight]) -> bool {
    let from_end = |n: usize| flat.len().checked_sub(n).map(|i| flat[i]);
    from_end(3) == Some(Weight::Heavy)
        || from_end(4) == Some(Weight::Heavy)
        || from_end(5) == Some(Weight::Light)
}

/// Pick the shape from the syllable count.
pub fn classify(flat: &[Weight]) -> Result<HexameterShape> {
    let size = flat.len();
    if size > MAX_SYLLABLES {
        return Err(Error::VerseCreator("too many syllables in first pass".into()));
    }
    if size < MIN_SYLLABLES {
        return Err(Error::VerseCreator("too few syllables in first pass".into()));
    }
    let (mut min, mut max) = (MIN_SYLLABLES, MAX_SYLLABLES);
    if has_spondaic_fifth_foot(flat) {
        max -= 1;
    } else {
        min += 1;
    }
    if size > max {
        return Err(Error::VerseCreator("too many syllables in second pass".into()));
    }
    if size < min {
        return Err(Error::VerseCreator("too few syllables in second pass".into()));
    }
    HexameterShape::ORDERED.get(size - min).copied().ok_or_else(|| {
        Error::VerseCreator(format!("{size} is an illegal number of syllables in a hexameter"))
    })
}

/// Propagate weights that follow from their neighbours: a syllable between
/// two HEAVY ones is HEAVY, and two LIGHT ones are framed by HEAVY ones.
///
/// The first read past the end stops propagation.
pub fn preparse(flat: &mut [Weight]) -> Result<()> {
    for i in 0..flat.len() {
        if flat[i] == Weight::Heavy {
            let Some(&after) = flat.get(i + 2) else { break };
            if after == Weight::Heavy {
                if flat[i + 1] == Weight::Light {
                    return Err(Error::Hexameter(format!(
                        "cannot assign HEAVY to LIGHT syllable #{}",
                        i + 1
                    )));
                }
                flat[i + 1] = Weight::Heavy;
            }
        } else if flat[i] == Weight::Light {
            let Some(&next) = flat.get(i + 1) else { break };
            if next == Weight::Light {
                let Some(slot) = flat.get_mut(i + 2) else { break };
                *slot = Weight::Heavy;
                if i > 0 {
                    flat[i - 1] = Weight::Heavy;
                }
            }
        }
    }
    Ok(())
}

/// Assign all six feet.
pub fn scan(shape: HexameterShape, flat: &[Weight]) -> Result<Vec<Foot>> {
    if !(MIN_SYLLABLES..=MAX_SYLLABLES).contains(&flat.len()) {
        return Err(Error::Hexameter(format!("cannot scan {} syllables", flat.len())));
    }
    let mut scansion = Scansion { flat, feet: [Foot::Unknown; 6] };
    scansion.feet[4] = if has_spondaic_fifth_foot(flat) { Foot::Spondaeus } else { Foot::Dactylus };
    scansion.feet[5] = match flat.last() {
        Some(Weight::Heavy) => Foot::Spondaeus,
        Some(Weight::Light) => Foot::Trochaeus,
        _ => Foot::BinaryAnceps,
    };
    match shape {
        HexameterShape::Spondaic => scansion.feet[..4].fill(Foot::Spondaeus),
        HexameterShape::Dactylic => scansion.feet[..4].fill(Foot::Dactylus),
        HexameterShape::SpondaicDominant => scansion.single_dactyl()?,
        HexameterShape::DactylicDominant => scansion.single_spondee()?,
        HexameterShape::Balanced => scansion.balanced()?,
    }
    Ok(scansion.feet.to_vec())
}

struct Scansion<'a> {
    flat: &'a [Weight],
    feet: [Foot; 6],
}

impl Scansion<'_> {
    fn heavy(&self, i: usize) -> bool {
        self.flat[i] == Weight::Heavy
    }

    fn light(&self, i: usize) -> bool {
        self.flat[i] == Weight::Light
    }

    fn count(&self, foot: Foot) -> usize {
        self.feet[..4].iter().filter(|&&f| f == foot).count()
    }

    /// Every free foot that is not `keep` becomes `other`.
    fn fill_other_feet(&mut self, keep: Foot, other: Foot) {
        for foot in &mut self.feet[..4] {
            if *foot != keep {
                *foot = other;
            }
        }
    }

    fn set(&mut self, feet: [Foot; 4]) {
        self.feet[..4].copy_from_slice(&feet);
    }

    // ========================================================================
    // One dactyl
    // ========================================================================

    fn single_dactyl(&mut self) -> Result<()> {
        if let Some(i) = (1..9).find(|&i| self.light(i)) {
            self.feet[(i - 1) / 2] = Foot::Dactylus;
            self.fill_other_feet(Foot::Dactylus, Foot::Spondaeus);
            return Ok(());
        }
        for i in 1..9 {
            if self.heavy(i) {
                self.feet[(i - 1) / 2] = Foot::Spondaeus;
            }
        }
        if self.count(Foot::Spondaeus) == 3 {
            self.fill_other_feet(Foot::Spondaeus, Foot::Dactylus);
            Ok(())
        } else {
            Err(Error::Hexameter(
                "cannot determine full foot structure of single dactylus verse".into(),
            ))
        }
    }

    // ========================================================================
    // One spondee
    // ========================================================================

    fn single_spondee(&mut self) -> Result<()> {
        if self.heavy(1) || self.heavy(2) || self.light(3) {
            self.feet[0] = Foot::Spondaeus;
        } else if self.heavy(4) {
            self.feet[1] = Foot::Spondaeus;
        } else if self.heavy(7) {
            self.feet[2] = Foot::Spondaeus;
        } else if self.heavy(9) || self.heavy(10) || self.light(8) {
            self.feet[3] = Foot::Spondaeus;
        }
        if self.count(Foot::Spondaeus) > 0 {
            self.fill_other_feet(Foot::Spondaeus, Foot::Dactylus);
            return Ok(());
        }

        if self.light(1) || self.light(2) || self.heavy(3) {
            self.feet[0] = Foot::Dactylus;
        }
        if self.light(4) {
            self.feet[1] = Foot::Dactylus;
        }
        if self.light(7) {
            self.feet[2] = Foot::Dactylus;
        }
        if self.light(9) || self.light(10) || self.heavy(8) {
            self.feet[3] = Foot::Dactylus;
        }
        if self.light(5) || self.heavy(6) {
            self.feet[0] = Foot::Dactylus;
            self.feet[1] = Foot::Dactylus;
        }
        if self.heavy(5) || self.light(6) {
            self.feet[2] = Foot::Dactylus;
            self.feet[3] = Foot::Dactylus;
        }

        if self.count(Foot::Dactylus) == 3 {
            self.fill_other_feet(Foot::Dactylus, Foot::Spondaeus);
            Ok(())
        } else {
            Err(Error::Hexameter(
                "cannot determine full foot structure of single spondaeus verse".into(),
            ))
        }
    }

    // ========================================================================
    // Two and two
    // ========================================================================

    fn balanced(&mut self) -> Result<()> {
        use Foot::{Dactylus as D, Spondaeus as S};

        if self.heavy(3) && self.heavy(5) && self.heavy(7) {
            self.set([D, S, S, D]);
            return Ok(());
        }
        self.balanced_basic_checks();
        if self.light(5) {
            let f = self.feet;
            if f[0] == S || f[1] == S || f[2] == D || f[3] == D {
                self.set([S, S, D, D]);
            } else if f[0] == D || f[1] == D || f[2] == S || f[3] == S {
                self.set([D, D, S, S]);
            }
        }
        if self.settle_balanced()? {
            return Ok(());
        }

        let (dactyls, spondees) = (self.count(D), self.count(S));
        if dactyls == 1 && spondees == 1 {
            self.reasonable_guesses();
        } else if dactyls + spondees == 1 {
            self.last_resort();
        }
        if self.settle_balanced()? {
            Ok(())
        } else {
            Err(Error::Hexameter("cannot determine full foot structure of balanced verse".into()))
        }
    }

    fn balanced_basic_checks(&mut self) {
        use Foot::{Dactylus as D, Spondaeus as S};

        if self.heavy(1) || self.heavy(2) {
            self.feet[0] = S;
        } else if self.light(1) || self.light(2) {
            self.feet[0] = D;
        }
        if self.light(3) {
            self.feet[0] = S;
            self.feet[1] = D;
        }
        if self.light(4) {
            self.feet[1] = D;
        } else if self.heavy(4) {
            self.feet[1] = S;
        }
        if self.light(6) {
            self.feet[2] = D;
        } else if self.heavy(6) {
            self.feet[2] = S;
        }
        if self.light(7) {
            self.feet[2] = D;
            self.feet[3] = S;
        }
        if self.heavy(8) || self.heavy(9) {
            self.feet[3] = S;
        } else if self.light(8) || self.light(9) {
            self.feet[3] = D;
        }
    }

    /// Complete the free feet once two of one kind are known. More than two
    /// of either kind contradicts the shape.
    fn settle_balanced(&mut self) -> Result<bool> {
        let (dactyls, spondees) = (self.count(Foot::Dactylus), self.count(Foot::Spondaeus));
        if dactyls > 2 || spondees > 2 {
            return Err(Error::Hexameter(format!(
                "{spondees} spondaei and {dactyls} dactyli in balanced verse"
            )));
        }
        if spondees == 2 && dactyls == 2 {
            return Ok(true);
        }
        if spondees == 2 {
            self.fill_other_feet(Foot::Spondaeus, Foot::Dactylus);
            return Ok(true);
        }
        if dactyls == 2 {
            self.fill_other_feet(Foot::Dactylus, Foot::Spondaeus);
            return Ok(true);
        }
        Ok(false)
    }

    /// One dactyl and one spondee are known.
    fn reasonable_guesses(&mut self) {
        use Foot::{Dactylus as D, Spondaeus as S};
        let f = self.feet;

        if (f[2] == S && f[3] == D) || (f[2] == D && f[3] == S) {
            if self.heavy(3) || self.heavy(4) || self.light(1) || self.light(2) {
                self.feet[0] = D;
                self.feet[1] = S;
            } else if self.heavy(1) || self.heavy(2) || self.light(3) || self.light(4) {
                self.feet[0] = S;
                self.feet[1] = D;
            }
        } else if (f[0] == D && f[1] == S) || (f[0] == S && f[1] == D) {
            if self.heavy(6) || self.heavy(7) || self.light(8) || self.light(9) {
                self.feet[2] = S;
                self.feet[3] = D;
            } else if self.heavy(8) || self.heavy(9) || self.light(6) || self.light(7) {
                self.feet[2] = D;
                self.feet[3] = S;
            }
        } else if f[0] == S && f[2] == D {
            if self.heavy(3) || self.heavy(7) {
                self.feet[1] = S;
                self.feet[3] = D;
            } else if self.heavy(5) {
                self.feet[1] = D;
                self.feet[3] = S;
            }
        } else if f[0] == S && f[3] == D {
            if self.heavy(3) {
                self.feet[1] = S;
                self.feet[2] = D;
            } else if self.heavy(5) {
                self.feet[1] = D;
                self.feet[2] = S;
            }
        } else if f[1] == S && f[2] == D {
            if self.heavy(7) {
                self.feet[0] = S;
                self.feet[3] = D;
            } else if self.heavy(5) {
                self.feet[0] = D;
                self.feet[3] = S;
            }
        } else if f[1] == S && f[3] == D && self.heavy(5) {
            self.feet[0] = D;
            self.feet[2] = S;
        } else {
            self.continue_search();
        }
    }

    fn continue_search(&mut self) {
        use Foot::{Dactylus as D, Spondaeus as S};
        let f = self.feet;

        if f[0] == D && f[2] == S {
            if self.heavy(5) {
                self.feet[1] = S;
                self.feet[3] = D;
            }
        } else if f[0] == D && f[3] == S {
            if self.heavy(7) {
                self.feet[1] = D;
                self.feet[2] = S;
            } else if self.heavy(5) {
                self.feet[1] = S;
                self.feet[2] = D;
            }
        } else if f[1] == D && f[2] == S {
            if self.heavy(3) {
                self.feet[0] = D;
                self.feet[3] = S;
            } else if self.heavy(5) {
                self.feet[0] = S;
                self.feet[3] = D;
            }
        } else if f[1] == D && f[3] == S {
            if self.heavy(3) || self.heavy(7) {
                self.feet[0] = D;
                self.feet[2] = S;
            } else if self.heavy(5) {
                self.feet[0] = S;
                self.feet[2] = D;
            }
        }
    }

    /// Only one foot is known.
    fn last_resort(&mut self) {
        use Foot::{Dactylus as D, Spondaeus as S};
        let f = self.feet;

        if (f[0] == S && self.heavy(3)) || (f[2] == D && self.heavy(7)) {
            self.set([S, S, D, D]);
        } else if (f[1] == D && self.heavy(3)) || (f[3] == S && self.heavy(7)) {
            self.set([D, D, S, S]);
        }
    }
}
