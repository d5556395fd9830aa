//! End-to-end integration tests for the full scansion pipeline.
//!
//! Each test exercises: tokenize -> split -> weigh -> word contact ->
//! classify -> scan -> save structure, through `Scanner` and `elisio::create`.

use elisio::{
    DummyBridge, Error, Foot, Meter, Scanner, ScannerConfig, VerseForm, VerseType, Weight,
};
use elisio::meter::{HendecaShape, HexameterShape, PentameterShape};
use pretty_assertions::assert_eq;

use Foot::{Dactylus as D, Macron as M, Spondaeus as S};
use Weight::{Anceps as A, Heavy as H, Light as L, None as N};

const AENEID_1_1: &str = "Arma virumque cano, Troiae qui primus ab oris";
const TRES_SUMUS: &str = "tres sumus; hoc illi praetulit auctor opus";
const DOCTIS: &str = "doctis, Iuppiter, et laboriosis.";

// ============================================================================
// 1. Aeneid 1.1 scans as a balanced hexameter
// ============================================================================

#[test]
fn test_aeneid_hexameter() {
    let verse = Scanner::new().create(AENEID_1_1, 0, &[VerseType::Hexameter]).unwrap();

    assert_eq!(verse.meter(), Meter::Hexameter(HexameterShape::Balanced));
    assert_eq!(verse.feet(), [D, D, S, S, D, S]);
    assert_eq!(verse.structure(), "883383");
    assert_eq!(verse.flat_list().len(), 15);
}

// ============================================================================
// 2. Every syllable carries its resolved weight afterwards
// ============================================================================

#[test]
fn test_weights_are_pushed_back_onto_syllables() {
    let verse = Scanner::new().scan(AENEID_1_1).unwrap();
    let weights: Vec<Weight> = verse
        .words()
        .iter()
        .flat_map(|w| w.syllables())
        .filter_map(|s| s.weight())
        .collect();
    assert_eq!(weights, [H, L, L, H, L, L, H, H, H, H, H, L, L, H, H]);
}

// ============================================================================
// 3. Stress accents and Zeleny score
// ============================================================================

#[test]
fn test_zeleny_score() {
    let verse = Scanner::new().scan(AENEID_1_1).unwrap();
    assert_eq!(verse.zeleny_score(), [4, 3, 3, 4, 2, 3, 1, 4]);
}

// ============================================================================
// 4. Pentameter and its fixed back half
// ============================================================================

#[test]
fn test_pentameter() {
    let verse = Scanner::new().create(TRES_SUMUS, 0, &[VerseType::Pentameter]).unwrap();
    assert_eq!(verse.meter(), Meter::Pentameter(PentameterShape::Balanced));
    assert_eq!(verse.feet(), [D, S, M, D, D, M]);
    assert_eq!(verse.structure(), "831881");
}

#[test]
fn test_pentameter_back_half_violation() {
    let error = Scanner::new()
        .create("tres sumus; hoc illi praetullit auctor opus", 0, &[VerseType::Pentameter])
        .unwrap_err();
    assert!(error.is_verse_error());
    let Error::Unscannable { failures } = error else {
        panic!("expected the combined failure");
    };
    assert!(matches!(failures.as_slice(), [Error::Pentameter(_)]));
}

// ============================================================================
// 5. Elegiac distich: the pentameter line falls through the hexameter
// ============================================================================

#[test]
fn test_distich_form_tries_both_meters() {
    let scanner = Scanner::new();
    let hint = VerseForm::ElegiacDistichon.verse_types();
    assert_eq!(scanner.create(AENEID_1_1, 0, hint).unwrap().verse_type(), VerseType::Hexameter);
    assert_eq!(scanner.create(TRES_SUMUS, 0, hint).unwrap().verse_type(), VerseType::Pentameter);
}

// ============================================================================
// 6. Hendecasyllable is found without a hint
// ============================================================================

#[test]
fn test_hendecasyllable_without_hint() {
    let verse = elisio::create(DOCTIS, 0, &DummyBridge, &[]).unwrap();
    assert_eq!(verse.meter(), Meter::Hendeca(HendecaShape::Phalaecian));
    assert!(verse.feet().is_empty());
    assert_eq!(verse.structure(), "");
    assert_eq!(verse.flat_list(), [H, H, H, L, L, H, L, H, L, H, H]);
}

// ============================================================================
// 7. Layers show elision and word contact
// ============================================================================

#[test]
fn test_layers() {
    let scanner = Scanner::new();
    assert_eq!(scanner.layer("multo ille").unwrap(), [vec![H, N], vec![H, A]]);
    assert_eq!(scanner.layer("multus ille").unwrap(), [vec![H, A], vec![H, A]]);
    assert_eq!(
        scanner.layer("hic accensa super iactatos aequore toto").unwrap(),
        [vec![A], vec![H, H, A], vec![A, H], vec![H, A, A], vec![H, A, A], vec![A, A]]
    );
}

// ============================================================================
// 8. Unreachable syllable counts fail classification
// ============================================================================

#[test]
fn test_too_short_for_every_meter() {
    let error = Scanner::new().scan("multo ille").unwrap_err();
    assert!(matches!(error, Error::VerseCreator(_)));
    assert!(error.is_verse_error());
}

#[test]
fn test_non_latin_letters_fail_early() {
    assert!(matches!(Scanner::new().scan("arma wirumque"), Err(Error::Sound(_))));
}

// ============================================================================
// 9. Configuration restricts the meters
// ============================================================================

#[test]
fn test_configured_meters() {
    let config = ScannerConfig::from_json(r#"{"meters": ["Hendecasyllable"]}"#).unwrap();
    let scanner = Scanner::with_config(DummyBridge, config);
    assert!(scanner.scan(DOCTIS).is_ok());
    assert!(matches!(scanner.scan(AENEID_1_1), Err(Error::VerseCreator(_))));
}
