//! # elisio — Latin Verse Scansion
//!
//! Assigns a metrical weight to every syllable of a Latin verse and a foot
//! pattern to the verse as a whole.
//!
//! ## Design Principles
//!
//! 1. **Pipeline of pure layers**: letters → sounds → syllables → words →
//!    flattened weights → feet. Only the bridge touches the outside world.
//! 2. **Trait-first collaborator**: `Bridge` is the contract for irregular
//!    lexemes, observed weights and persistence.
//! 3. **Meters are data**: an explicit `Registry` of classifier functions,
//!    tried in order until one scans.
//! 4. **No partial results**: a verse is fully resolved or rejected.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elisio::{Scanner, VerseType};
//!
//! # fn example() -> elisio::Result<()> {
//! let scanner = Scanner::new();
//! let verse = scanner.create(
//!     "Arma virumque cano, Troiae qui primus ab oris",
//!     0,
//!     &[VerseType::Hexameter],
//! )?;
//! assert_eq!(verse.structure(), "883383");
//! # Ok(())
//! # }
//! ```
//!
//! ## Meters
//!
//! | Meter | Syllables | Notes |
//! |-------|-----------|-------|
//! | Hexameter | 12-17 | Five shapes by dactyl count |
//! | Pentameter | 12-14 | Fixed back half |
//! | Hendecasyllable | 11 | Phalaecian, Alcaic, Sapphic templates |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod phonology;
pub mod word;
pub mod meter;
pub mod verse;
pub mod bridge;
pub mod config;
pub mod batch;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Foot, VerseForm, VerseType, Weight};
pub use phonology::{Sound, Syllable};
pub use word::Word;
pub use meter::{Meter, Registry};
pub use verse::{Verse, VersePreprocessor, VerseSummary};
pub use bridge::{Bridge, DummyBridge, LocalDictionaryBridge};
pub use config::ScannerConfig;

// ============================================================================
// Top-level Scanner handle
// ============================================================================

/// The primary entry point. A `Scanner` owns a bridge, the meter registry
/// and a configuration, and turns text into scanned verses.
pub struct Scanner<B: Bridge = DummyBridge> {
    bridge: B,
    registry: Registry,
    config: ScannerConfig,
}

impl Scanner<DummyBridge> {
    /// A scanner with no dictionary and no persistence.
    pub fn new() -> Self {
        Self::with_bridge(DummyBridge)
    }
}

impl Default for Scanner<DummyBridge> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bridge> Scanner<B> {
    pub fn with_bridge(bridge: B) -> Self {
        Self::with_config(bridge, ScannerConfig::default())
    }

    pub fn with_config(bridge: B, config: ScannerConfig) -> Self {
        Self { bridge, registry: Registry::standard(), config }
    }

    /// Scan `text`, trying the meters in `hint` (or the configured meters
    /// when `hint` is empty). A non-zero `verse_id` persists the result
    /// through the bridge unless persistence is switched off.
    pub fn create(&self, text: &str, verse_id: u64, hint: &[VerseType]) -> Result<Verse> {
        let hint = if hint.is_empty() { self.config.meters.as_slice() } else { hint };
        VersePreprocessor::new(text, &self.bridge, &self.registry, hint)
            .create_verse(verse_id, self.config.persist)
    }

    /// Scan with the configured meters and without persisting.
    pub fn scan(&self, text: &str) -> Result<Verse> {
        self.create(text, 0, &[])
    }

    /// Per-word syllable weights after word contact, before any meter.
    pub fn layer(&self, text: &str) -> Result<Vec<Vec<Weight>>> {
        VersePreprocessor::new(text, &self.bridge, &self.registry, &[]).layer()
    }

    /// Access the underlying bridge.
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }
}

/// Scan one verse against the standard registry.
///
/// An empty `hint` tries every meter. A non-zero `verse_id` hands the
/// result to `bridge` for persistence.
pub fn create<B: Bridge>(text: &str, verse_id: u64, bridge: &B, hint: &[VerseType]) -> Result<Verse> {
    VersePreprocessor::new(text, bridge, &Registry::standard(), hint).create_verse(verse_id, true)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Sound error: {0}")]
    Sound(String),

    #[error("Syllable error: {0}")]
    Syllable(String),

    #[error("Word error: {0}")]
    Word(String),

    #[error("Verse error: {0}")]
    Verse(String),

    #[error("Hexameter error: {0}")]
    Hexameter(String),

    #[error("Pentameter error: {0}")]
    Pentameter(String),

    #[error("Hendecasyllable error: {0}")]
    Hendeca(String),

    #[error("Verse creator error: {0}")]
    VerseCreator(String),

    #[error("Illegal foot: {0:?} has no structure")]
    IllegalFoot(Foot),

    #[error("Parsing did not succeed: {} candidate failure(s)", .failures.len())]
    Unscannable { failures: Vec<Error> },

    #[error("Bridge error: {0}")]
    Bridge(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this is a scansion failure of the verse family rather than
    /// a problem with the text or a collaborator.
    pub fn is_verse_error(&self) -> bool {
        matches!(
            self,
            Error::Verse(_)
                | Error::Hexameter(_)
                | Error::Pentameter(_)
                | Error::Hendeca(_)
                | Error::VerseCreator(_)
                | Error::Unscannable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
