//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::model::VerseType;
use crate::Result;

// ============================================================================
// Scanner Configuration
// ============================================================================

/// How a [`Scanner`](crate::Scanner) picks meters and whether it persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Meters tried when a call gives no hint. Empty means all registered.
    pub meters: Vec<VerseType>,

    /// Hand scanned verses with a non-zero id to the bridge.
    pub persist: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { meters: Vec::new(), persist: true }
    }
}

impl ScannerConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ScannerConfig::default();
        assert!(config.meters.is_empty());
        assert!(config.persist);
        assert_eq!(ScannerConfig::from_json("{}").unwrap(), config);
    }

    #[test]
    fn test_from_json() {
        let config =
            ScannerConfig::from_json(r#"{"meters": ["Hexameter", "Pentameter"], "persist": false}"#)
                .unwrap();
        assert_eq!(config.meters, [VerseType::Hexameter, VerseType::Pentameter]);
        assert!(!config.persist);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(ScannerConfig::from_json(r#"{"meters": ["Sonnet"]}"#), Err(Error::Json(_))));
    }
}
