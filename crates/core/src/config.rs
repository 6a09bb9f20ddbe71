//! Ranking and normalization configuration
//!
//! All structs deserialize from TOML with every field optional:
//!
//! ```toml
//! [bm25]
//! k1 = 1.5
//! b = 0.6
//!
//! [normalizer]
//! extra_stop_words = ["please", "sample"]
//!
//! [normalizer.synonyms]
//! obtain = "get"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, LexisResult};

// ============================================================================
// BM25Config
// ============================================================================

/// Parameters of the saturation-based relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BM25Config {
    /// Length normalization strength: 0 = none, 1 = full.
    pub b: f64,
    /// Term-frequency saturation.
    pub k1: f64,
    /// Frequency floor added to the saturation numerator.
    pub d: f64,
    /// Query-term-frequency weighting. 0 means repeated query terms add nothing.
    pub k3: f64,
}

impl Default for BM25Config {
    fn default() -> Self {
        Self {
            b: 0.75,
            k1: 1.2,
            d: 0.0,
            k3: 1.0,
        }
    }
}

impl BM25Config {
    /// Check every parameter against its domain.
    pub fn validate(&self) -> LexisResult<()> {
        let fields = [("b", self.b), ("k1", self.k1), ("d", self.d), ("k3", self.k3)];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LexisError::InvalidConfig {
                    field,
                    reason: format!("must be finite, got {}", value),
                });
            }
            if value < 0.0 {
                return Err(LexisError::InvalidConfig {
                    field,
                    reason: format!("must be non-negative, got {}", value),
                });
            }
        }
        if self.b > 1.0 {
            return Err(LexisError::InvalidConfig {
                field: "b",
                reason: format!("must be within [0, 1], got {}", self.b),
            });
        }
        Ok(())
    }
}

// ============================================================================
// NormalizerConfig
// ============================================================================

/// Stop-word and synonym customisation for the normalizer.
///
/// Synonym entries are written as plain words (`fetch = "get"`); the
/// normalizer stems both sides when it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Start from the compiled-in English stop-word set
    pub use_default_stop_words: bool,
    /// Additional stop words (matched after lowercasing, before stemming)
    pub extra_stop_words: Vec<String>,
    /// Start from the compiled-in synonym table
    pub use_default_synonyms: bool,
    /// Additional synonym folds, word -> canonical word
    pub synonyms: BTreeMap<String, String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            use_default_stop_words: true,
            extra_stop_words: Vec::new(),
            use_default_synonyms: true,
            synonyms: BTreeMap::new(),
        }
    }
}

// ============================================================================
// LexisConfig
// ============================================================================

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexisConfig {
    /// Scoring parameters
    pub bm25: BM25Config,
    /// Text pipeline customisation
    pub normalizer: NormalizerConfig,
}

impl LexisConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> LexisResult<Self> {
        let config: LexisConfig = toml::from_str(text)?;
        config.bm25.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> LexisResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: "lexis::config",
            path = %path.display(),
            k1 = config.bm25.k1,
            b = config.bm25.b,
            extra_stop_words = config.normalizer.extra_stop_words.len(),
            synonyms = config.normalizer.synonyms.len(),
            "Loaded config"
        );
        Ok(config)
    }
}
