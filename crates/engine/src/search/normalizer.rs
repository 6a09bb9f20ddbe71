//! Text normalizer for retrieval
//!
//! Pipeline: lowercase → keep ASCII letters and spaces → split on spaces
//!           → remove stop words → stem → fold synonyms
//!
//! The same pipeline runs over documents and queries so that both sides of
//! a comparison land in the same vocabulary.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

use lexis_core::{Document, NormalizerConfig};

use super::stemmer;
use super::stopwords::STOPWORDS;
use super::synonyms::SYNONYMS;

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(Normalizer::default);

/// The shared normalizer built from the compiled-in tables.
pub(crate) fn default_normalizer() -> &'static Normalizer {
    &DEFAULT_NORMALIZER
}

// ============================================================================
// Normalizer
// ============================================================================

/// Turns free text into an ordered list of canonical tokens.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Lowercase stop words, matched before stemming
    stop_words: FxHashSet<String>,
    /// stem -> canonical stem
    synonyms: FxHashMap<String, String>,
}

impl Default for Normalizer {
    /// The compiled-in English stop words and synonym table.
    fn default() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }
}

impl Normalizer {
    /// Build a normalizer from configuration.
    ///
    /// Extra stop words are lowercased. Configured synonyms are plain words;
    /// both sides are stemmed here so lookups happen on stems. A configured
    /// entry overrides a compiled-in one with the same stem.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        let mut stop_words: FxHashSet<String> = FxHashSet::default();
        if config.use_default_stop_words {
            stop_words.extend(STOPWORDS.iter().map(|w| w.to_string()));
        }
        stop_words.extend(
            config
                .extra_stop_words
                .iter()
                .map(|w| w.to_ascii_lowercase()),
        );

        let mut synonyms: FxHashMap<String, String> = FxHashMap::default();
        if config.use_default_synonyms {
            synonyms.extend(
                SYNONYMS
                    .iter()
                    .map(|(from, to)| (from.to_string(), to.to_string())),
            );
        }
        for (from, to) in &config.synonyms {
            let from = stemmer::stem(from);
            let to = stemmer::stem(to);
            if from != to {
                synonyms.insert(from, to);
            }
        }

        tracing::debug!(
            target: "lexis::normalize",
            stop_words = stop_words.len(),
            synonyms = synonyms.len(),
            "Built normalizer"
        );

        Normalizer {
            stop_words,
            synonyms,
        }
    }

    /// Check if a lowercase token is a stop word for this normalizer.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Map a stem to its canonical stem, or return it unchanged.
    pub fn fold_synonym(&self, stem: String) -> String {
        match self.synonyms.get(&stem) {
            Some(canonical) => canonical.clone(),
            None => stem,
        }
    }

    /// Borrowing form of [`Normalizer::fold_synonym`].
    pub fn canonical_stem<'a>(&'a self, stem: &'a str) -> &'a str {
        self.synonyms.get(stem).map_or(stem, String::as_str)
    }

    /// Normalize text into tokens.
    ///
    /// Pipeline:
    /// 1. Lowercase ASCII letters
    /// 2. Delete every character that is not an ASCII letter or a space
    /// 3. Split on single spaces, dropping empty pieces
    /// 4. Remove stop words
    /// 5. Stem each token
    /// 6. Fold stems through the synonym table
    ///
    /// Order and duplicates are preserved. Never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_engine::search::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.normalize("This is a test"), vec!["test"]);
    /// assert_eq!(normalizer.normalize("Fetch the rows"), vec!["get", "row"]);
    /// ```
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let filtered: String = text
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        filtered
            .split(' ')
            .filter(|s| !s.is_empty())
            .filter(|s| !self.is_stop_word(s))
            .map(|s| self.fold_synonym(stemmer::stem(s)))
            .collect()
    }

    /// Normalize and join the tokens with single spaces.
    ///
    /// This is the form documents are stored in before ranking.
    pub fn normalize_joined(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }

    /// Build a ranker-ready document from raw text.
    pub fn document<M>(&self, raw: &str, metadata: M) -> Document<M> {
        Document::new(self.normalize_joined(raw), metadata)
    }
}

/// Normalize text with the compiled-in defaults.
///
/// # Example
///
/// ```
/// use lexis_engine::search::normalize;
///
/// assert!(normalize("").is_empty());
/// assert_eq!(normalize("Creating new worksheets"), vec!["add", "new", "worksheet"]);
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Normalize with the compiled-in defaults and join with single spaces.
pub fn normalize_joined(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize_joined(text)
}
