//! Lexis: lexical retrieval for short natural-language requests
//!
//! Three pieces, used together or on their own:
//!
//! - [`Normalizer`] turns free text into canonical tokens: it lowercases,
//!   strips everything but ASCII letters and spaces, drops stop words,
//!   stems, and folds synonyms.
//! - [`stem`] is the English suffix-stripping stemmer the normalizer uses.
//! - [`Ranker`] scores a fixed corpus of normalized documents against query
//!   tokens with BM25 plus query-term-frequency weighting.
//!
//! # Example
//!
//! ```
//! use lexis::{Normalizer, Ranker};
//!
//! let normalizer = Normalizer::default();
//! let corpus = vec![
//!     normalizer.document("Insert a table into the worksheet", "table"),
//!     normalizer.document("Fetch the values of a range", "range"),
//! ];
//! let ranker = Ranker::new(corpus, None)?;
//!
//! let best = ranker.search_text(&normalizer, "how do I get range values?", Some(1));
//! assert_eq!(*best[0].metadata(), "range");
//! # Ok::<(), lexis::LexisError>(())
//! ```

pub use lexis_core::{
    BM25Config, Document, LexisConfig, LexisError, LexisResult, NormalizerConfig, RankedResult,
};
pub use lexis_engine::search::{normalize, normalize_joined, stem, Normalizer, Ranker};

/// Lower-level building blocks: corpus statistics, stop words, synonyms
pub mod search {
    pub use lexis_engine::search::{
        fold_synonym, is_stop_word, stemmer, stopwords, synonyms, word_count, words, CorpusIndex,
        PostingEntry, PostingList,
    };
}
