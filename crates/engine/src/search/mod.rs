//! Search module for lexical retrieval
//!
//! This module contains:
//! - `normalizer`: Text normalization pipeline (filter, stop words, stem, synonyms)
//! - `stemmer`: English suffix-stripping stemmer
//! - `stopwords`: Compiled-in stop-word list
//! - `synonyms`: Compiled-in synonym table on stems
//! - `index`: Corpus statistics (word runs, posting lists, lengths)
//! - `ranker`: BM25 ranking with query-term-frequency weighting

pub mod index;
pub mod normalizer;
mod ranker;
pub mod stemmer;
pub mod stopwords;
pub mod synonyms;

pub use index::{word_count, words, CorpusIndex, PostingEntry, PostingList};
pub use normalizer::{normalize, normalize_joined, Normalizer};
pub use ranker::Ranker;
pub use stemmer::stem;
pub use stopwords::is_stop_word;
pub use synonyms::fold_synonym;
