//! Retrieval engine for lexis
//!
//! Everything lives under [`search`]:
//! - `Normalizer`: raw text to canonical tokens
//! - `stem`: the suffix-stripping stemmer behind it
//! - `Ranker`: BM25 scoring over a normalized corpus

pub mod search;

pub use search::{normalize, stem, Normalizer, Ranker};
