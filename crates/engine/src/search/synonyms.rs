//! Synonym folding on stems
//!
//! Maps the stems of common CRUD verbs onto one canonical stem so that
//! "fetch the rows" and "get the rows" score alike. Keys and values are
//! stems, so the table applies after stemming.

use super::normalizer::default_normalizer;

/// Compiled-in `(stem, canonical stem)` pairs.
pub const SYNONYMS: &[(&str, &str)] = &[
    // fetch, retrieve -> get
    ("fetch", "get"),
    ("retriev", "get"),
    // insert, create -> add
    ("insert", "add"),
    ("creat", "add"),
    // update, modify -> edit
    ("updat", "edit"),
    ("modifi", "edit"),
    // remove -> delete
    ("remov", "delet"),
];

/// Fold a stem through the default normalizer's synonym table.
pub fn fold_synonym(stem: &str) -> &str {
    default_normalizer().canonical_stem(stem)
}
