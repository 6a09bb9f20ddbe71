//! Shared fixtures for the retrieval suite

use lexis::{Document, Normalizer, Ranker};

/// The three-document corpus used throughout the ranking tests
pub const TEST_CORPUS: [&str; 3] = [
    "This is a test document",
    "Another test document",
    "Yet another test document",
];

/// Owned query terms from string slices
pub fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Un-normalized documents tagged with their corpus position
pub fn raw_corpus(texts: &[&str]) -> Vec<Document<usize>> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(*text, i))
        .collect()
}

/// Ranker over `TEST_CORPUS` with default parameters
pub fn test_ranker() -> Ranker<usize> {
    Ranker::new(raw_corpus(&TEST_CORPUS), None).unwrap()
}

/// Code-sample descriptions, keyed by sample name
pub const SAMPLES: &[(&str, &str)] = &[
    (
        "excel-insert-table",
        "Insert a table into the active worksheet and format its header row",
    ),
    (
        "excel-read-range",
        "Fetch the values and formulas of the selected range",
    ),
    (
        "excel-add-chart",
        "Create a column chart from a range of data",
    ),
    (
        "excel-delete-rows",
        "Remove rows that contain empty cells from a table",
    ),
    (
        "word-insert-paragraph",
        "Insert a paragraph at the end of the document body",
    ),
    (
        "word-update-styles",
        "Modify the font and styles of every paragraph",
    ),
    (
        "outlook-read-mail",
        "Retrieve the subject and sender of the selected message",
    ),
];

/// Normalizer plus a ranker over `SAMPLES`
pub fn sample_ranker() -> (Normalizer, Ranker<&'static str>) {
    let normalizer = Normalizer::default();
    let corpus = SAMPLES
        .iter()
        .map(|(name, text)| normalizer.document(text, *name))
        .collect();
    (normalizer, Ranker::new(corpus, None).unwrap())
}
