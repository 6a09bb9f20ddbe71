//! Tier 2: Normalizer pipeline

use lexis::{normalize, normalize_joined, Normalizer, NormalizerConfig};
use std::collections::BTreeMap;

#[test]
fn test_stop_words_dropped_and_stem_kept() {
    assert_eq!(normalize("this is a test"), vec!["test"]);
}

#[test]
fn test_fetch_folds_to_get() {
    assert_eq!(normalize("fetch"), vec!["get"]);
    assert_eq!(normalize("Fetching"), vec!["get"]);
}

#[test]
fn test_every_default_synonym() {
    let cases = [
        ("retrieve", "get"),
        ("insert", "add"),
        ("create", "add"),
        ("update", "edit"),
        ("modify", "edit"),
        ("remove", "delet"),
    ];
    for (word, canonical) in cases {
        assert_eq!(normalize(word), vec![canonical], "normalize({:?})", word);
    }
}

#[test]
fn test_characters_deleted_not_replaced() {
    assert_eq!(normalize("add-in"), vec!["addin"]);
    assert_eq!(normalize("cell - value"), vec!["cell", "value"]);
    assert_eq!(normalize("A1:B2"), vec!["ab"]);
}

#[test]
fn test_whitespace_runs() {
    assert_eq!(normalize("  charts   tables "), vec!["chart", "tabl"]);
}

#[test]
fn test_total_over_any_input() {
    assert!(normalize("").is_empty());
    assert!(normalize("123 456 !!!").is_empty());
    assert!(normalize("\u{1F600} \u{4E2D}\u{6587}").is_empty());
}

#[test]
fn test_joined_form() {
    assert_eq!(normalize_joined("Creating charts and tables"), "add chart tabl");
}

#[test]
fn test_custom_synonyms_and_stop_words() {
    let mut synonyms = BTreeMap::new();
    synonyms.insert("erase".to_string(), "delete".to_string());
    let config = NormalizerConfig {
        extra_stop_words: vec!["excel".to_string()],
        synonyms,
        ..Default::default()
    };
    let normalizer = Normalizer::from_config(&config);

    assert_eq!(normalizer.normalize("erase the Excel rows"), vec!["delet", "row"]);
    assert_eq!(normalizer.normalize("erasing"), vec!["delet"]);
}

#[test]
fn test_normalizer_is_shareable() {
    let normalizer = std::sync::Arc::new(Normalizer::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let normalizer = std::sync::Arc::clone(&normalizer);
            std::thread::spawn(move || normalizer.normalize("retrieving the selected ranges"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["get", "select", "rang"]);
    }
}
