//! Tier 1: Stemmer contract

use lexis::search::stemmer::is_special_form;
use lexis::stem;

#[test]
fn test_stem_is_deterministic() {
    for word in ["running", "generated", "relational", "Knightly", "", "a", "caf\u{e9}s"] {
        assert_eq!(stem(word), stem(word));
    }
}

#[test]
fn test_short_words_are_only_lowercased() {
    assert_eq!(stem(""), "");
    assert_eq!(stem("I"), "i");
    assert_eq!(stem("Is"), "is");
    assert_eq!(stem("ox"), "ox");
    assert_eq!(stem("'s"), "'s");
}

#[test]
fn test_special_forms_short_circuit() {
    assert_eq!(stem("skis"), "ski");
    assert_eq!(stem("dying"), "die");
    assert_eq!(stem("news"), "news");
    assert_eq!(stem("atlas"), "atlas");
    assert_eq!(stem("Skies"), "sky");
    assert!(is_special_form("NEWS"));
    assert!(!is_special_form("new"));
}

#[test]
fn test_known_vectors() {
    assert_eq!(stem("running"), "run");
    assert_eq!(stem("generated"), "generat");
    assert_eq!(stem("misdeed"), "misdee");
    assert_eq!(stem("abandoned"), "abandon");
}

#[test]
fn test_not_idempotent() {
    let once = stem("embedment");
    assert_eq!(once, "embed");
    assert_eq!(stem(&once), "emb");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(stem("CONSOLIDATED"), stem("consolidated"));
    assert_eq!(stem("Running"), "run");
}

#[test]
fn test_vocabulary() {
    let cases = [
        ("consign", "consign"),
        ("consigned", "consign"),
        ("consigning", "consign"),
        ("consignment", "consign"),
        ("consisted", "consist"),
        ("consistency", "consist"),
        ("consistent", "consist"),
        ("consistently", "consist"),
        ("consisting", "consist"),
        ("consolation", "consol"),
        ("consolatory", "consolatori"),
        ("console", "consol"),
        ("consoled", "consol"),
        ("consolidating", "consolid"),
        ("knackeries", "knackeri"),
        ("knavish", "knavish"),
        ("kneaded", "knead"),
        ("kneeling", "kneel"),
        ("knees", "knee"),
        ("knell", "knell"),
        ("knightly", "knight"),
        ("knitted", "knit"),
        ("knitting", "knit"),
        ("knockers", "knocker"),
        ("generously", "generous"),
        ("communism", "communism"),
        ("arsenal", "arsenal"),
        ("controlling", "control"),
        ("conditional", "condit"),
        ("relational", "relat"),
        ("electricity", "electr"),
        ("happily", "happili"),
        ("happiness", "happi"),
        ("cried", "cri"),
        ("ties", "tie"),
        ("caresses", "caress"),
        ("ponies", "poni"),
        ("disabled", "disabl"),
        ("fizzed", "fizz"),
        ("failing", "fail"),
    ];
    for (word, expected) in cases {
        assert_eq!(stem(word), expected, "stem({:?})", word);
    }
}

#[test]
fn test_non_ascii_untouched() {
    assert_eq!(stem("Caf\u{e9}s"), "caf\u{e9}s");
}
