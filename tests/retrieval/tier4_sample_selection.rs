//! Tier 4: Sample selection
//!
//! Picks the single best code sample for a user request, the way an
//! assistant would before showing code.

use crate::test_utils::*;

fn best_sample(query: &str) -> &'static str {
    let (normalizer, ranker) = sample_ranker();
    let results = ranker.search_text(&normalizer, query, Some(1));
    *results[0].metadata()
}

#[test]
fn test_requests_pick_expected_samples() {
    let cases = [
        ("How can I get the values of a range?", "excel-read-range"),
        ("add a chart", "excel-add-chart"),
        ("I want to create a new table in my sheet", "excel-insert-table"),
        ("delete empty rows", "excel-delete-rows"),
        ("change the font of paragraphs", "word-update-styles"),
        ("edit paragraph styles", "word-update-styles"),
        ("read the sender of an email message", "outlook-read-mail"),
        ("add text to the end of the document", "word-insert-paragraph"),
    ];
    for (query, expected) in cases {
        assert_eq!(best_sample(query), expected, "query {:?}", query);
    }
}

#[test]
fn test_unrelated_request_falls_back_to_corpus_order() {
    let (normalizer, ranker) = sample_ranker();
    let results = ranker.search_text(&normalizer, "what is the weather", None);
    assert_eq!(results.len(), SAMPLES.len());
    assert!(results.iter().all(|r| r.score == 0.0));
    assert_eq!(*results[0].metadata(), SAMPLES[0].0);
}

#[test]
fn test_ties_keep_corpus_order() {
    let (normalizer, ranker) = sample_ranker();
    // Chart matches "rang", mail matches "get": same document frequency, same length
    let results = ranker.search_text(&normalizer, "How can I get the values of a range?", None);
    let second: Vec<&str> = results[1..3].iter().map(|r| *r.metadata()).collect();
    assert_eq!(results[1].score, results[2].score);
    assert_eq!(second, vec!["excel-add-chart", "outlook-read-mail"]);
}

#[test]
fn test_corpus_is_stored_normalized() {
    let (_, ranker) = sample_ranker();
    let texts: Vec<&str> = ranker.documents().iter().map(|d| d.text()).collect();
    assert_eq!(
        texts,
        vec![
            "add tabl activ worksheet format header row",
            "get value formula select rang",
            "add column chart rang data",
            "delet row contain empti cell tabl",
            "add paragraph end document bodi",
            "edit font styl paragraph",
            "get subject sender select messag",
        ]
    );
}
