//! Tier 3: Ranker scoring invariants

use crate::test_utils::*;
use lexis::{BM25Config, Document, LexisError, Ranker};

#[test]
fn test_all_documents_score_positive() {
    let ranker = test_ranker();
    let results = ranker.search(&terms(&["test"]), None);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.score > 0.0));
}

#[test]
fn test_average_length() {
    let ranker = test_ranker();
    assert_eq!(ranker.average_length(), 4.0);
    assert_eq!(ranker.word_count(0), 5);
    assert_eq!(ranker.word_count(1), 3);
    assert_eq!(ranker.word_count(2), 4);
}

#[test]
fn test_top_k_is_prefix_of_full_ranking() {
    let ranker = test_ranker();
    for query in [terms(&["test"]), terms(&["another", "document"]), terms(&["Yet", "test"])] {
        let full = ranker.search(&query, None);
        let top = ranker.search(&query, Some(1));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0], full[0]);
    }
}

#[test]
fn test_empty_query() {
    let ranker = test_ranker();
    let results = ranker.search(&[], None);
    assert_eq!(results.len(), 3);
    for (position, result) in results.iter().enumerate() {
        assert_eq!(result.score, 0.0);
        assert_eq!(result.index, position);
        assert_eq!(*result.metadata(), position);
    }
}

#[test]
fn test_higher_k1_rewards_repetition_more() {
    // Equal lengths, so length normalization is neutral
    let corpus = || raw_corpus(&["tabl chart", "tabl tabl"]);
    let marginal = |k1: f64| {
        let config = BM25Config {
            k1,
            ..Default::default()
        };
        let ranker = Ranker::new(corpus(), Some(config)).unwrap();
        ranker.term_score("tabl", 1) - ranker.term_score("tabl", 0)
    };
    assert!(marginal(2.0) > marginal(1.2));
    assert!(marginal(1.2) > marginal(0.5));
    assert!(marginal(0.5) > 0.0);
}

#[test]
fn test_idf_prefers_rare_terms() {
    let ranker = test_ranker();
    assert!(ranker.idf("Yet") > ranker.idf("document"));
    assert!(ranker.idf("document") > 0.0);
}

#[test]
fn test_repeated_query_terms_count_once_with_weight() {
    let ranker = test_ranker();
    let single = ranker.search(&terms(&["document", "Yet"]), None);
    let repeated = ranker.search(&terms(&["Yet", "document", "Yet"]), None);
    assert_eq!(single[0].index, 2);
    assert_eq!(repeated[0].index, 2);
    assert!(repeated[0].score > single[0].score);
}

#[test]
fn test_empty_corpus_rejected() {
    let err = Ranker::new(Vec::<Document<()>>::new(), None).unwrap_err();
    assert!(matches!(err, LexisError::EmptyCorpus));
    assert_eq!(err.to_string(), "cannot rank an empty corpus");
}

#[test]
fn test_ranker_owns_its_corpus() {
    let mut docs = raw_corpus(&TEST_CORPUS);
    let ranker = Ranker::new(docs.clone(), None).unwrap();
    docs.clear();
    assert_eq!(ranker.len(), 3);
    assert_eq!(ranker.documents()[2].text(), TEST_CORPUS[2]);
}
