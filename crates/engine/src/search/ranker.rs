//! BM25 ranking with query-term-frequency weighting
//!
//! A [`Ranker`] owns an immutable corpus of documents whose text is
//! already normalized. Corpus statistics are computed once at
//! construction; scoring a query only reads them.
//!
//! # Scoring
//!
//! ```text
//! IDF(t)          = ln(1 + (N - n(t) + 0.5) / (n(t) + 0.5))
//! termScore(t, D) = IDF(t) * (d + (k1 + 1) * f) / (f + k1 * (1 - b + b * |D| / avgdl))
//! score(D, Q)     = Σ over distinct t in Q of  termScore(t, D) * qf * (1 + k3) / (k3 + qf)
//! ```
//!
//! `f` counts whole-word occurrences of `t` in the document, `|D|` is the
//! document's word count and `qf` is how many times `t` appears in the
//! query. Every document is scored, including those matching no term.
//!
//! # Thread Safety
//!
//! `Ranker<M>` is `Send + Sync` whenever `M` is. IDF values are memoized in
//! a DashMap, so concurrent searches share the cache without locking the
//! ranker.

use std::cmp::Ordering;

use dashmap::DashMap;
use lexis_core::{BM25Config, Document, LexisError, LexisResult, RankedResult};
use rustc_hash::FxHashMap;

use super::index::CorpusIndex;
use super::normalizer::Normalizer;

// ============================================================================
// Ranker
// ============================================================================

/// Ranks an immutable corpus against query terms.
#[derive(Debug)]
pub struct Ranker<M> {
    documents: Vec<Document<M>>,
    config: BM25Config,
    index: CorpusIndex,
    /// term -> IDF, filled lazily
    idf_cache: DashMap<String, f64>,
}

impl<M> Ranker<M> {
    /// Build a ranker over a non-empty corpus.
    ///
    /// `None` selects [`BM25Config::default`]. Fails with
    /// [`LexisError::EmptyCorpus`] when there are no documents and with
    /// [`LexisError::InvalidConfig`] when a parameter is out of range.
    pub fn new(documents: Vec<Document<M>>, config: Option<BM25Config>) -> LexisResult<Self> {
        if documents.is_empty() {
            return Err(LexisError::EmptyCorpus);
        }
        let config = config.unwrap_or_default();
        config.validate()?;

        let index = CorpusIndex::build(documents.iter().map(Document::text));

        tracing::debug!(
            target: "lexis::rank",
            documents = index.total_docs(),
            vocabulary = index.vocabulary_size(),
            avg_doc_len = index.avg_doc_len(),
            k1 = config.k1,
            b = config.b,
            d = config.d,
            k3 = config.k3,
            "Built ranker"
        );

        Ok(Ranker {
            documents,
            config,
            index,
            idf_cache: DashMap::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false: construction rejects empty corpora
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in corpus order
    pub fn documents(&self) -> &[Document<M>] {
        &self.documents
    }

    /// Scoring parameters in effect
    pub fn config(&self) -> &BM25Config {
        &self.config
    }

    /// Mean document word count
    pub fn average_length(&self) -> f64 {
        self.index.avg_doc_len()
    }

    /// Give the documents back
    pub fn into_documents(self) -> Vec<Document<M>> {
        self.documents
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Word count of the document at `index`, 0 when out of range
    pub fn word_count(&self, index: usize) -> usize {
        u32::try_from(index).map_or(0, |id| self.index.doc_len(id) as usize)
    }

    /// Whole-word occurrences of `term` in the document at `index`
    pub fn frequency(&self, term: &str, index: usize) -> usize {
        u32::try_from(index).map_or(0, |id| self.index.tf(term, id) as usize)
    }

    /// Number of documents containing `term` at least once
    pub fn document_frequency(&self, term: &str) -> usize {
        self.index.doc_freq(term)
    }

    /// Inverse document frequency of `term`.
    ///
    /// Always positive for this formula, and not clamped. Memoized per term.
    pub fn idf(&self, term: &str) -> f64 {
        if let Some(cached) = self.idf_cache.get(term) {
            return *cached;
        }
        let n = self.index.total_docs() as f64;
        let df = self.index.doc_freq(term) as f64;
        let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
        self.idf_cache.insert(term.to_string(), idf);
        idf
    }

    /// Saturated, length-normalized contribution of `term` to the
    /// document at `index`, before query weighting.
    pub fn term_score(&self, term: &str, index: usize) -> f64 {
        let f = self.frequency(term, index) as f64;
        let len = self.word_count(index) as f64;
        self.score_with(self.idf(term), f, len)
    }

    fn score_with(&self, idf: f64, f: f64, len: f64) -> f64 {
        let BM25Config { b, k1, d, .. } = self.config;
        // An absent term with no floor contributes nothing. This also keeps
        // 0/0 out of degenerate corpora (k1 = 0, or b = 1 on an empty doc).
        if f == 0.0 && d == 0.0 {
            return 0.0;
        }
        let avg = self.index.avg_doc_len();
        let length_norm = if avg > 0.0 {
            1.0 - b + b * len / avg
        } else {
            1.0
        };
        let numerator = d + (k1 + 1.0) * f;
        let denominator = f + k1 * length_norm;
        if denominator == 0.0 {
            return 0.0;
        }
        idf * numerator / denominator
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Score every document against the query terms and return them by
    /// descending score.
    ///
    /// Each distinct term counts once, weighted by how often it occurs in
    /// `query_terms`. Empty terms are ignored. Ties keep corpus order.
    /// `top_k` truncates after sorting; `None` returns every document.
    pub fn search(&self, query_terms: &[String], top_k: Option<usize>) -> Vec<RankedResult<'_, M>> {
        let scores = self.scores(query_terms);

        let mut results: Vec<RankedResult<'_, M>> = scores
            .into_iter()
            .zip(&self.documents)
            .enumerate()
            .map(|(index, (score, document))| RankedResult {
                score,
                index,
                document,
            })
            .collect();

        // Stable sort keeps corpus order among equal scores
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if let Some(k) = top_k {
            results.truncate(k);
        }

        tracing::trace!(
            target: "lexis::rank",
            terms = query_terms.len(),
            returned = results.len(),
            best = results.first().map(|r| r.score),
            "Ranked corpus"
        );

        results
    }

    /// Normalize a raw query and search with its tokens.
    pub fn search_text(
        &self,
        normalizer: &Normalizer,
        query: &str,
        top_k: Option<usize>,
    ) -> Vec<RankedResult<'_, M>> {
        let terms = normalizer.normalize(query);
        self.search(&terms, top_k)
    }

    /// Per-document scores in corpus order.
    fn scores(&self, query_terms: &[String]) -> Vec<f64> {
        let k3 = self.config.k3;
        let mut scores = vec![0.0; self.documents.len()];

        for (term, qf) in query_term_counts(query_terms) {
            let idf = self.idf(term);
            let qf = qf as f64;

            let weighted = |term_score: f64| term_score * qf * (1.0 + k3) / (k3 + qf);

            if self.config.d == 0.0 {
                // Without a floor only documents containing the term score
                if let Some(postings) = self.index.lookup(term) {
                    for entry in &postings.entries {
                        let len = self.index.doc_len(entry.doc_id) as f64;
                        let ts = self.score_with(idf, entry.tf as f64, len);
                        scores[entry.doc_id as usize] += weighted(ts);
                    }
                }
                continue;
            }

            for (doc_id, score) in scores.iter_mut().enumerate() {
                let id = doc_id as u32;
                let f = self.index.tf(term, id) as f64;
                let len = self.index.doc_len(id) as f64;
                *score += weighted(self.score_with(idf, f, len));
            }
        }

        scores
    }
}

/// Distinct non-empty terms with their counts, in first-seen order.
fn query_term_counts(query_terms: &[String]) -> Vec<(&str, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    for term in query_terms.iter().filter(|t| !t.is_empty()) {
        let count = counts.entry(term.as_str()).or_insert(0);
        if *count == 0 {
            order.push(term.as_str());
        }
        *count += 1;
    }
    order
        .into_iter()
        .map(|term| (term, counts[term]))
        .collect()
}
