//! Corpus statistics for relevance scoring
//!
//! This module provides:
//! - Word-run splitting used for document length and term frequency
//! - Posting lists keyed by word
//! - Document lengths and the corpus average length
//!
//! The index is built once from an immutable corpus and never updated.
//!
//! # Word Runs
//!
//! A word is a maximal run of ASCII letters, ASCII digits or `_`. Document
//! length is the number of runs; a term's frequency in a document is the
//! number of runs exactly equal to the term. A term containing any other
//! character never matches.

use rustc_hash::FxHashMap;

/// Check if a byte belongs to a word run.
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterate over the word runs of a text.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    // Word bytes are ASCII, so splitting on any other byte keeps UTF-8
    // boundaries intact on both sides of every run.
    text.split(|c: char| !c.is_ascii() || !is_word_byte(c as u8))
        .filter(|s| !s.is_empty())
}

/// Number of word runs in a text.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Check if a query term can ever match a word run.
pub fn is_word(term: &str) -> bool {
    !term.is_empty() && term.bytes().all(is_word_byte)
}

// ============================================================================
// PostingEntry
// ============================================================================

/// Entry in a posting list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingEntry {
    /// Position of the document in the corpus
    pub doc_id: u32,
    /// Term frequency in this document
    pub tf: u32,
}

impl PostingEntry {
    /// Create a new posting entry
    pub fn new(doc_id: u32, tf: u32) -> Self {
        PostingEntry { doc_id, tf }
    }
}

// ============================================================================
// PostingList
// ============================================================================

/// Documents containing a word, ascending by doc_id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    /// Document entries
    pub entries: Vec<PostingEntry>,
}

impl PostingList {
    /// Number of documents containing this word
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency of the word in one document, 0 when absent
    pub fn tf(&self, doc_id: u32) -> u32 {
        self.entries
            .binary_search_by_key(&doc_id, |e| e.doc_id)
            .map_or(0, |i| self.entries[i].tf)
    }
}

// ============================================================================
// CorpusIndex
// ============================================================================

/// Precomputed statistics over an ordered corpus
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    /// Word -> PostingList mapping
    postings: FxHashMap<String, PostingList>,

    /// doc_id -> number of word runs
    doc_lengths: Vec<u32>,

    /// Mean of `doc_lengths`, 0.0 for an empty corpus
    avg_doc_len: f64,
}

impl CorpusIndex {
    /// Index texts in order; the n-th text gets doc_id n.
    pub fn build<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut postings: FxHashMap<String, PostingList> = FxHashMap::default();
        let mut doc_lengths = Vec::new();
        let mut total_doc_len: u64 = 0;

        for (doc_id, text) in texts.into_iter().enumerate() {
            let doc_id = doc_id as u32;

            // Count term frequencies
            let mut tf_map: FxHashMap<&str, u32> = FxHashMap::default();
            let mut doc_len: u32 = 0;
            for word in words(text) {
                *tf_map.entry(word).or_insert(0) += 1;
                doc_len += 1;
            }

            // Documents arrive in doc_id order, so every list stays sorted
            for (word, tf) in tf_map {
                postings
                    .entry(word.to_string())
                    .or_default()
                    .entries
                    .push(PostingEntry::new(doc_id, tf));
            }

            doc_lengths.push(doc_len);
            total_doc_len += u64::from(doc_len);
        }

        let avg_doc_len = if doc_lengths.is_empty() {
            0.0
        } else {
            total_doc_len as f64 / doc_lengths.len() as f64
        };

        CorpusIndex {
            postings,
            doc_lengths,
            avg_doc_len,
        }
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of indexed documents
    pub fn total_docs(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Number of distinct words across the corpus
    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    /// Word count of one document, 0 for an unknown doc_id
    pub fn doc_len(&self, doc_id: u32) -> u32 {
        self.doc_lengths.get(doc_id as usize).copied().unwrap_or(0)
    }

    /// Mean document word count
    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    /// Number of documents containing the term at least once
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, PostingList::len)
    }

    /// Frequency of the term in one document
    pub fn tf(&self, term: &str, doc_id: u32) -> u32 {
        self.postings.get(term).map_or(0, |p| p.tf(doc_id))
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Lookup documents containing a term
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }
}
