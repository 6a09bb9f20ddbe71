//! Corpus document and ranked result types
//!
//! A `Document` pairs pre-normalized text with a caller-defined metadata
//! payload. The metadata is opaque to lexis and is handed back untouched.

use serde::{Deserialize, Serialize};

/// An immutable corpus entry.
///
/// `text` is the space-joined token sequence produced by the normalizer.
/// The ranker scores against it as-is and never normalizes it again.
///
/// # Examples
///
/// ```
/// use lexis_core::Document;
///
/// let doc = Document::new("insert row tabl", 7u32);
/// assert_eq!(doc.text(), "insert row tabl");
/// assert_eq!(*doc.metadata(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<M> {
    text: String,
    metadata: M,
}

impl<M> Document<M> {
    /// Create a document from already-normalized text
    pub fn new(text: impl Into<String>, metadata: M) -> Self {
        Document {
            text: text.into(),
            metadata,
        }
    }

    /// The normalized text used for scoring
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The caller-defined payload
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Split the document back into its parts
    pub fn into_parts(self) -> (String, M) {
        (self.text, self.metadata)
    }
}

/// A scored reference into a ranker's corpus.
///
/// Results borrow from the ranker that produced them. `index` is the
/// position of the document in the original corpus order.
#[derive(Debug, PartialEq)]
pub struct RankedResult<'a, M> {
    /// Relevance score (higher = more relevant)
    pub score: f64,
    /// Position of the document in corpus order
    pub index: usize,
    /// The matched document
    pub document: &'a Document<M>,
}

// Manual impls: derive would require `M: Clone`/`M: Copy`.
impl<M> Clone for RankedResult<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for RankedResult<'_, M> {}

impl<'a, M> RankedResult<'a, M> {
    /// Shortcut to the matched document's metadata
    pub fn metadata(&self) -> &'a M {
        self.document.metadata()
    }
}
