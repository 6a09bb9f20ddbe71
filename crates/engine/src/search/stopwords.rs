//! English stop words
//!
//! High-frequency function words that carry no discriminative value for
//! ranking. Matching is exact against already-lowercased tokens, before
//! stemming. Contractions appear in their apostrophe-less form because the
//! normalizer deletes punctuation before splitting ("don't" -> "dont").

use super::normalizer::default_normalizer;

/// Compiled-in stop-word list.
pub const STOPWORDS: &[&str] = &[
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "us",
    // interrogatives and determiners
    "what", "which", "who", "whom", "whose", "this", "that", "these", "those", "a", "an", "the",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "own", "same",
    "every", "either", "neither",
    // be / have / do
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing",
    // modals
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    // conjunctions
    "and", "but", "if", "or", "because", "as", "until", "while", "nor", "so", "than", "though",
    "although", "whether",
    // prepositions
    "of", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "within", "without", "upon", "onto", "via",
    // adverbs
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "no",
    "not", "only", "too", "very", "just", "now", "also", "even", "ever", "still", "yet",
    "already", "always", "never", "often", "quite", "rather", "really",
    // contraction fragments and merged contractions
    "s", "t", "d", "ll", "m", "o", "re", "ve", "y", "dont", "doesnt", "didnt", "cant", "cannot",
    "wont", "isnt", "arent", "wasnt", "werent", "hasnt", "havent", "hadnt", "couldnt",
    "shouldnt", "wouldnt", "im", "ive", "id", "youre", "theyre", "thats", "lets",
    // conversational filler common in natural-language requests
    "please", "want", "like", "thanks", "ok", "okay",
];

/// Check if a token is a stop word of the default normalizer.
///
/// Case-sensitive: callers lowercase before checking.
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    default_normalizer().is_stop_word(token)
}
