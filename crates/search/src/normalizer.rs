//! Text normalization for the vector space
//!
//! Pipeline: lowercase → strip non-alphanumeric → strip digits
//!           → UAX#29 word boundaries → remove stopwords → drop short tokens
//!           → lemmatize

use crate::lemmatizer::lemmatize;
use crate::stopwords::is_stopword;
use unicode_segmentation::UnicodeSegmentation;

/// Tokens shorter than this many chars are dropped.
pub const MIN_TOKEN_LEN: usize = 3;

/// Token sequence derived from one record's text.
pub type NormalizedDocument = Vec<String>;

/// Normalize text into lemma tokens.
///
/// Steps, in order:
/// 1. Lowercase
/// 2. Remove chars that are neither alphanumeric nor whitespace
/// 3. Remove digits
/// 4. Split on UAX#29 word boundaries (`unicode_words`)
/// 5. Remove stopwords
/// 6. Drop tokens shorter than [`MIN_TOKEN_LEN`] chars
/// 7. Lemmatize
///
/// Never fails: input with nothing informative yields an empty `Vec`.
///
/// # Example
///
/// ```
/// use quotesearch_search::normalizer::normalize;
///
/// let tokens = normalize("Courage is the key");
/// assert_eq!(tokens, vec!["courage", "key"]);
/// ```
pub fn normalize(text: &str) -> NormalizedDocument {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| (c.is_alphanumeric() || c.is_whitespace()) && !c.is_numeric())
        .collect();

    cleaned
        .unicode_words()
        .filter(|w| !is_stopword(w))
        .filter(|w| w.chars().count() >= MIN_TOKEN_LEN)
        .map(lemmatize)
        .collect()
}

/// Normalize and join tokens with single spaces.
///
/// ```
/// use quotesearch_search::normalizer::normalize_joined;
///
/// assert_eq!(normalize_joined("The Stories we tell"), "story tell");
/// ```
pub fn normalize_joined(text: &str) -> String {
    normalize(text).join(" ")
}
