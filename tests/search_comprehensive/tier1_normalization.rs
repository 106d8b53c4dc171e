//! Tier 1: Normalization
//!
//! The normalizer is the only path from raw text to terms, for fitting and
//! for queries alike.

use proptest::prelude::*;
use quotesearch_search::{is_stopword, normalize, normalize_joined};

#[test]
fn tier1_stopwords_and_short_tokens_removed() {
    assert_eq!(normalize("Courage is the key"), vec!["courage", "key"]);
    assert!(normalize("the a it").is_empty());
    assert!(normalize("go be ok").is_empty());
}

#[test]
fn tier1_punctuation_and_digits_removed() {
    assert_eq!(
        normalize("“Life” is 100% what happens!"),
        vec!["life", "happen"]
    );
}

#[test]
fn tier1_plurals_lemmatized() {
    assert_eq!(normalize("Dreams, stories and wolves"), vec!["dream", "story", "wolf"]);
}

#[test]
fn tier1_joined_form() {
    assert_eq!(normalize_joined("Love is patient, love is kind"), "love patient love kind");
}

proptest! {
    #[test]
    fn tier1_idempotent(text in "[A-Za-z ,.;:!?'\"-]{0,120}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once.join(" ")), once);
    }

    #[test]
    fn tier1_deterministic(text in "\\PC{0,60}") {
        prop_assert_eq!(normalize(&text), normalize(&text));
    }

    #[test]
    fn tier1_no_stopwords_survive(text in "[a-z ]{0,120}") {
        for token in normalize(&text) {
            prop_assert!(!is_stopword(&token));
            prop_assert!(token.chars().count() >= 3);
        }
    }
}
