//! Tier 3: Vector Space
//!
//! Fitted vectors are unit length or zero, always `topic_count` wide, and
//! place related quotes near each other.

use crate::test_utils::*;
use quotesearch::{FitParams, Record, RecordTable, VectorSpace};

fn fitted(topic_count: usize) -> VectorSpace {
    VectorSpace::fit_table(&quote_table(), &FitParams::new(topic_count)).unwrap()
}

#[test]
fn tier3_unit_or_zero_vectors() {
    let space = fitted(4);
    assert_eq!(space.documents().len(), quote_table().len());
    for v in space.documents().iter() {
        let n = norm(v);
        assert!(n == 0.0 || (n - 1.0).abs() < 1e-9, "norm {}", n);
    }
}

#[test]
fn tier3_dimension_exceeding_rank() {
    let space = fitted(50);
    assert!(space.documents().iter().all(|v| v.len() == 50));
    assert_eq!(space.embed("love").len(), 50);
}

#[test]
fn tier3_embed_unseen_is_zero() {
    let space = fitted(4);
    assert!(space.embed("xylophone quasar").iter().all(|&x| x == 0.0));
    assert!(space.embed("").iter().all(|&x| x == 0.0));
}

#[test]
fn tier3_semantic_recall() {
    // Full rank keeps every similarity
    let space = fitted(8);
    let ranked = space.most_similar("Education in the world", 8);
    let score = |idx: usize| ranked.iter().find(|r| r.index == idx).unwrap().score;
    assert!(score(6) > score(3));
    assert!(score(7) > score(3));
    assert!(score(3).abs() < 1e-9);
}

#[test]
fn tier3_degenerate_corpora() {
    assert!(VectorSpace::fit_table(&RecordTable::default(), &FitParams::default())
        .unwrap_err()
        .is_model_fit());

    let stopwords: RecordTable = vec![
        Record::new("it is what it is", "A"),
        Record::new("and so on and on", "B"),
    ]
    .into();
    assert!(VectorSpace::fit_table(&stopwords, &FitParams::default())
        .unwrap_err()
        .is_model_fit());

    // No term reaches the document-frequency floor
    let unique: RecordTable = vec![
        Record::new("apples ripen", "A"),
        Record::new("rivers flow", "B"),
    ]
    .into();
    assert!(VectorSpace::fit_table(&unique, &FitParams::default())
        .unwrap_err()
        .is_model_fit());
}

#[test]
fn tier3_top_terms_in_vocabulary() {
    let space = fitted(3);
    let vocab = space.term_weights().vocabulary();
    for topic in space.top_terms(4) {
        assert!(topic.terms.len() <= 4);
        for term in &topic.terms {
            assert!(vocab.contains(&term.term));
            assert!(term.weight > 0.0);
        }
    }
    let ratio = space.projection().explained_variance_ratio();
    assert!(ratio > 0.0 && ratio <= 1.0 + 1e-9);
}
