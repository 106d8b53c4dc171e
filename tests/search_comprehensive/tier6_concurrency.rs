//! Tier 6: Concurrency

use crate::test_utils::*;
use quotesearch::SearchMode;
use std::sync::Arc;
use std::thread;

#[test]
fn tier6_one_fit_under_concurrent_load() {
    let session = create_test_session();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let mode = if i % 2 == 0 {
                    SearchMode::Semantic
                } else {
                    SearchMode::Keyword
                };
                session.search(mode, "love", false, Some(4)).unwrap()
            })
        })
        .collect();
    for h in handles {
        assert!(!h.join().unwrap().is_empty());
    }
    assert_eq!(session.cache().fit_count(), 1);
}

#[test]
fn tier6_replacement_during_searches() {
    let session = create_test_session();
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                for _ in 0..10 {
                    let hits = session
                        .search(SearchMode::Semantic, "courage", false, Some(3))
                        .unwrap();
                    assert_eq!(hits.len(), 3);
                    assert!(hits.iter().all(|h| h.score.is_some()));
                }
            })
        })
        .collect();

    for _ in 0..3 {
        session.replace_table(quote_table());
    }
    for r in readers {
        r.join().unwrap();
    }
    assert!(session.cache().fit_count() >= 1);
}
