//! Tier 2: Search Modes
//!
//! Filter semantics of each mode, limits, and the no-data contract.

use crate::test_utils::*;
use quotesearch::{Command, Error, Executor, SearchMode, Session};
use std::sync::Arc;

fn search(mode: SearchMode, query: &str, exact: bool) -> Command {
    Command::Search {
        mode,
        query: query.to_string(),
        exact,
        limit: Some(50),
    }
}

#[test]
fn tier2_author_substring_any_case() {
    let executor = create_test_executor();
    let hits = search_hits(&executor, search(SearchMode::Author, "MANDELA", false));
    assert_eq!(hits.len(), 3);
}

#[test]
fn tier2_author_exact() {
    let executor = create_test_executor();
    assert_eq!(
        search_hits(&executor, search(SearchMode::Author, "Nelson Mandela", true)).len(),
        3
    );
    assert!(search_hits(&executor, search(SearchMode::Author, "Mandela", true)).is_empty());
}

#[test]
fn tier2_tag_prefix_not_substring() {
    let executor = create_test_executor();
    let hits = search_hits(&executor, search(SearchMode::Tag, "Edu", false));
    assert_eq!(hits.len(), 2);
    // "inspirational" contains "ratio" but does not start with it
    assert!(search_hits(&executor, search(SearchMode::Tag, "ratio", false)).is_empty());
}

#[test]
fn tier2_tag_exact() {
    let executor = create_test_executor();
    assert_eq!(search_hits(&executor, search(SearchMode::Tag, "life", true)).len(), 2);
    assert!(search_hits(&executor, search(SearchMode::Tag, "Life", true)).is_empty());
}

#[test]
fn tier2_keyword_containment() {
    let executor = create_test_executor();
    let hits = search_hits(&executor, search(SearchMode::Keyword, "FEAR", false));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.record.text.to_lowercase().contains("fear")));
}

#[test]
fn tier2_semantic_scored_descending() {
    let executor = create_test_executor();
    let hits = search_hits(&executor, search(SearchMode::Semantic, "education changes the world", false));
    assert_eq!(hits.len(), quote_table().len());
    let scores: Vec<f64> = hits.iter().map(|h| h.score.unwrap()).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    assert!(hits[0].record.tags.contains(&"education".to_string()));
}

#[test]
fn tier2_limits() {
    let session = create_test_session();
    for mode in SearchMode::ALL {
        assert!(session.search(mode, "", false, Some(0)).unwrap().is_empty());
        assert_eq!(session.search(mode, "", false, Some(3)).unwrap().len(), 3);
    }
}

#[test]
fn tier2_no_data_every_mode() {
    let executor = Executor::new(Arc::new(Session::default()));
    for mode in SearchMode::ALL {
        for exact in [false, true] {
            let result = executor.execute(search(mode, "courage", exact));
            assert_eq!(result, Err(Error::NoData));
        }
    }
}

#[test]
fn tier2_mode_parsing() {
    assert_eq!("semantic".parse::<SearchMode>().unwrap(), SearchMode::Semantic);
    assert!(matches!(
        "phonetic".parse::<SearchMode>(),
        Err(Error::InvalidMode { .. })
    ));
}
