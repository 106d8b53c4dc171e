//! Tier 4: Themes and Stats

use crate::test_utils::*;
use quotesearch::{Command, Output, QuoteConfig, Session};

#[test]
fn tier4_profile_for_prolific_author() {
    let session = create_test_session();
    let themes = session.author_themes("Nelson Mandela").unwrap();
    assert_eq!(themes.record_count, 3);
    let profile = themes.topic_profile.expect("three quotes reach the floor");
    assert_eq!(profile.len(), test_config().topic_count);
    assert_eq!(themes.top_topics.len(), profile.len());
    // top_topics is sorted by profile weight
    for pair in themes.top_topics.windows(2) {
        assert!(profile[pair[0]] >= profile[pair[1]]);
    }
}

#[test]
fn tier4_tag_frequencies_ordered() {
    let session = create_test_session();
    let themes = session.author_themes("Nelson Mandela").unwrap();
    let tags: Vec<(&str, usize)> = themes
        .tag_frequencies
        .iter()
        .map(|f| (f.value.as_str(), f.count))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("courage", 2),
            ("fear", 1),
            ("inspirational", 1),
            ("education", 1),
            ("change", 1),
        ]
    );
}

#[test]
fn tier4_no_profile_below_floor() {
    let session = create_test_session();
    let themes = session.author_themes("John Lennon").unwrap();
    assert_eq!(themes.record_count, 1);
    assert!(themes.topic_profile.is_none());
    assert!(!session.cache().is_fitted());
}

#[test]
fn tier4_profile_floor_is_configurable() {
    let config = QuoteConfig {
        profile_min_records: 1,
        ..test_config()
    };
    let session = Session::with_table(config, quote_table());
    assert!(session.author_themes("John Lennon").unwrap().topic_profile.is_some());
}

#[test]
fn tier4_unknown_author() {
    let session = create_test_session();
    let themes = session.author_themes("Nobody").unwrap();
    assert_eq!(themes.record_count, 0);
    assert!(themes.tag_frequencies.is_empty());
    assert!(themes.topic_profile.is_none());
}

#[test]
fn tier4_stats_through_executor() {
    let executor = create_test_executor();
    match executor.execute(Command::Stats { top_n: Some(2) }).unwrap() {
        Output::Stats(stats) => {
            assert_eq!(stats.total_records, 8);
            assert_eq!(stats.total_authors, 6);
            assert_eq!(stats.total_tags, 15);
            assert_eq!(stats.top_authors[0].value, "Nelson Mandela");
            assert_eq!(stats.top_authors[0].count, 3);
            assert_eq!(stats.top_tags.len(), 2);
        }
        other => panic!("Expected Stats, got {:?}", other),
    }
}
