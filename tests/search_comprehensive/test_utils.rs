//! Test utilities for the search comprehensive tests

use quotesearch::{Command, Executor, Output, QuoteConfig, Record, RecordTable, SearchHit, Session};
use std::sync::Arc;

/// Quotes spanning three themes, with one prolific author.
pub fn quote_table() -> RecordTable {
    vec![
        Record::new(
            "Courage is not the absence of fear, but the triumph over fear",
            "Nelson Mandela",
        )
        .with_tags(["courage", "fear"])
        .with_author_link("/author/show/Nelson_Mandela"),
        Record::new("Fear kills more dreams than failure ever will", "Suzy Kassem")
            .with_tags(["fear", "dreams"]),
        Record::new(
            "It always seems impossible until courage makes it done",
            "Nelson Mandela",
        )
        .with_tags(["courage", "inspirational"]),
        Record::new("Love is patient, love is kind", "Corinthians").with_tags(["love"]),
        Record::new("Where there is love there is life", "Mahatma Gandhi")
            .with_tags(["love", "life"]),
        Record::new("Life is what happens while you make other plans", "John Lennon")
            .with_tags(["life", "plans"]),
        Record::new("Education is the most powerful weapon to change the world", "Nelson Mandela")
            .with_tags(["education", "change"]),
        Record::new("The world changes when education reaches everyone", "Malala")
            .with_tags(["education", "change"]),
    ]
    .into()
}

/// Config with a topic count suited to [`quote_table`].
pub fn test_config() -> QuoteConfig {
    QuoteConfig {
        topic_count: 4,
        ..QuoteConfig::default()
    }
}

/// Session over [`quote_table`].
pub fn create_test_session() -> Arc<Session> {
    Arc::new(Session::with_table(test_config(), quote_table()))
}

/// Executor over [`create_test_session`].
pub fn create_test_executor() -> Executor {
    Executor::new(create_test_session())
}

/// Execute a search command and unwrap its hits.
pub fn search_hits(executor: &Executor, cmd: Command) -> Vec<SearchHit> {
    match executor.execute(cmd) {
        Ok(Output::SearchResults(hits)) => hits,
        other => panic!("Expected SearchResults, got {:?}", other),
    }
}

/// Euclidean norm
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
