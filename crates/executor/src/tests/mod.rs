//! Test modules for the executor crate.


use crate::{QuoteConfig, Record, RecordTable, Session};

/// Small quote table with two themes plus one repeated author.
pub(crate) fn sample_table() -> RecordTable {
    vec![
        Record::new(
            "The brave heart finds courage in the storm",
            "Maya Angelou",
        )
        .with_tags(["courage", "inspirational"]),
        Record::new("Courage is a brave heart that keeps going", "Maya Angelou")
            .with_tags(["courage", "life"]),
        Record::new("Love is patient, love is kind", "Paul").with_tags(["love"]),
        Record::new("A kind word is love made visible", "Paul").with_tags(["love", "kindness"]),
        Record::new("Storms pass, but courage and love remain", "Maya Angelou")
            .with_tags(["courage", "love"]),
        Record::new("Books are a uniquely portable magic", "Stephen King")
            .with_tags(["books", "reading"]),
    ]
    .into()
}

/// Session over [`sample_table`] with a small topic count.
pub(crate) fn sample_session() -> Session {
    let config = QuoteConfig {
        topic_count: 3,
        ..QuoteConfig::default()
    };
    Session::with_table(config, sample_table())
}
