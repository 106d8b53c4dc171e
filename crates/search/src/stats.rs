//! Corpus-level statistics

use quotesearch_core::RecordTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::frequency::{top_counts, Frequency};

/// Totals and most frequent tags and authors of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Number of records
    pub total_records: usize,
    /// Number of distinct authors
    pub total_authors: usize,
    /// Number of tag occurrences across all records
    pub total_tags: usize,
    /// Most frequent tags
    pub top_tags: Vec<Frequency>,
    /// Authors with the most records
    pub top_authors: Vec<Frequency>,
}

/// Compute statistics over `table`, keeping the `top_n` most frequent tags
/// and authors.
pub fn corpus_stats(table: &RecordTable, top_n: usize) -> CorpusStats {
    let authors: HashSet<&str> = table.iter().map(|r| r.author.as_str()).collect();
    CorpusStats {
        total_records: table.len(),
        total_authors: authors.len(),
        total_tags: table.iter().map(|r| r.tags.len()).sum(),
        top_tags: top_counts(table.iter().flat_map(|r| r.tags.iter()), top_n),
        top_authors: top_counts(table.iter().map(|r| r.author.as_str()), top_n),
    }
}
