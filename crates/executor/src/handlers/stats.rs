//! Stats command handler.

use quotesearch_core::RecordTable;
use quotesearch_search::{corpus_stats, CorpusStats};

/// Corpus totals with the `top_n` most frequent tags and authors.
pub fn stats(table: &RecordTable, top_n: usize) -> CorpusStats {
    let stats = corpus_stats(table, top_n);
    tracing::debug!(
        target: "quotesearch::search",
        records = stats.total_records,
        authors = stats.total_authors,
        tags = stats.total_tags,
        "Stats computed"
    );
    stats
}
