//! AuthorThemes command handler.

use std::sync::Arc;

use quotesearch_core::RecordTable;
use quotesearch_search::{AuthorThemes, VectorSpaceCache};

/// Aggregate one author's themes, fitting the cached space only when the
/// author reaches `min_records`.
pub fn author_themes(
    table: &Arc<RecordTable>,
    cache: &VectorSpaceCache,
    author: &str,
    min_records: usize,
) -> AuthorThemes {
    quotesearch_search::author_themes(table, author, min_records, || cache.get_or_fit(table))
}
