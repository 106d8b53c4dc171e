//! Topics command handler.

use std::sync::Arc;

use quotesearch_core::{RecordTable, Result};
use quotesearch_search::VectorSpaceCache;

use crate::types::TopicSummary;

/// Terms reported per topic when the command gives no count.
pub const DEFAULT_TERMS_PER_TOPIC: usize = 10;

/// Top terms of every topic in the cached space.
pub fn topics(
    table: &Arc<RecordTable>,
    cache: &VectorSpaceCache,
    terms_per_topic: usize,
) -> Result<TopicSummary> {
    let space = cache.get_or_fit(table)?;
    Ok(TopicSummary {
        topics: space.top_terms(terms_per_topic),
        explained_variance_ratio: space.projection().explained_variance_ratio(),
    })
}
