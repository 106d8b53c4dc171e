//! Search command handler.
//!
//! Author, tag and keyword modes scan the table in row order. Semantic mode
//! ranks every record against the query in the cached vector space.

use std::sync::Arc;
use std::time::Instant;

use quotesearch_core::{Error, Record, RecordTable, Result};
use quotesearch_search::VectorSpaceCache;

use crate::types::{SearchHit, SearchMode};

/// Run one query against `table`.
///
/// # Errors
///
/// - `NoData` if the table is empty
/// - `ModelFit` if semantic mode cannot fit the vector space
pub fn search(
    table: &Arc<RecordTable>,
    cache: &VectorSpaceCache,
    mode: SearchMode,
    query: &str,
    exact: bool,
    limit: usize,
) -> Result<Vec<SearchHit>> {
    if table.is_empty() {
        return Err(Error::NoData);
    }
    let start = Instant::now();

    let hits = match mode {
        SearchMode::Author => filter(table, limit, |r| author_matches(r, query, exact)),
        SearchMode::Tag => filter(table, limit, |r| tag_matches(r, query, exact)),
        SearchMode::Keyword => filter(table, limit, |r| contains_folded(&r.text, query)),
        SearchMode::Semantic => semantic(table, cache, query, limit)?,
    };

    tracing::debug!(
        target: "quotesearch::search",
        mode = %mode,
        exact = exact,
        limit = limit,
        hits = hits.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Search completed"
    );
    Ok(hits)
}

fn filter<F>(table: &RecordTable, limit: usize, predicate: F) -> Vec<SearchHit>
where
    F: Fn(&Record) -> bool,
{
    table
        .iter()
        .filter(|r| predicate(r))
        .take(limit)
        .cloned()
        .map(SearchHit::new)
        .collect()
}

fn semantic(
    table: &Arc<RecordTable>,
    cache: &VectorSpaceCache,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchHit>> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    let space = cache.get_or_fit(table)?;
    Ok(space
        .most_similar(query, limit)
        .into_iter()
        .filter_map(|ranked| {
            table
                .get(ranked.index)
                .map(|r| SearchHit::scored(r.clone(), ranked.score))
        })
        .collect())
}

/// Exact: case-sensitive equality. Otherwise case-insensitive containment.
pub(crate) fn author_matches(record: &Record, query: &str, exact: bool) -> bool {
    if exact {
        record.author == query
    } else {
        contains_folded(&record.author, query)
    }
}

/// Exact: some tag equals the query. Otherwise some tag starts with it,
/// ignoring case.
pub(crate) fn tag_matches(record: &Record, query: &str, exact: bool) -> bool {
    if exact {
        record.tags.iter().any(|t| t == query)
    } else {
        let query = query.to_lowercase();
        record
            .tags
            .iter()
            .any(|t| t.to_lowercase().starts_with(&query))
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
