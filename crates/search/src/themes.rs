//! Per-author theme aggregation
//!
//! An author's themes are the frequencies of tags on their records plus,
//! once they have enough records, a topic profile: the mean of their
//! document vectors in the fitted space.

use quotesearch_core::{RecordTable, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::frequency::{ranked_counts, Frequency};
use crate::space::VectorSpace;

/// Tag frequencies and topic profile of one author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorThemes {
    /// Author matched exactly
    pub author: String,
    /// Number of records by the author
    pub record_count: usize,
    /// Tag counts, descending, ties by first occurrence
    pub tag_frequencies: Vec<Frequency>,
    /// Mean document vector, present when the author has enough records
    pub topic_profile: Option<Vec<f64>>,
    /// Topic indices by descending profile weight
    pub top_topics: Vec<usize>,
}

impl AuthorThemes {
    /// True if a topic profile was computed
    pub fn has_profile(&self) -> bool {
        self.topic_profile.is_some()
    }
}

/// Aggregate the themes of `author` over `table`.
///
/// `space` is invoked only when the author has at least `min_records`
/// records. If it fails, the tag frequencies are still returned without a
/// profile.
pub fn author_themes<F>(
    table: &RecordTable,
    author: &str,
    min_records: usize,
    space: F,
) -> AuthorThemes
where
    F: FnOnce() -> Result<Arc<VectorSpace>>,
{
    let positions: Vec<usize> = table
        .iter()
        .enumerate()
        .filter(|(_, r)| r.author == author)
        .map(|(i, _)| i)
        .collect();

    let tag_frequencies = ranked_counts(
        positions
            .iter()
            .filter_map(|&i| table.get(i))
            .flat_map(|r| r.tags.iter()),
    );

    let mut themes = AuthorThemes {
        author: author.to_string(),
        record_count: positions.len(),
        tag_frequencies,
        topic_profile: None,
        top_topics: Vec::new(),
    };

    if positions.is_empty() || positions.len() < min_records {
        return themes;
    }

    match space() {
        Ok(space) => {
            let profile = mean_vector(&space, &positions);
            themes.top_topics = ranked_topics(&profile);
            themes.topic_profile = Some(profile);
        }
        Err(e) => {
            tracing::warn!(
                target: "quotesearch::search",
                author = author,
                error = %e,
                "Topic profile unavailable"
            );
        }
    }
    themes
}

/// Element-wise mean of the document vectors at `positions`
fn mean_vector(space: &VectorSpace, positions: &[usize]) -> Vec<f64> {
    let mut sum = vec![0.0; space.topic_count()];
    let mut n = 0usize;
    for v in positions.iter().filter_map(|&i| space.documents().get(i)) {
        for (acc, x) in sum.iter_mut().zip(v) {
            *acc += x;
        }
        n += 1;
    }
    if n > 0 {
        for acc in &mut sum {
            *acc /= n as f64;
        }
    }
    sum
}

/// Topic indices by weight descending, ties by index
fn ranked_topics(profile: &[f64]) -> Vec<usize> {
    let mut topics: Vec<usize> = (0..profile.len()).collect();
    topics.sort_by(|&a, &b| profile[b].total_cmp(&profile[a]).then(a.cmp(&b)));
    topics
}
