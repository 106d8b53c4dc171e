//! Similarity ranking over document vectors
//!
//! Vectors are unit length (or zero), so the dot product is the cosine
//! similarity. Ordering is total: score descending, then document index
//! ascending, with `f64::total_cmp` so NaN never breaks the sort. Scores are
//! stored with the zero sign cleared, since `total_cmp` orders `-0.0` below
//! `0.0` and equal zero scores must still fall back to index order.

use serde::{Deserialize, Serialize};

/// A document position with its similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedDoc {
    /// Position in the record table
    pub index: usize,
    /// Dot-product similarity to the query
    pub score: f64,
}

/// Dot product of two equal-length vectors
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Rank documents by similarity to `query`, keeping at most `top_n`.
///
/// Every document is scored; zero-similarity documents are still eligible.
pub fn rank<V: AsRef<[f64]>>(query: &[f64], documents: &[V], top_n: usize) -> Vec<RankedDoc> {
    if top_n == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<RankedDoc> = documents
        .iter()
        .enumerate()
        .map(|(index, doc)| RankedDoc {
            index,
            // -0.0 + 0.0 == +0.0
            score: dot(query, doc.as_ref()) + 0.0,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked.truncate(top_n);
    ranked
}
