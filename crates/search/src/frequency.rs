//! Value frequency counting with a stable order

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A value and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    /// Counted value
    pub value: String,
    /// Occurrences
    pub count: usize,
}

/// Count values, ordered by count descending, ties by first occurrence.
pub fn ranked_counts<I, S>(values: I) -> Vec<Frequency>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // (first_seen, count) per value
    let mut seen: HashMap<String, (usize, usize)> = HashMap::new();
    for value in values {
        let next = seen.len();
        seen.entry(value.as_ref().to_string())
            .or_insert((next, 0))
            .1 += 1;
    }

    let mut counted: Vec<(String, usize, usize)> = seen
        .into_iter()
        .map(|(value, (first, count))| (value, first, count))
        .collect();
    counted.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));
    counted
        .into_iter()
        .map(|(value, _, count)| Frequency { value, count })
        .collect()
}

/// [`ranked_counts`] truncated to the `n` most frequent values.
pub fn top_counts<I, S>(values: I, n: usize) -> Vec<Frequency>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = ranked_counts(values);
    counts.truncate(n);
    counts
}
