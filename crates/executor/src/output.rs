//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant.

use serde::{Deserialize, Serialize};

use quotesearch_search::{AuthorThemes, CorpusStats};

use crate::types::{SearchHit, TopicSummary};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// ```text
/// match executor.execute(Command::Stats { top_n: None })? {
///     Output::Stats(stats) => println!("{} quotes", stats.total_records),
///     _ => unreachable!("Stats always returns Stats"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Matched records, in result order
    SearchResults(Vec<SearchHit>),

    /// Themes of one author
    AuthorThemes(AuthorThemes),

    /// Corpus statistics
    Stats(CorpusStats),

    /// Topic terms
    Topics(TopicSummary),
}
