//! Command enum defining all quotesearch operations.
//!
//! Commands are:
//! - **Self-contained**: every parameter needed for execution is in the variant
//! - **Serializable**: the serving layer can build them straight from requests
//! - **Pure data**: no closures or executable code

use serde::{Deserialize, Serialize};

use crate::types::SearchMode;

/// A command is a self-contained, serializable operation.
///
/// | Command | Output |
/// |---------|--------|
/// | `Search` | `Output::SearchResults` |
/// | `AuthorThemes` | `Output::AuthorThemes` |
/// | `Stats` | `Output::Stats` |
/// | `Topics` | `Output::Topics` |
///
/// Optional counts fall back to the session's [`QuoteConfig`](quotesearch_core::QuoteConfig).
///
/// # Example
///
/// ```
/// use quotesearch_executor::{Command, SearchMode};
///
/// let cmd = Command::Search {
///     mode: SearchMode::Keyword,
///     query: "courage".into(),
///     exact: false,
///     limit: Some(5),
/// };
/// # let _ = cmd;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Match records by author, tag, keyword or similarity.
    /// Returns: `Output::SearchResults`
    Search {
        /// Match mode
        mode: SearchMode,
        /// Query string
        query: String,
        /// Exact match (author and tag modes)
        #[serde(default)]
        exact: bool,
        /// Result cap (default: `default_limit`)
        #[serde(default)]
        limit: Option<usize>,
    },

    /// Tag frequencies and topic profile of one author.
    /// Returns: `Output::AuthorThemes`
    AuthorThemes {
        /// Author, matched exactly
        author: String,
    },

    /// Corpus totals and most frequent tags and authors.
    /// Returns: `Output::Stats`
    Stats {
        /// Entries per ranking (default: `stats_top_n`)
        #[serde(default)]
        top_n: Option<usize>,
    },

    /// Highest-weighted terms per topic.
    /// Returns: `Output::Topics`
    Topics {
        /// Terms per topic (default: 10)
        #[serde(default)]
        terms_per_topic: Option<usize>,
    },
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::AuthorThemes { .. } => "author_themes",
            Command::Stats { .. } => "stats",
            Command::Topics { .. } => "topics",
        }
    }
}
