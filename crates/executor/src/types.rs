//! Supporting types for commands and outputs.
//!
//! All types are serializable so the serving layer can pass them through
//! unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use quotesearch_core::{Error, Record};
use quotesearch_search::TopicTerms;

// =============================================================================
// Search Mode
// =============================================================================

/// How a search query is matched against records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match the author field
    Author,
    /// Match any tag
    Tag,
    /// Case-insensitive containment in the text
    Keyword,
    /// Similarity in the fitted vector space
    Semantic,
}

impl SearchMode {
    /// All modes, in declaration order.
    pub const ALL: [SearchMode; 4] = [
        SearchMode::Author,
        SearchMode::Tag,
        SearchMode::Keyword,
        SearchMode::Semantic,
    ];

    /// Lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Author => "author",
            SearchMode::Tag => "tag",
            SearchMode::Keyword => "keyword",
            SearchMode::Semantic => "semantic",
        }
    }

    /// Whether hits carry a similarity score.
    pub fn is_scored(&self) -> bool {
        matches!(self, SearchMode::Semantic)
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(SearchMode::Author),
            "tag" => Ok(SearchMode::Tag),
            "keyword" => Ok(SearchMode::Keyword),
            "semantic" => Ok(SearchMode::Semantic),
            other => Err(Error::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Search Results
// =============================================================================

/// A matched record, with its similarity score in semantic mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matched record
    pub record: Record,
    /// Similarity score (semantic mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SearchHit {
    /// Unscored hit.
    pub fn new(record: Record) -> Self {
        SearchHit {
            record,
            score: None,
        }
    }

    /// Hit with a similarity score.
    pub fn scored(record: Record, score: f64) -> Self {
        SearchHit {
            record,
            score: Some(score),
        }
    }
}

// =============================================================================
// Topics
// =============================================================================

/// Top terms per topic plus explained variance of the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Per-topic terms
    pub topics: Vec<TopicTerms>,
    /// Total explained variance ratio
    pub explained_variance_ratio: f64,
}
