//! Search configuration via `quotesearch.toml`
//!
//! On first open of a data directory, a default `quotesearch.toml` is
//! created. To change settings, edit the file and reopen the session.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "quotesearch.toml";

/// Default number of latent topics in the projection.
pub const DEFAULT_TOPIC_COUNT: usize = 10;

/// Default document-frequency floor for the vocabulary.
pub const DEFAULT_MIN_DF: usize = 2;

/// Default minimum records before an author gets a topic profile.
pub const DEFAULT_PROFILE_MIN_RECORDS: usize = 3;

/// Default result cap when the caller gives none.
pub const DEFAULT_LIMIT: usize = 10;

fn default_topic_count() -> usize {
    DEFAULT_TOPIC_COUNT
}

fn default_min_df() -> usize {
    DEFAULT_MIN_DF
}

fn default_profile_min_records() -> usize {
    DEFAULT_PROFILE_MIN_RECORDS
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_stats_top_n() -> usize {
    10
}

fn default_table_file() -> String {
    "quotes.json".to_string()
}

/// Configuration loaded from `quotesearch.toml`.
///
/// # Example
///
/// ```toml
/// topic_count = 10
/// min_df = 2
/// profile_min_records = 3
/// default_limit = 10
/// stats_top_n = 10
/// table_file = "quotes.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Number of latent topics (projection dimensions).
    #[serde(default = "default_topic_count")]
    pub topic_count: usize,
    /// Terms must appear in at least this many documents to enter the vocabulary.
    #[serde(default = "default_min_df")]
    pub min_df: usize,
    /// Authors with fewer records than this get no topic profile.
    #[serde(default = "default_profile_min_records")]
    pub profile_min_records: usize,
    /// Result cap used when a search does not specify one.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// How many top tags/authors corpus statistics report.
    #[serde(default = "default_stats_top_n")]
    pub stats_top_n: usize,
    /// Record table file, relative to the data directory.
    #[serde(default = "default_table_file")]
    pub table_file: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            topic_count: default_topic_count(),
            min_df: default_min_df(),
            profile_min_records: default_profile_min_records(),
            default_limit: default_limit(),
            stats_top_n: default_stats_top_n(),
            table_file: default_table_file(),
        }
    }
}

impl QuoteConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a count is zero or the table file is empty.
    pub fn validate(&self) -> Result<()> {
        if self.topic_count == 0 {
            return Err(Error::invalid_config("topic_count must be at least 1"));
        }
        if self.min_df == 0 {
            return Err(Error::invalid_config("min_df must be at least 1"));
        }
        if self.default_limit == 0 {
            return Err(Error::invalid_config("default_limit must be at least 1"));
        }
        if self.table_file.trim().is_empty() {
            return Err(Error::invalid_config("table_file must not be empty"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# quotesearch configuration
#
# Number of latent topics used for semantic search (default: 10)
topic_count = 10

# A term must occur in at least this many quotes to be indexed (default: 2)
min_df = 2

# Authors need at least this many quotes for a topic profile (default: 3)
profile_min_records = 3

# Result cap when a search gives no limit (default: 10)
default_limit = 10

# Number of top tags/authors reported by stats (default: 10)
stats_top_n = 10

# Record table file, relative to this directory
table_file = "quotes.json"
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: QuoteConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::invalid_config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig { reason } => {
                Error::invalid_config(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Serialization {
            reason: format!("failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
