//! Session state: config, current record table and vector space cache.
//!
//! A [`Session`] owns one table snapshot at a time. Replacing the table
//! invalidates the cached vector space; searches hold their own `Arc` to the
//! snapshot they started with, so they never mix vectors from one table with
//! records from another.
//!
//! # Usage
//!
//! ```ignore
//! use quotesearch_executor::{SearchMode, Session};
//!
//! let session = Session::open("/path/to/data")?;
//! let hits = session.search(SearchMode::Semantic, "courage", false, Some(5))?;
//! ```

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use quotesearch_core::{
    Error, JsonTableStore, QuoteConfig, RecordTable, Result, TableStore, CONFIG_FILE_NAME,
};
use quotesearch_search::{AuthorThemes, CorpusStats, FitParams, VectorSpace, VectorSpaceCache};

use crate::handlers;
use crate::handlers::topics::DEFAULT_TERMS_PER_TOPIC;
use crate::types::{SearchHit, SearchMode, TopicSummary};

/// Shared query state for one data set.
///
/// `Session` is `Send + Sync`; wrap it in an `Arc` to share it between
/// request handlers.
#[derive(Debug)]
pub struct Session {
    config: QuoteConfig,
    table: RwLock<Option<Arc<RecordTable>>>,
    cache: VectorSpaceCache,
}

impl Session {
    /// Create a session with no table.
    pub fn new(config: QuoteConfig) -> Self {
        let params = FitParams::new(config.topic_count).with_min_df(config.min_df);
        Self {
            config,
            table: RwLock::new(None),
            cache: VectorSpaceCache::new(params),
        }
    }

    /// Create a session over an existing table.
    pub fn with_table(config: QuoteConfig, table: RecordTable) -> Self {
        let session = Self::new(config);
        *session.table.write() = Some(Arc::new(table));
        session
    }

    /// Open a data directory.
    ///
    /// Reads `quotesearch.toml` (writing the default if missing), then loads
    /// the table file it names. A missing table file leaves the session
    /// without data.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        QuoteConfig::write_default_if_missing(&config_path)?;
        let config = QuoteConfig::from_file(&config_path)?;

        let store = JsonTableStore::new(dir.join(&config.table_file));
        let session = Self::new(config);
        let loaded = session.load(&store)?;

        tracing::info!(
            target: "quotesearch::session",
            dir = %dir.display(),
            loaded = loaded,
            records = session.record_count(),
            "Session opened"
        );
        Ok(session)
    }

    /// Session configuration.
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// The vector space cache.
    pub fn cache(&self) -> &VectorSpaceCache {
        &self.cache
    }

    // =========================================================================
    // Table lifecycle
    // =========================================================================

    /// Load the table from `store`. Returns `false` if the store was empty,
    /// in which case the current table is kept.
    pub fn load(&self, store: &dyn TableStore) -> Result<bool> {
        match store.load()? {
            Some(table) => {
                self.replace_table(table);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write the current table to `store`.
    ///
    /// # Errors
    ///
    /// Returns `NoData` if no table is loaded.
    pub fn save(&self, store: &dyn TableStore) -> Result<()> {
        let table = self.table.read().clone().ok_or(Error::NoData)?;
        store.save(&table)
    }

    /// Swap in a new table and drop the cached vector space.
    pub fn replace_table(&self, table: RecordTable) {
        let records = table.len();
        *self.table.write() = Some(Arc::new(table));
        self.cache.invalidate();
        tracing::info!(
            target: "quotesearch::session",
            records = records,
            "Record table replaced"
        );
    }

    /// Current table snapshot.
    ///
    /// # Errors
    ///
    /// Returns `NoData` if no table is loaded or it is empty.
    pub fn table(&self) -> Result<Arc<RecordTable>> {
        match self.table.read().as_ref() {
            Some(table) if !table.is_empty() => Ok(Arc::clone(table)),
            _ => Err(Error::NoData),
        }
    }

    /// True if a non-empty table is loaded.
    pub fn has_data(&self) -> bool {
        self.table().is_ok()
    }

    /// Records in the current table (0 without data).
    pub fn record_count(&self) -> usize {
        self.table.read().as_ref().map(|t| t.len()).unwrap_or(0)
    }

    /// Vector space of the current table, fitted on first use.
    pub fn vector_space(&self) -> Result<Arc<VectorSpace>> {
        let table = self.table()?;
        self.cache.get_or_fit(&table)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Search the current table. `limit` defaults to `default_limit`.
    pub fn search(
        &self,
        mode: SearchMode,
        query: &str,
        exact: bool,
        limit: Option<usize>,
    ) -> Result<Vec<SearchHit>> {
        let table = self.table()?;
        let limit = limit.unwrap_or(self.config.default_limit);
        handlers::search::search(&table, &self.cache, mode, query, exact, limit)
    }

    /// Themes of `author` (exact match).
    pub fn author_themes(&self, author: &str) -> Result<AuthorThemes> {
        let table = self.table()?;
        Ok(handlers::themes::author_themes(
            &table,
            &self.cache,
            author,
            self.config.profile_min_records,
        ))
    }

    /// Corpus statistics. `top_n` defaults to `stats_top_n`.
    pub fn stats(&self, top_n: Option<usize>) -> Result<CorpusStats> {
        let table = self.table()?;
        Ok(handlers::stats::stats(
            &table,
            top_n.unwrap_or(self.config.stats_top_n),
        ))
    }

    /// Top terms per topic. `terms_per_topic` defaults to 10.
    pub fn topics(&self, terms_per_topic: Option<usize>) -> Result<TopicSummary> {
        let table = self.table()?;
        handlers::topics::topics(
            &table,
            &self.cache,
            terms_per_topic.unwrap_or(DEFAULT_TERMS_PER_TOPIC),
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(QuoteConfig::default())
    }
}
