//! Record table persistence
//!
//! The search core only needs `load` and `save` of a whole table. Tables are
//! stored column-wise: one array per field, all of equal length.
//!
//! ```json
//! {
//!   "text": ["...", "..."],
//!   "author": ["...", "..."],
//!   "author_link": ["https://...", null],
//!   "tags": [["life"], ["love", "wisdom"]]
//! }
//! ```

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::{Record, RecordTable};

// ============================================================================
// TableStore Trait
// ============================================================================

/// Load/save interface for the record table
///
/// `load` returns `Ok(None)` when nothing has been collected yet.
///
/// # Thread Safety
///
/// Stores must be Send + Sync so a session can be shared across threads.
pub trait TableStore: Send + Sync {
    /// Load the stored table, if any
    fn load(&self) -> Result<Option<RecordTable>>;

    /// Replace the stored table
    fn save(&self, table: &RecordTable) -> Result<()>;
}

// ============================================================================
// Columnar layout
// ============================================================================

/// Column-wise representation of a [`RecordTable`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnarTable {
    /// Quote texts
    pub text: Vec<String>,
    /// Author names
    pub author: Vec<String>,
    /// Author about-page links
    #[serde(default)]
    pub author_link: Vec<Option<String>>,
    /// Tag lists
    pub tags: Vec<Vec<String>>,
}

impl ColumnarTable {
    /// Number of rows, or `Corruption` if the columns disagree.
    ///
    /// An absent `author_link` column is accepted and read as all-null.
    pub fn row_count(&self) -> Result<usize> {
        let rows = self.text.len();
        let links_ok = self.author_link.is_empty() || self.author_link.len() == rows;
        if self.author.len() != rows || self.tags.len() != rows || !links_ok {
            return Err(Error::corruption(format!(
                "column length mismatch: text={}, author={}, author_link={}, tags={}",
                rows,
                self.author.len(),
                self.author_link.len(),
                self.tags.len()
            )));
        }
        Ok(rows)
    }

    /// Convert back into a row-oriented table
    pub fn into_table(self) -> Result<RecordTable> {
        let rows = self.row_count()?;
        let mut links = self.author_link.into_iter();
        let records = self
            .text
            .into_iter()
            .zip(self.author)
            .zip(self.tags)
            .map(|((text, author), tags)| Record {
                text,
                author,
                author_link: links.next().flatten(),
                tags,
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(records.len(), rows);
        Ok(RecordTable::new(records))
    }
}

impl From<&RecordTable> for ColumnarTable {
    fn from(table: &RecordTable) -> Self {
        let mut columns = ColumnarTable {
            text: Vec::with_capacity(table.len()),
            author: Vec::with_capacity(table.len()),
            author_link: Vec::with_capacity(table.len()),
            tags: Vec::with_capacity(table.len()),
        };
        for record in table {
            columns.text.push(record.text.clone());
            columns.author.push(record.author.clone());
            columns.author_link.push(record.author_link.clone());
            columns.tags.push(record.tags.clone());
        }
        columns
    }
}

// ============================================================================
// JsonTableStore
// ============================================================================

/// File-backed store writing the columnar JSON layout
#[derive(Debug, Clone)]
pub struct JsonTableStore {
    path: PathBuf,
}

impl JsonTableStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonTableStore { path: path.into() }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TableStore for JsonTableStore {
    fn load(&self) -> Result<Option<RecordTable>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    target: "quotesearch::store",
                    path = %self.path.display(),
                    "Record table file not found"
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let columns: ColumnarTable = serde_json::from_str(&content)?;
        let table = columns.into_table()?;
        tracing::info!(
            target: "quotesearch::store",
            path = %self.path.display(),
            records = table.len(),
            "Loaded record table"
        );
        Ok(Some(table))
    }

    fn save(&self, table: &RecordTable) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string(&ColumnarTable::from(table))?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::info!(
            target: "quotesearch::store",
            path = %self.path.display(),
            records = table.len(),
            "Saved record table"
        );
        Ok(())
    }
}

// ============================================================================
// MemoryTableStore
// ============================================================================

/// In-process store, useful for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    table: Mutex<Option<RecordTable>>,
}

impl MemoryTableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `table`
    pub fn with_table(table: RecordTable) -> Self {
        MemoryTableStore {
            table: Mutex::new(Some(table)),
        }
    }
}

impl TableStore for MemoryTableStore {
    fn load(&self) -> Result<Option<RecordTable>> {
        Ok(self.table.lock().clone())
    }

    fn save(&self, table: &RecordTable) -> Result<()> {
        *self.table.lock() = Some(table.clone());
        Ok(())
    }
}
