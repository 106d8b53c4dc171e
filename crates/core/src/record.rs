//! Quote records and the record table
//!
//! A [`RecordTable`] is the unit handed from the collector to the search core
//! and the unit of persistence. Records are immutable once built; a table is
//! replaced wholesale, never edited in place.

use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// One collected quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Quote text
    pub text: String,

    /// Author display name
    pub author: String,

    /// Link to the author's "about" page, when the source had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,

    /// Tags in source order (no duplicates within one record)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record {
    /// Create a record with no tags and no author link
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Record {
            text: text.into(),
            author: author.into(),
            author_link: None,
            tags: vec![],
        }
    }

    /// Builder: set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set author link
    pub fn with_author_link(mut self, link: impl Into<String>) -> Self {
        self.author_link = Some(link.into());
        self
    }

    /// True if the record carries `tag` exactly
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// ============================================================================
// RecordTable
// ============================================================================

/// Ordered, position-indexable collection of records
///
/// Row order is collection order. It carries no meaning for search and is
/// only relied upon for reproducible output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    /// Build a table from records in collection order
    pub fn new(records: Vec<Record>) -> Self {
        RecordTable { records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate records in table order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// All records as a slice
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the table, returning its records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for RecordTable {
    fn from(records: Vec<Record>) -> Self {
        RecordTable::new(records)
    }
}

impl FromIterator<Record> for RecordTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        RecordTable::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
