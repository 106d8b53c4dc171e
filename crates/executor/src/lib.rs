//! # quotesearch executor
//!
//! The public API for quotesearch: multi-mode search, author themes, corpus
//! statistics and topic terms over a collected quote table.
//!
//! This is the only crate callers need to import. It provides:
//! - [`Session`] - the stateful query interface
//! - [`Command`]/[`Output`] - serializable command interface for the serving layer
//! - [`Executor`] - dispatches commands to a session
//!
//! ## Quick Start
//!
//! ```
//! use quotesearch_executor::{QuoteConfig, Record, RecordTable, SearchMode, Session};
//!
//! let table: RecordTable = vec![
//!     Record::new("Be yourself; everyone else is already taken.", "Oscar Wilde")
//!         .with_tags(["be-yourself", "inspirational"]),
//!     Record::new("So many books, so little time.", "Frank Zappa").with_tags(["books"]),
//! ]
//! .into();
//!
//! let session = Session::with_table(QuoteConfig::default(), table);
//! let hits = session.search(SearchMode::Author, "wilde", false, None).unwrap();
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! ## Search Modes
//!
//! | Mode | `exact = true` | `exact = false` |
//! |------|----------------|-----------------|
//! | **author** | author equals query | author contains query, any case |
//! | **tag** | some tag equals query | some tag starts with query, any case |
//! | **keyword** | text contains query, any case | same |
//! | **semantic** | ranked by similarity, with scores | same |

#![warn(missing_docs)]

mod command;
mod executor;
mod output;
mod session;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything callers need is re-exported here
// =============================================================================

pub use command::Command;
pub use executor::Executor;
pub use output::Output;
pub use session::Session;
pub use types::{SearchHit, SearchMode, TopicSummary};

pub use handlers::search::search;

pub use quotesearch_core::{
    ColumnarTable, Error, JsonTableStore, MemoryTableStore, QuoteConfig, Record, RecordTable,
    Result, TableStore,
};
pub use quotesearch_search::{
    AuthorThemes, CorpusStats, FitParams, Frequency, RankedDoc, TopicTerms, VectorSpace,
    VectorSpaceCache, WeightedTerm,
};
