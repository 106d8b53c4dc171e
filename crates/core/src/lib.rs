//! Core types for quotesearch
//!
//! This crate provides:
//! - [`Record`] and [`RecordTable`], the data handed to the search core
//! - [`Error`] and [`Result`] shared by every crate in the workspace
//! - [`QuoteConfig`], loaded from `quotesearch.toml`
//! - [`TableStore`] with columnar JSON and in-memory implementations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod record;
pub mod store;

pub use config::{QuoteConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use record::{Record, RecordTable};
pub use store::{ColumnarTable, JsonTableStore, MemoryTableStore, TableStore};
