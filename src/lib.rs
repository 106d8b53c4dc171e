//! quotesearch - search and theme analysis over collected quotes
//!
//! Quotes (text, author, tags) are matched by author, tag or keyword, or
//! ranked by semantic similarity in a latent topic space built from the
//! collection itself.
//!
//! # Quick Start
//!
//! ```ignore
//! use quotesearch::{SearchMode, Session};
//!
//! // Open a data directory (writes quotesearch.toml if missing)
//! let session = Session::open("/path/to/data")?;
//!
//! // Rank quotes by similarity
//! let hits = session.search(SearchMode::Semantic, "courage in hard times", false, Some(5))?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Session`], or the [`Executor`] for the
//! serializable command interface. Normalization and model internals live
//! in `quotesearch-search` and are not re-exported here.

// Re-export the public API from quotesearch-executor
pub use quotesearch_executor::*;
