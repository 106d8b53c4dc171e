//! Indexing and similarity search over quote records
//!
//! This crate provides:
//! - Text normalizer with stopword removal and lemmatization
//! - TF-IDF term weighting over a fixed vocabulary
//! - Low-rank topic projection (SVD) and the fitted `VectorSpace`
//! - Dot-product ranker
//! - `VectorSpaceCache` keyed by table snapshot
//! - Per-author theme aggregation and corpus statistics
//!
//! # Usage
//!
//! ```
//! use quotesearch_search::{normalize, FitParams, VectorSpace};
//!
//! let texts = [
//!     "Courage faces fear",
//!     "Fear bows to courage",
//!     "Love is kind",
//!     "Kind love heals",
//! ];
//! let space = VectorSpace::fit_texts(texts, &FitParams::new(2)).unwrap();
//! let hits = space.most_similar("courage", 2);
//! assert_eq!(hits.len(), 2);
//! assert_eq!(normalize("Courage is the key"), vec!["courage", "key"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod frequency;
pub mod lemmatizer;
pub mod normalizer;
pub mod projection;
pub mod ranker;
pub mod space;
pub mod stats;
pub mod stopwords;
pub mod themes;
pub mod weighting;

// Re-export commonly used types
pub use cache::VectorSpaceCache;
pub use frequency::{ranked_counts, top_counts, Frequency};
pub use lemmatizer::lemmatize;
pub use normalizer::{normalize, normalize_joined, NormalizedDocument};
pub use projection::ProjectionModel;
pub use ranker::{dot, rank, RankedDoc};
pub use space::{DocumentVectors, FitParams, TopicTerms, VectorSpace, WeightedTerm};
pub use stats::{corpus_stats, CorpusStats};
pub use stopwords::is_stopword;
pub use themes::{author_themes, AuthorThemes};
pub use weighting::TermWeightModel;
