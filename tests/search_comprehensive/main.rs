//! Search Comprehensive Test Suite
//!
//! End-to-end guarantees of the quotesearch public API.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Normalization** (determinism, idempotence, filtering)
//! - **Tier 2: Search Modes** (author, tag, keyword, semantic, limits)
//! - **Tier 3: Vector Space** (unit vectors, dimension, recall, degenerate corpora)
//! - **Tier 4: Themes and Stats** (profile floor, tag ordering, totals)
//! - **Tier 5: Persistence** (data directories, columnar store)
//! - **Tier 6: Concurrency** (one fit per snapshot, replacement under load)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test search_comprehensive
//!
//! # Run specific tier
//! cargo test --test search_comprehensive tier3
//! ```

mod test_utils;

// Tier 1: Normalization
mod tier1_normalization;

// Tier 2: Search Modes
mod tier2_search_modes;

// Tier 3: Vector Space
mod tier3_vector_space;

// Tier 4: Themes and Stats
mod tier4_themes_stats;

// Tier 5: Persistence
mod tier5_persistence;

// Tier 6: Concurrency
mod tier6_concurrency;
