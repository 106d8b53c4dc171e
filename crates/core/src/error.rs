//! Error types for quotesearch
//!
//! Every fallible operation in the workspace returns [`Result`]. Errors are
//! structured so the request-serving layer can map them onto its own
//! status codes without parsing messages.
//!
//! | Category | Variants | Description |
//! |----------|----------|-------------|
//! | Data | `NoData` | No record table has been collected yet |
//! | Model | `ModelFit` | Vector space cannot be built from the corpus |
//! | Contract | `InvalidMode`, `InvalidInput` | Caller passed something unsupported |
//! | Config | `InvalidConfig` | `quotesearch.toml` unreadable or invalid |
//! | System | `Io`, `Serialization`, `Corruption` | Persistence failures |

use serde::{Deserialize, Serialize};
use std::io;

/// Result type alias for quotesearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for quotesearch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Data ====================
    /// No record table is loaded (or the loaded table is empty)
    #[error("no quotes available, collect quotes first")]
    NoData,

    // ==================== Model ====================
    /// The vector space could not be fitted
    #[error("model fit failed: {reason}")]
    ModelFit { reason: String },

    // ==================== Contract ====================
    /// Unrecognized search mode
    #[error("invalid search mode: {mode}")]
    InvalidMode { mode: String },

    /// Invalid parameter
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== Config ====================
    /// Configuration could not be read or failed validation
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    // ==================== System ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Persisted data is structurally inconsistent
    #[error("data corruption: {reason}")]
    Corruption { reason: String },
}

impl Error {
    /// Build a `ModelFit` error
    pub fn model_fit(reason: impl Into<String>) -> Self {
        Error::ModelFit {
            reason: reason.into(),
        }
    }

    /// Build an `InvalidInput` error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Build an `InvalidConfig` error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Build a `Corruption` error
    pub fn corruption(reason: impl Into<String>) -> Self {
        Error::Corruption {
            reason: reason.into(),
        }
    }

    /// True if this error means "no data collected yet"
    pub fn is_no_data(&self) -> bool {
        matches!(self, Error::NoData)
    }

    /// True if semantic search is unavailable for this corpus
    pub fn is_model_fit(&self) -> bool {
        matches!(self, Error::ModelFit { .. })
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}
