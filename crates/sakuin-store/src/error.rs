//! Error types for the search facade

use sakuin_index::ImportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Document cannot be stored without a stable id
    #[error("document has no id")]
    MissingId,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Cached index describes a different set of documents than the store
    #[error("index cache does not match the store ({missing} missing, {extra} extra)")]
    CacheMismatch { missing: usize, extra: usize },

    #[error("invalid index data: {0}")]
    Import(#[from] ImportError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
