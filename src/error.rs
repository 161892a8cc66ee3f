//! Error types for the Satchel library.
//!
//! All errors are represented by the [`SatchelError`] enum. Search is a
//! read-only, idempotent operation, so store failures are safe for the
//! caller to retry.

use std::io;

use thiserror::Error;

/// The main error type for Satchel operations.
#[derive(Error, Debug)]
pub enum SatchelError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query-related errors (parsing, invalid parameters, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// A page size of zero (or below) was requested.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(i64),

    /// The resource store failed to answer a query.
    #[error("Store error: {0}")]
    Store(String),

    /// The windowed fetch returned more rows than the count query admits.
    ///
    /// This indicates a predicate-construction bug in a store backend, not
    /// a user error.
    #[error("Inconsistent count: page holds {returned} items but total is {total}")]
    InconsistentCount {
        /// Items returned in the page.
        returned: u64,
        /// Total reported by the count query.
        total: u64,
    },

    /// Resource validation errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SatchelError.
pub type Result<T> = std::result::Result<T, SatchelError>;

impl SatchelError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        SatchelError::Query(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        SatchelError::Store(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        SatchelError::Resource(msg.into())
    }
}
