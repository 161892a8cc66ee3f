//! Query values for searching resources.

pub mod predicate;
pub mod sort;

pub use self::predicate::ResourcePredicate;
pub use self::sort::comparator;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SatchelError;

/// How per-token matches combine across a multi-token query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every token must match (logical AND).
    #[default]
    All,
    /// At least one token must match (logical OR).
    Any,
}

impl FromStr for MatchMode {
    type Err = SatchelError;

    /// Parse a match mode. `"and"` and `"or"` are accepted alongside
    /// `"all"` and `"any"` for compatibility with the original upload
    /// frontend. Unknown values are errors rather than a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(MatchMode::All),
            "any" | "or" => Ok(MatchMode::Any),
            other => Err(SatchelError::query(format!("unknown match mode: {other}"))),
        }
    }
}

/// Requested result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Title matches before attachment-only matches, newest first within
    /// each tier.
    #[default]
    Relevance,
    /// Creation time, newest first.
    Date,
    /// Title, ascending lexicographic.
    Name,
}

impl FromStr for SortKey {
    type Err = SatchelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "date" => Ok(SortKey::Date),
            "name" => Ok(SortKey::Name),
            other => Err(SatchelError::query(format!("unknown sort key: {other}"))),
        }
    }
}

/// A single search invocation: query text, match mode, ordering, and page
/// window. Transient; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw query text; empty or whitespace-only means "browse all".
    pub text: String,
    /// Token combination mode.
    pub mode: MatchMode,
    /// Result ordering.
    pub sort: SortKey,
    /// Zero-based page index. Negative values are clamped to 0 by the
    /// engine rather than rejected.
    pub page_index: i64,
    /// Page size; must be positive.
    pub page_size: usize,
}

impl SearchRequest {
    /// Default page size, matching the original API default.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Create a new search request with default mode, sort, and paging.
    pub fn new<S: Into<String>>(text: S) -> Self {
        SearchRequest {
            text: text.into(),
            mode: MatchMode::default(),
            sort: SortKey::default(),
            page_index: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the match mode.
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the sort key.
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the zero-based page index.
    pub fn page_index(mut self, page_index: i64) -> Self {
        self.page_index = page_index;
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
