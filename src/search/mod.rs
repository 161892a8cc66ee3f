//! Search execution and results.

pub mod engine;

pub use self::engine::SearchEngine;
pub use crate::query::{MatchMode, SearchRequest, SortKey};

use serde::Serialize;

use crate::resource::Resource;

/// One page of search results plus the collection-wide totals.
///
/// Serializes with camelCase field names so an HTTP layer can return it
/// directly as the page response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// The resources on this page, in ranked order.
    pub items: Vec<Resource>,
    /// Zero-based page index actually served (after clamping).
    pub page_index: u64,
    /// Page size the window was computed with.
    pub page_size: usize,
    /// Distinct matching resources across all pages.
    pub total_items: u64,
    /// `ceil(total_items / page_size)`; 0 when nothing matched.
    pub total_pages: u64,
}
