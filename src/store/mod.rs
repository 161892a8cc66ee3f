//! Resource store abstraction.
//!
//! The search engine consumes a single capability from its store: given a
//! predicate and an ordering, return a distinct, ordered, windowed slice of
//! matching resources, and given the same predicate, return the distinct
//! match count. Backends can be swapped without touching the engine; the
//! crate ships [`MemoryResourceStore`] for embedding and tests.

pub mod memory;

pub use self::memory::MemoryResourceStore;

use crate::error::Result;
use crate::query::{ResourcePredicate, SortKey};
use crate::resource::Resource;

/// A half-open pagination window `[offset, offset + limit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of matching resources to skip.
    pub offset: usize,
    /// Maximum number of resources to return.
    pub limit: usize,
}

impl PageWindow {
    /// Create a new window.
    pub fn new(offset: usize, limit: usize) -> Self {
        PageWindow { offset, limit }
    }
}

/// Queryable collection of resources.
///
/// Implementations must evaluate the same predicate identically in both
/// operations, and must deduplicate by resource identity *before* applying
/// the window — a backend that flattens attachments into one row per match
/// (a SQL join, say) would otherwise corrupt page boundaries. Backends
/// without snapshot isolation may let the two operations of one logical
/// search observe different snapshots under concurrent writes; that read
/// skew is accepted.
///
/// Failures surface as [`crate::error::SatchelError::Store`]. Search is
/// read-only and idempotent, so callers may retry.
pub trait ResourceStore: Send + Sync {
    /// Fetch the distinct resources satisfying `predicate`, ordered by
    /// `sort`, restricted to `window`.
    fn fetch_page(
        &self,
        predicate: &ResourcePredicate,
        sort: SortKey,
        window: PageWindow,
    ) -> Result<Vec<Resource>>;

    /// Count the distinct resources satisfying `predicate`, ignoring any
    /// window.
    fn count_distinct(&self, predicate: &ResourcePredicate) -> Result<u64>;
}
