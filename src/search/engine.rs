//! The search executor.

use tracing::debug;

use crate::analysis::tokenize;
use crate::error::{Result, SatchelError};
use crate::query::{ResourcePredicate, SearchRequest};
use crate::search::SearchPage;
use crate::store::{PageWindow, ResourceStore};

/// Executes search requests against a resource store.
///
/// The engine is stateless and side-effect free: it holds no caches or
/// indices, all request values are immutable, and concurrent calls to
/// [`search`](SearchEngine::search) are independent. One predicate value is
/// built per request and handed to both store operations, so the page and
/// the total can only diverge by whatever snapshot skew the store itself
/// allows.
#[derive(Debug)]
pub struct SearchEngine<S: ResourceStore> {
    store: S,
}

impl<S: ResourceStore> SearchEngine<S> {
    /// Create a new engine over the given store.
    pub fn new(store: S) -> Self {
        SearchEngine { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute one search: tokenize, match, rank, window, count.
    ///
    /// A zero page size is rejected with
    /// [`SatchelError::InvalidPageSize`]; a negative page index is clamped
    /// to 0. Either a complete [`SearchPage`] is returned or an error is
    /// signaled; there are no partial results.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        if request.page_size == 0 {
            return Err(SatchelError::InvalidPageSize(request.page_size as i64));
        }
        // Permissive boundary: page=-3 means page 0, not an error.
        let page_index = request.page_index.max(0) as u64;
        let page_size = request.page_size;

        let tokens = tokenize(&request.text);
        let predicate = ResourcePredicate::new(tokens, request.mode);
        debug!(
            tokens = predicate.tokens().len(),
            mode = ?request.mode,
            sort = ?request.sort,
            page_index,
            page_size,
            "executing search"
        );

        let offset = (page_index as usize).saturating_mul(page_size);
        let window = PageWindow::new(offset, page_size);
        let items = self.store.fetch_page(&predicate, request.sort, window)?;
        let total_items = self.store.count_distinct(&predicate)?;

        // A page larger than the total means the two queries disagreed on
        // the predicate; never return it silently.
        if total_items < items.len() as u64 {
            return Err(SatchelError::InconsistentCount {
                returned: items.len() as u64,
                total: total_items,
            });
        }

        let total_pages = total_items.div_ceil(page_size as u64);
        debug!(total_items, total_pages, returned = items.len(), "search complete");

        Ok(SearchPage {
            items,
            page_index,
            page_size,
            total_items,
            total_pages,
        })
    }
}
