//! In-memory resource store.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Result, SatchelError};
use crate::query::{ResourcePredicate, SortKey, comparator};
use crate::resource::{Resource, ResourceId};
use crate::store::{PageWindow, ResourceStore};

/// An in-memory resource store backed by a read-write lock.
///
/// Fast and non-persistent; meant for embedding, prototyping, and tests.
/// Each trait call takes the read lock once, so the windowed fetch and the
/// count query of one search may observe different snapshots if writes
/// happen in between.
#[derive(Debug, Default)]
pub struct MemoryResourceStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    resources: BTreeMap<ResourceId, Resource>,
    next_resource_id: ResourceId,
    next_attachment_id: u64,
}

impl MemoryResourceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        MemoryResourceStore::default()
    }

    /// Insert a resource, assigning it and its attachments fresh ids.
    ///
    /// Returns the assigned resource id. A blank title is rejected.
    pub fn insert(&self, mut resource: Resource) -> Result<ResourceId> {
        if resource.title.trim().is_empty() {
            return Err(SatchelError::resource("title must not be blank"));
        }

        let mut inner = self.inner.write();
        inner.next_resource_id += 1;
        let id = inner.next_resource_id;
        resource.id = id;
        for attachment in &mut resource.attachments {
            inner.next_attachment_id += 1;
            attachment.id = inner.next_attachment_id;
        }
        debug!(id, title = %resource.title, "insert resource");
        inner.resources.insert(id, resource);
        Ok(id)
    }

    /// Get a resource by id.
    pub fn get(&self, id: ResourceId) -> Option<Resource> {
        self.inner.read().resources.get(&id).cloned()
    }

    /// Remove a resource by id, destroying its attachments with it.
    ///
    /// Returns true when the resource existed.
    pub fn remove(&self, id: ResourceId) -> bool {
        let removed = self.inner.write().resources.remove(&id);
        if removed.is_some() {
            debug!(id, "remove resource");
        }
        removed.is_some()
    }

    /// All resources in id order.
    pub fn all(&self) -> Vec<Resource> {
        self.inner.read().resources.values().cloned().collect()
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.inner.read().resources.len()
    }

    /// True when the store holds no resources.
    pub fn is_empty(&self) -> bool {
        self.inner.read().resources.is_empty()
    }
}

impl ResourceStore for MemoryResourceStore {
    fn fetch_page(
        &self,
        predicate: &ResourcePredicate,
        sort: SortKey,
        window: PageWindow,
    ) -> Result<Vec<Resource>> {
        let inner = self.inner.read();
        // Matching is evaluated once per resource, so the hits are distinct
        // by construction.
        let mut hits: Vec<&Resource> = inner
            .resources
            .values()
            .filter(|r| predicate.matches(r))
            .collect();

        let cmp = comparator(sort, predicate);
        hits.sort_by(|a, b| cmp(a, b));

        Ok(hits
            .into_iter()
            .skip(window.offset)
            .take(window.limit)
            .cloned()
            .collect())
    }

    fn count_distinct(&self, predicate: &ResourcePredicate) -> Result<u64> {
        let inner = self.inner.read();
        Ok(inner
            .resources
            .values()
            .filter(|r| predicate.matches(r))
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MatchMode;
    use crate::resource::Attachment;

    fn predicate(tokens: &[&str], mode: MatchMode) -> ResourcePredicate {
        ResourcePredicate::new(tokens.iter().map(|t| t.to_string()).collect(), mode)
    }

    #[test]
    fn test_insert_assigns_ids() {
        let store = MemoryResourceStore::new();
        let id1 = store
            .insert(Resource::new("OS Notes").with_attachment(Attachment::new("a.pdf", "s1")))
            .unwrap();
        let id2 = store.insert(Resource::new("Algebra")).unwrap();

        assert_ne!(id1, id2);
        let stored = store.get(id1).unwrap();
        assert_eq!(stored.id, id1);
        assert_ne!(stored.attachments[0].id, 0);
    }

    #[test]
    fn test_insert_rejects_blank_title() {
        let store = MemoryResourceStore::new();
        assert!(matches!(
            store.insert(Resource::new("   ")),
            Err(SatchelError::Resource(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_cascades_attachments() {
        let store = MemoryResourceStore::new();
        let id = store
            .insert(Resource::new("OS Notes").with_attachment(Attachment::new("a.pdf", "s1")))
            .unwrap();
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_fetch_page_filters_sorts_and_windows() {
        let store = MemoryResourceStore::new();
        for title in ["OS Lab 1", "OS Lab 2", "OS Lab 3", "Algebra"] {
            store.insert(Resource::new(title)).unwrap();
        }

        let pred = predicate(&["os"], MatchMode::All);
        let page = store
            .fetch_page(&pred, SortKey::Name, PageWindow::new(1, 2))
            .unwrap();
        let titles: Vec<&str> = page.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["OS Lab 2", "OS Lab 3"]);
        assert_eq!(store.count_distinct(&pred).unwrap(), 3);
    }

    #[test]
    fn test_multi_attachment_match_stays_distinct() {
        let store = MemoryResourceStore::new();
        store
            .insert(
                Resource::new("Week 3")
                    .with_attachment(Attachment::new("os-slides.pdf", "s1"))
                    .with_attachment(Attachment::new("os-review.pdf", "s2")),
            )
            .unwrap();

        let pred = predicate(&["os"], MatchMode::Any);
        let page = store
            .fetch_page(&pred, SortKey::Date, PageWindow::new(0, 10))
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(store.count_distinct(&pred).unwrap(), 1);
    }

    #[test]
    fn test_window_past_the_end_is_empty() {
        let store = MemoryResourceStore::new();
        store.insert(Resource::new("OS Notes")).unwrap();

        let pred = predicate(&[], MatchMode::All);
        let page = store
            .fetch_page(&pred, SortKey::Date, PageWindow::new(10, 10))
            .unwrap();
        assert!(page.is_empty());
    }
}
