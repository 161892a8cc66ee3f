//! Result ordering.
//!
//! Every ordering is total and deterministic: whatever the primary keys,
//! the final tie-break is the resource id, so repeated searches over the
//! same data always produce the same page boundaries.

use std::cmp::Ordering;

use crate::query::{ResourcePredicate, SortKey};
use crate::resource::Resource;

/// Build a comparator for the requested sort key.
///
/// The predicate is consulted only for [`SortKey::Relevance`]: resources
/// whose title contains any query token rank before attachment-only
/// matches, and both tiers order by creation time descending. With no
/// tokens every resource lands in the lower tier and relevance degenerates
/// to date order.
pub fn comparator<'a>(
    sort: SortKey,
    predicate: &'a ResourcePredicate,
) -> impl Fn(&Resource, &Resource) -> Ordering + 'a {
    move |a, b| match sort {
        SortKey::Name => a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)),
        SortKey::Date => compare_by_date(a, b),
        SortKey::Relevance => {
            let tier_a = relevance_tier(predicate, a);
            let tier_b = relevance_tier(predicate, b);
            tier_a.cmp(&tier_b).then_with(|| compare_by_date(a, b))
        }
    }
}

/// Creation time descending, id ascending on ties.
fn compare_by_date(a: &Resource, b: &Resource) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}

/// 0 for title matches, 1 otherwise.
fn relevance_tier(predicate: &ResourcePredicate, resource: &Resource) -> u8 {
    if predicate.title_matches_any(resource) { 0 } else { 1 }
}
