//! Bookmark ranks for the bookmark orders.

use super::classified::ClassifiedEntry;
use crate::context::SortContext;
use treesort_model::SortSpec;

/// Whether any order anywhere in `spec` reads bookmark ranks.
pub fn bookmark_order_active(spec: &SortSpec) -> bool {
    spec.all_orders().any(|order| order.order.is_by_bookmark())
}

/// Fills every entry's rank when a bookmark order is active, whatever group
/// the entry landed in. Returns whether the lookup ran.
pub fn determine_bookmark_ranks_if_needed(
    items: &mut [ClassifiedEntry<'_>],
    spec: &SortSpec,
    ctx: &SortContext<'_>,
) -> bool {
    let Some(lookup) = ctx.lookups.bookmarks else {
        return false;
    };
    if !bookmark_order_active(spec) {
        return false;
    }
    for item in items.iter_mut() {
        item.bookmark_rank = lookup.order_of(item.path()).filter(|rank| *rank > 0);
    }
    true
}
