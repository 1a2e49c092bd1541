use std::collections::HashMap;

/// Position of items in the host's bookmarks.
pub trait BookmarkOrderLookup: Send + Sync {
    /// 1-based rank of `path`; `None` (or 0) means not bookmarked.
    fn order_of(&self, path: &str) -> Option<u32>;
}

impl BookmarkOrderLookup for HashMap<String, u32> {
    fn order_of(&self, path: &str) -> Option<u32> {
        self.get(path).copied().filter(|rank| *rank > 0)
    }
}
