use std::collections::HashMap;
use treesort_model::TreeEntry;

/// Icons assigned to items by an icon provider.
pub trait IconLookup: Send + Sync {
    fn icon_of(&self, entry: &TreeEntry) -> Option<String>;
}

/// Icons keyed by item path.
impl IconLookup for HashMap<String, String> {
    fn icon_of(&self, entry: &TreeEntry) -> Option<String> {
        self.get(entry.path()).cloned()
    }
}
