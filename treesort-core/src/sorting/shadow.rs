//! Pass-local copy of a spec's groups with folder placeholders expanded.

use std::borrow::Cow;
use treesort_contracts::macros::MacroExpander;
use treesort_model::{SortGroup, SortSpec};

/// Groups aligned index-for-index with the spec, used for matching only.
/// Groups the expander leaves alone are borrowed from the spec.
#[derive(Debug, Clone)]
pub struct ShadowGroups<'s> {
    groups: Vec<Cow<'s, SortGroup>>,
}

impl<'s> ShadowGroups<'s> {
    pub fn build(
        spec: &'s SortSpec,
        folder_path: &str,
        expander: Option<&dyn MacroExpander>,
    ) -> Self {
        let groups = spec
            .groups
            .iter()
            .map(|group| {
                match expander.and_then(|expander| expander.expand(group, folder_path)) {
                    Some(expanded) => Cow::Owned(expanded),
                    None => Cow::Borrowed(group),
                }
            })
            .collect();
        ShadowGroups { groups }
    }

    pub fn get(&self, idx: usize) -> Option<&SortGroup> {
        self.groups.get(idx).map(|group| group.as_ref())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn is_expanded(&self, idx: usize) -> bool {
        matches!(self.groups.get(idx), Some(Cow::Owned(_)))
    }
}
