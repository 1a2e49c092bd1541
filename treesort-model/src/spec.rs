//! The parsed rule set applied to one or more target folders.

use crate::group::{GroupKind, SortGroup};
use crate::order::OrderSpec;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortSpec {
    /// Folder paths this spec applies to; `path/*` and `path/...` are
    /// wildcard targets
    pub target_folders: Vec<String>,
    pub groups: Vec<SortGroup>,
    pub default_order: Option<OrderSpec>,
    pub default_secondary_order: Option<OrderSpec>,
    pub outsiders_group: Option<usize>,
    pub outsiders_files_group: Option<usize>,
    pub outsiders_folders_group: Option<usize>,
    /// Group indices in evaluation order; groups left out never match but
    /// can still receive outsiders
    pub priority_order: Option<Vec<usize>>,
    pub items_to_hide: BTreeSet<String>,
    pub items_to_ignore: BTreeSet<String>,
}

impl SortSpec {
    pub fn new(groups: Vec<SortGroup>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    pub fn for_folder(mut self, path: impl Into<String>) -> Self {
        self.target_folders.push(path.into());
        self
    }

    pub fn ordered_by(mut self, order: impl Into<OrderSpec>) -> Self {
        self.default_order = Some(order.into());
        self
    }

    pub fn then_by(mut self, order: impl Into<OrderSpec>) -> Self {
        self.default_secondary_order = Some(order.into());
        self
    }

    pub fn hiding(mut self, name: impl Into<String>) -> Self {
        self.items_to_hide.insert(name.into());
        self
    }

    pub fn ignoring(mut self, name: impl Into<String>) -> Self {
        self.items_to_ignore.insert(name.into());
        self
    }

    /// Index handed to entries that matched nothing and have no outsider
    /// bucket; sorts after every real group.
    pub fn past_the_end(&self) -> usize {
        self.groups.len()
    }

    /// Group indices in the order they are tried against an entry.
    pub fn evaluation_order(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        match &self.priority_order {
            Some(order) => Box::new(order.iter().copied()),
            None => Box::new(0..self.groups.len()),
        }
    }

    /// Folder-level default orders, primary first.
    pub fn folder_orders(&self) -> impl Iterator<Item = &OrderSpec> {
        self.default_order
            .iter()
            .chain(self.default_secondary_order.iter())
    }

    /// Every order mentioned anywhere in this spec.
    pub fn all_orders(&self) -> impl Iterator<Item = &OrderSpec> {
        self.folder_orders()
            .chain(self.groups.iter().flat_map(|group| group.orders()))
    }

    /// Builds [`SortSpec::priority_order`] from group priorities.
    ///
    /// Only applies when at least one group declares a priority. Higher
    /// priorities are tried first; equal priorities keep declaration order
    /// and a missing priority counts as zero. Outsider buckets never match,
    /// so they are left out.
    pub fn derive_priority_order(&mut self) {
        if self.groups.iter().all(|group| group.priority.is_none()) {
            return;
        }
        let mut order: Vec<usize> = (0..self.groups.len())
            .filter(|&idx| !matches!(self.groups[idx].kind, GroupKind::Outsiders))
            .collect();
        order.sort_by_key(|&idx| {
            std::cmp::Reverse(self.groups[idx].priority.unwrap_or(0))
        });
        self.priority_order = Some(order);
    }
}
