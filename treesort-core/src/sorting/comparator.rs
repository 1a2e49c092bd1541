//! The cascade that turns per-level sorters into one total order.

use super::classified::{ClassifiedEntry, SortLevel};
use super::registry::{SorterFn, SorterRegistry};
use std::cmp::Ordering;
use std::fmt;
use treesort_model::{HostSortOrder, OrderKind, OrderSpec, SortSpec};

/// Comparator bound to one spec and host order for the length of a pass.
///
/// Entries in different groups order by group index. Within a group the
/// group's own orders are tried, then the folder defaults, then
/// [`OrderKind::FINAL_DEFAULT`]; the first non-equal answer wins.
pub struct GroupComparator {
    group_sorters: Vec<[Option<SorterFn>; 2]>,
    folder_sorters: [Option<SorterFn>; 2],
    fallback: SorterFn,
}

impl fmt::Debug for GroupComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupComparator")
            .field("groups", &self.group_sorters.len())
            .field(
                "folder_levels",
                &self.folder_sorters.iter().flatten().count(),
            )
            .finish()
    }
}

impl GroupComparator {
    pub fn new(spec: &SortSpec, host: HostSortOrder) -> Self {
        let registry = SorterRegistry::global();
        let resolve = |order: Option<&OrderSpec>, level: SortLevel| {
            order.and_then(|order| registry.sorter_for(order.order, level, host))
        };

        let group_sorters = spec
            .groups
            .iter()
            .map(|group| {
                [
                    resolve(group.order.as_ref(), SortLevel::Primary),
                    resolve(group.secondary_order.as_ref(), SortLevel::Secondary),
                ]
            })
            .collect();
        let folder_sorters = [
            resolve(spec.default_order.as_ref(), SortLevel::DerivedPrimary),
            resolve(spec.default_secondary_order.as_ref(), SortLevel::DerivedSecondary),
        ];
        let fallback = registry
            .sorter_for(OrderKind::FINAL_DEFAULT, SortLevel::Primary, host)
            .unwrap_or(final_default);

        GroupComparator {
            group_sorters,
            folder_sorters,
            fallback,
        }
    }

    pub fn compare(&self, a: &ClassifiedEntry<'_>, b: &ClassifiedEntry<'_>) -> Ordering {
        if a.group_idx != b.group_idx {
            return a.group_idx.cmp(&b.group_idx);
        }
        let group_levels = self
            .group_sorters
            .get(a.group_idx)
            .map(|sorters| sorters.as_slice())
            .unwrap_or_default();

        group_levels
            .iter()
            .chain(self.folder_sorters.iter())
            .flatten()
            .map(|sorter| sorter(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| (self.fallback)(a, b))
    }
}

fn final_default(a: &ClassifiedEntry<'_>, b: &ClassifiedEntry<'_>) -> Ordering {
    super::collation::compare_alphabetical(&a.sort_string, &b.sort_string)
        .then_with(|| a.is_folder.cmp(&b.is_folder))
}
