//! Synthetic timestamps for folders under the advanced date orders.

use super::classified::{ClassifiedEntry, SortLevel};
use super::metadata::order_at_level;
use treesort_model::{FolderEntry, SortSpec, TreeEntry};

/// Dates a folder takes from the files below it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FolderDates {
    /// Latest modification among the files, zero when there are none
    pub mtime: i64,
    /// Earliest creation among the files, zero when there are none
    pub ctime: i64,
}

/// Aggregates over direct child files, or the whole subtree when
/// `recursive` is set.
pub fn aggregate_folder_dates(folder: &FolderEntry, recursive: bool) -> FolderDates {
    let mut dates: Option<(i64, i64)> = None;
    visit_files(folder, recursive, &mut |mtime, ctime| {
        dates = Some(match dates {
            Some((max_m, min_c)) => (max_m.max(mtime), min_c.min(ctime)),
            None => (mtime, ctime),
        });
    });
    let (mtime, ctime) = dates.unwrap_or((0, 0));
    FolderDates { mtime, ctime }
}

fn visit_files(folder: &FolderEntry, recursive: bool, visit: &mut impl FnMut(i64, i64)) {
    for child in &folder.children {
        match child {
            TreeEntry::File(file) => visit(file.mtime, file.ctime),
            TreeEntry::Folder(sub) if recursive => visit_files(sub, recursive, visit),
            TreeEntry::Folder(_) => {}
        }
    }
}

/// What, if anything, an entry's active orders need in the way of dates.
fn dates_needed(spec: &SortSpec, group_idx: usize) -> Option<bool> {
    let mut needed = None;
    for level in SortLevel::ALL {
        if let Some(order) = order_at_level(spec, group_idx, level) {
            if order.order.needs_deep_folder_dates() {
                return Some(true);
            }
            if order.order.needs_folder_dates() {
                needed = Some(false);
            }
        }
    }
    needed
}

/// Fills synthetic dates on folder entries whose active orders read them.
///
/// Returns the number of folders aggregated.
pub fn determine_folder_dates_if_needed(items: &mut [ClassifiedEntry<'_>], spec: &SortSpec) -> usize {
    let mut aggregated = 0;
    for item in items.iter_mut() {
        let Some(folder) = item.entry.as_folder() else {
            continue;
        };
        let Some(recursive) = dates_needed(spec, item.group_idx) else {
            continue;
        };
        let dates = aggregate_folder_dates(folder, recursive);
        item.mtime = dates.mtime;
        item.ctime = dates.ctime;
        aggregated += 1;
    }
    aggregated
}
