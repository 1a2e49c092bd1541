//! Entry points for ordering a folder's children.

use super::bookmarks::determine_bookmark_ranks_if_needed;
use super::classified::ClassifiedEntry;
use super::classifier::classify;
use super::collation::compare_alphabetical;
use super::comparator::GroupComparator;
use super::folder_dates::determine_folder_dates_if_needed;
use super::shadow::ShadowGroups;
use crate::context::SortContext;
use std::cmp::Ordering;
use tracing::debug;
use treesort_model::{FileEntry, FolderEntry, HostSortOrder, SortSpec, TreeEntry};

/// Orders the children of `folder`. Without a spec the host's own order
/// applies.
pub fn sort_folder_children<'a>(
    folder: &'a FolderEntry,
    spec: Option<&SortSpec>,
    ctx: &SortContext<'_>,
) -> Vec<&'a TreeEntry> {
    sort_entries(&folder.path, &folder.children, spec, ctx)
}

/// Orders `entries` as the children of the folder at `folder_path`.
///
/// Hidden entries are dropped. Ignored entries skip classification and
/// follow the sorted ones in their input order. The returned references
/// point at the caller's entries.
pub fn sort_entries<'a, I>(
    folder_path: &str,
    entries: I,
    spec: Option<&SortSpec>,
    ctx: &SortContext<'_>,
) -> Vec<&'a TreeEntry>
where
    I: IntoIterator<Item = &'a TreeEntry>,
{
    match spec {
        Some(spec) => sort_with_spec(folder_path, entries, spec, ctx),
        None => sort_by_host_order(entries, ctx.settings.host_order),
    }
}

fn sort_with_spec<'a, I>(
    folder_path: &str,
    entries: I,
    spec: &SortSpec,
    ctx: &SortContext<'_>,
) -> Vec<&'a TreeEntry>
where
    I: IntoIterator<Item = &'a TreeEntry>,
{
    let (ignored, candidates): (Vec<&TreeEntry>, Vec<&TreeEntry>) = entries
        .into_iter()
        .filter(|entry| !spec.items_to_hide.contains(entry.name()))
        .partition(|entry| spec.items_to_ignore.contains(entry.name()));

    let shadow = ShadowGroups::build(spec, folder_path, ctx.lookups.macros);
    let mut items: Vec<ClassifiedEntry<'a>> = candidates
        .into_iter()
        .map(|entry| classify(entry, spec, &shadow, ctx))
        .collect();

    let dated = determine_folder_dates_if_needed(&mut items, spec);
    let ranked = determine_bookmark_ranks_if_needed(&mut items, spec, ctx);

    let comparator = GroupComparator::new(spec, ctx.settings.host_order);
    items.sort_by(|a, b| comparator.compare(a, b));

    debug!(
        folder = folder_path,
        sorted = items.len(),
        ignored = ignored.len(),
        dated_folders = dated,
        bookmark_ranks = ranked,
        "sorted folder children"
    );

    items
        .into_iter()
        .map(|item| item.entry)
        .chain(ignored)
        .collect()
}

/// Orders entries the way the host does on its own: folders first by name,
/// then files by the host's criterion.
pub fn sort_by_host_order<'a, I>(entries: I, host: HostSortOrder) -> Vec<&'a TreeEntry>
where
    I: IntoIterator<Item = &'a TreeEntry>,
{
    let mut entries: Vec<&TreeEntry> = entries.into_iter().collect();
    entries.sort_by(|a, b| compare_host(a, b, host));
    entries
}

pub fn compare_host(a: &TreeEntry, b: &TreeEntry, host: HostSortOrder) -> Ordering {
    match (a, b) {
        (TreeEntry::Folder(_), TreeEntry::File(_)) => Ordering::Less,
        (TreeEntry::File(_), TreeEntry::Folder(_)) => Ordering::Greater,
        (TreeEntry::Folder(x), TreeEntry::Folder(y)) => {
            let ordering = compare_alphabetical(&x.name, &y.name);
            if host == HostSortOrder::AlphabeticalReverse {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (TreeEntry::File(x), TreeEntry::File(y)) => compare_host_files(x, y, host),
    }
}

fn compare_host_files(a: &FileEntry, b: &FileEntry, host: HostSortOrder) -> Ordering {
    let by_name = || compare_alphabetical(&a.name, &b.name);
    match host {
        HostSortOrder::Alphabetical => by_name(),
        HostSortOrder::AlphabeticalReverse => by_name().reverse(),
        HostSortOrder::ByModifiedTime => b.mtime.cmp(&a.mtime).then_with(by_name),
        HostSortOrder::ByModifiedTimeReverse => a.mtime.cmp(&b.mtime).then_with(by_name),
        HostSortOrder::ByCreatedTime => b.ctime.cmp(&a.ctime).then_with(by_name),
        HostSortOrder::ByCreatedTimeReverse => a.ctime.cmp(&b.ctime).then_with(by_name),
    }
}
