//! The fixed table from named orders to comparison functions.
//!
//! Every sorter returns `Ordering::Equal` when it cannot tell two entries
//! apart, which hands the decision to the next level of the cascade.

use super::classified::{ClassifiedEntry, SortLevel};
use super::collation::{Collation, compare_alphabetical, compare_true_alphabetical};
use super::keys::{MetadataKey, RankKey, TimestampKey};
use super::traits::SortKey;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use treesort_model::{HostSortOrder, OrderKind};

/// Comparison over two classified entries of the same pass.
pub type SorterFn = fn(&ClassifiedEntry<'_>, &ClassifiedEntry<'_>) -> Ordering;

static REGISTRY: Lazy<SorterRegistry> = Lazy::new(SorterRegistry::build);

/// Sorters keyed by order, plus per-level replacements for the orders that
/// read a level-specific value.
pub struct SorterRegistry {
    base: HashMap<OrderKind, SorterFn>,
    level_overrides: HashMap<(SortLevel, OrderKind), SorterFn>,
}

impl fmt::Debug for SorterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SorterRegistry")
            .field("base", &self.base.len())
            .field("level_overrides", &self.level_overrides.len())
            .finish()
    }
}

impl SorterRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static SorterRegistry {
        &REGISTRY
    }

    /// Sorter for `order` at `level`. `HostDefault` goes through the host's
    /// current criterion first.
    pub fn sorter_for(
        &self,
        order: OrderKind,
        level: SortLevel,
        host: HostSortOrder,
    ) -> Option<SorterFn> {
        let order = match order {
            OrderKind::HostDefault => host.as_order_kind(),
            other => other,
        };
        self.level_overrides
            .get(&(level, order))
            .or_else(|| self.base.get(&order))
            .copied()
    }

    fn build() -> Self {
        use OrderKind::*;

        let base: [(OrderKind, SorterFn); 32] = [
            (Alphabetical, alphabetical::<false, false>),
            (AlphabeticalWithFileExt, alphabetical::<true, false>),
            (AlphabeticalReverse, alphabetical::<false, true>),
            (AlphabeticalReverseWithFileExt, alphabetical::<true, true>),
            (TrueAlphabetical, true_alphabetical::<false, false>),
            (TrueAlphabeticalWithFileExt, true_alphabetical::<true, false>),
            (TrueAlphabeticalReverse, true_alphabetical::<false, true>),
            (TrueAlphabeticalReverseWithFileExt, true_alphabetical::<true, true>),
            (Unicode, unicode::<false>),
            (UnicodeReverse, unicode::<true>),
            (AlphabeticalWithFilesPreferred, alphabetical_preferring::<true>),
            (AlphabeticalWithFoldersPreferred, alphabetical_preferring::<false>),
            (ByModifiedTime, by_time_basic::<false, false>),
            (ByModifiedTimeReverse, by_time_basic::<false, true>),
            (ByModifiedTimeAdvanced, by_time_advanced::<false, false>),
            (ByModifiedTimeAdvancedRecursive, by_time_advanced::<false, false>),
            (ByModifiedTimeReverseAdvanced, by_time_advanced::<false, true>),
            (ByModifiedTimeReverseAdvancedRecursive, by_time_advanced::<false, true>),
            (ByCreatedTime, by_time_basic::<true, false>),
            (ByCreatedTimeReverse, by_time_basic::<true, true>),
            (ByCreatedTimeAdvanced, by_time_advanced::<true, false>),
            (ByCreatedTimeAdvancedRecursive, by_time_advanced::<true, false>),
            (ByCreatedTimeReverseAdvanced, by_time_advanced::<true, true>),
            (ByCreatedTimeReverseAdvancedRecursive, by_time_advanced::<true, true>),
            (ByMetadataFieldAlphabetical, by_metadata::<0, false, false>),
            (ByMetadataFieldTrueAlphabetical, by_metadata::<0, true, false>),
            (ByMetadataFieldAlphabeticalReverse, by_metadata::<0, false, true>),
            (ByMetadataFieldTrueAlphabeticalReverse, by_metadata::<0, true, true>),
            (ByBookmarkOrder, by_bookmark::<false>),
            (ByBookmarkOrderReverse, by_bookmark::<true>),
            (FileFirst, kind_first::<true>),
            (FolderFirst, kind_first::<false>),
        ];

        let mut level_overrides: HashMap<(SortLevel, OrderKind), SorterFn> = HashMap::new();
        for (level, sorters) in [
            (SortLevel::Secondary, metadata_sorters::<1>()),
            (SortLevel::DerivedPrimary, metadata_sorters::<2>()),
            (SortLevel::DerivedSecondary, metadata_sorters::<3>()),
        ] {
            for (order, sorter) in sorters {
                level_overrides.insert((level, order), sorter);
            }
        }

        SorterRegistry {
            base: HashMap::from(base),
            level_overrides,
        }
    }
}

fn metadata_sorters<const LEVEL: usize>() -> [(OrderKind, SorterFn); 4] {
    [
        (
            OrderKind::ByMetadataFieldAlphabetical,
            by_metadata::<LEVEL, false, false>,
        ),
        (
            OrderKind::ByMetadataFieldTrueAlphabetical,
            by_metadata::<LEVEL, true, false>,
        ),
        (
            OrderKind::ByMetadataFieldAlphabeticalReverse,
            by_metadata::<LEVEL, false, true>,
        ),
        (
            OrderKind::ByMetadataFieldTrueAlphabeticalReverse,
            by_metadata::<LEVEL, true, true>,
        ),
    ]
}

#[inline]
fn directed(ordering: Ordering, reverse: bool) -> Ordering {
    if reverse { ordering.reverse() } else { ordering }
}

#[inline]
fn sort_text<'e, const WITH_EXT: bool>(entry: &'e ClassifiedEntry<'_>) -> &'e str {
    if WITH_EXT {
        &entry.sort_string_with_ext
    } else {
        &entry.sort_string
    }
}

fn alphabetical<const WITH_EXT: bool, const REVERSE: bool>(
    a: &ClassifiedEntry<'_>,
    b: &ClassifiedEntry<'_>,
) -> Ordering {
    directed(
        compare_alphabetical(sort_text::<WITH_EXT>(a), sort_text::<WITH_EXT>(b)),
        REVERSE,
    )
}

fn true_alphabetical<const WITH_EXT: bool, const REVERSE: bool>(
    a: &ClassifiedEntry<'_>,
    b: &ClassifiedEntry<'_>,
) -> Ordering {
    directed(
        compare_true_alphabetical(sort_text::<WITH_EXT>(a), sort_text::<WITH_EXT>(b)),
        REVERSE,
    )
}

fn unicode<const REVERSE: bool>(a: &ClassifiedEntry<'_>, b: &ClassifiedEntry<'_>) -> Ordering {
    directed(a.sort_string.cmp(&b.sort_string), REVERSE)
}

/// Files before folders when `FILES_FIRST`, the opposite otherwise; two
/// entries of the same kind are left to the next level.
fn kind_first<const FILES_FIRST: bool>(
    a: &ClassifiedEntry<'_>,
    b: &ClassifiedEntry<'_>,
) -> Ordering {
    match (a.is_folder, b.is_folder) {
        (false, true) => directed(Ordering::Less, !FILES_FIRST),
        (true, false) => directed(Ordering::Greater, !FILES_FIRST),
        _ => Ordering::Equal,
    }
}

fn alphabetical_preferring<const FILES_FIRST: bool>(
    a: &ClassifiedEntry<'_>,
    b: &ClassifiedEntry<'_>,
) -> Ordering {
    compare_alphabetical(&a.sort_string, &b.sort_string)
        .then_with(|| kind_first::<FILES_FIRST>(a, b))
}

#[inline]
fn timestamp<const CREATED: bool>(entry: &ClassifiedEntry<'_>) -> i64 {
    if CREATED { entry.ctime } else { entry.mtime }
}

/// Folders carry no dates of their own here: two folders compare by name,
/// anything else by raw timestamps.
fn by_time_basic<const CREATED: bool, const REVERSE: bool>(
    a: &ClassifiedEntry<'_>,
    b: &ClassifiedEntry<'_>,
) -> Ordering {
    if a.is_folder && b.is_folder {
        return compare_alphabetical(&a.sort_string, &b.sort_string);
    }
    directed(timestamp::<CREATED>(a).cmp(&timestamp::<CREATED>(b)), REVERSE)
}

/// Aggregated folder dates; an undetermined date sorts last either way.
fn by_time_advanced<const CREATED: bool, const REVERSE: bool>(
    a: &ClassifiedEntry<'_>,
    b: &ClassifiedEntry<'_>,
) -> Ordering {
    TimestampKey(timestamp::<CREATED>(a))
        .compare_with_order(&TimestampKey(timestamp::<CREATED>(b)), REVERSE)
}

fn by_metadata<const LEVEL: usize, const TRUE_ALPHA: bool, const REVERSE: bool>(
    a: &ClassifiedEntry<'_>,
    b: &ClassifiedEntry<'_>,
) -> Ordering {
    let collation = if TRUE_ALPHA {
        Collation::TrueAlphabetical
    } else {
        Collation::Alphabetical
    };
    MetadataKey::new(a.metadata[LEVEL].as_deref(), collation).compare_with_order(
        &MetadataKey::new(b.metadata[LEVEL].as_deref(), collation),
        REVERSE,
    )
}

fn by_bookmark<const REVERSE: bool>(a: &ClassifiedEntry<'_>, b: &ClassifiedEntry<'_>) -> Ordering {
    RankKey(a.bookmark_rank).compare_with_order(&RankKey(b.bookmark_rank), REVERSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use treesort_model::{FileEntry, FolderEntry, TreeEntry};

    fn file(path: &str, ctime: i64, mtime: i64) -> TreeEntry {
        FileEntry::new(path, ctime, mtime).unwrap().into()
    }

    fn folder(path: &str) -> TreeEntry {
        FolderEntry::new(path, vec![]).unwrap().into()
    }

    fn sorter(order: OrderKind) -> SorterFn {
        SorterRegistry::global()
            .sorter_for(order, SortLevel::Primary, HostSortOrder::Alphabetical)
            .unwrap()
    }

    #[test]
    fn test_every_order_resolves_at_every_level() {
        let registry = SorterRegistry::global();
        for order in OrderKind::ALL {
            for level in SortLevel::ALL {
                for host in HostSortOrder::ALL {
                    assert!(
                        registry.sorter_for(order, level, host).is_some(),
                        "{order} at {level:?} with host {host}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_host_default_uses_inverted_time_mapping() {
        let registry = SorterRegistry::global();
        let old = file("old.md", 1, 100);
        let new = file("new.md", 1, 200);
        let (old, new) = (ClassifiedEntry::new(&old, 0), ClassifiedEntry::new(&new, 0));

        let newest_first = registry
            .sorter_for(OrderKind::HostDefault, SortLevel::Primary, HostSortOrder::ByModifiedTime)
            .unwrap();
        assert_eq!(newest_first(&new, &old), Ordering::Less);

        let oldest_first = registry
            .sorter_for(
                OrderKind::HostDefault,
                SortLevel::Primary,
                HostSortOrder::ByModifiedTimeReverse,
            )
            .unwrap();
        assert_eq!(oldest_first(&old, &new), Ordering::Less);
    }

    #[test]
    fn test_lexical_family() {
        let a = file("b.txt", 1, 1);
        let b = file("B.md", 1, 1);
        let (a, b) = (ClassifiedEntry::new(&a, 0), ClassifiedEntry::new(&b, 0));

        assert_eq!(sorter(OrderKind::Alphabetical)(&a, &b), Ordering::Equal);
        assert_eq!(sorter(OrderKind::AlphabeticalWithFileExt)(&a, &b), Ordering::Greater);
        assert_eq!(sorter(OrderKind::TrueAlphabetical)(&a, &b), Ordering::Less);
        assert_eq!(sorter(OrderKind::TrueAlphabeticalReverse)(&a, &b), Ordering::Greater);
        assert_eq!(sorter(OrderKind::Unicode)(&a, &b), Ordering::Greater);
        assert_eq!(sorter(OrderKind::UnicodeReverse)(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_files_or_folders_preferred_only_on_ties() {
        let f = file("notes.md", 1, 1);
        let d = folder("notes");
        let z = folder("zzz");
        let (f, d, z) = (
            ClassifiedEntry::new(&f, 0),
            ClassifiedEntry::new(&d, 0),
            ClassifiedEntry::new(&z, 0),
        );

        assert_eq!(sorter(OrderKind::AlphabeticalWithFilesPreferred)(&f, &d), Ordering::Less);
        assert_eq!(sorter(OrderKind::AlphabeticalWithFoldersPreferred)(&f, &d), Ordering::Greater);
        assert_eq!(sorter(OrderKind::AlphabeticalWithFoldersPreferred)(&f, &z), Ordering::Less);
        assert_eq!(sorter(OrderKind::FileFirst)(&f, &z), Ordering::Less);
        assert_eq!(sorter(OrderKind::FolderFirst)(&f, &z), Ordering::Greater);
        assert_eq!(sorter(OrderKind::FileFirst)(&d, &z), Ordering::Equal);
    }

    #[test]
    fn test_basic_time_compares_folders_by_name() {
        let a = folder("alpha");
        let b = folder("beta");
        let f = file("f.md", 1, 50);
        let (a, b, f) = (
            ClassifiedEntry::new(&a, 0),
            ClassifiedEntry::new(&b, 0),
            ClassifiedEntry::new(&f, 0),
        );
        assert_eq!(sorter(OrderKind::ByModifiedTimeReverse)(&a, &b), Ordering::Less);
        assert_eq!(sorter(OrderKind::ByModifiedTime)(&a, &f), Ordering::Less);
        assert_eq!(sorter(OrderKind::ByModifiedTimeReverse)(&a, &f), Ordering::Greater);
    }

    #[test]
    fn test_advanced_time_puts_undetermined_last() {
        let dated = folder("dated");
        let empty = folder("empty");
        let mut dated = ClassifiedEntry::new(&dated, 0);
        dated.mtime = 30;
        let empty = ClassifiedEntry::new(&empty, 0);

        for order in [
            OrderKind::ByModifiedTimeAdvanced,
            OrderKind::ByModifiedTimeReverseAdvanced,
        ] {
            assert_eq!(sorter(order)(&dated, &empty), Ordering::Less, "{order}");
            assert_eq!(sorter(order)(&empty, &dated), Ordering::Greater, "{order}");
        }
    }

    #[test]
    fn test_metadata_reads_its_own_level() {
        let x = file("x.md", 1, 1);
        let y = file("y.md", 1, 1);
        let mut x = ClassifiedEntry::new(&x, 0);
        let mut y = ClassifiedEntry::new(&y, 0);
        x.metadata[SortLevel::DerivedPrimary.index()] = Some("b".into());
        y.metadata[SortLevel::DerivedPrimary.index()] = Some("a".into());
        x.metadata[SortLevel::Primary.index()] = Some("a".into());

        let registry = SorterRegistry::global();
        let derived = registry
            .sorter_for(
                OrderKind::ByMetadataFieldAlphabetical,
                SortLevel::DerivedPrimary,
                HostSortOrder::Alphabetical,
            )
            .unwrap();
        assert_eq!(derived(&x, &y), Ordering::Greater);

        let primary = sorter(OrderKind::ByMetadataFieldAlphabeticalReverse);
        assert_eq!(primary(&x, &y), Ordering::Less);
        assert_eq!(primary(&y, &x), Ordering::Greater);
    }

    #[test]
    fn test_neutral_without_discriminant() {
        let x = file("x.md", 1, 1);
        let y = file("y.md", 1, 1);
        let (x, y) = (ClassifiedEntry::new(&x, 0), ClassifiedEntry::new(&y, 0));
        for order in [
            OrderKind::ByBookmarkOrder,
            OrderKind::ByBookmarkOrderReverse,
            OrderKind::ByMetadataFieldAlphabetical,
            OrderKind::ByMetadataFieldTrueAlphabeticalReverse,
            OrderKind::ByModifiedTime,
            OrderKind::ByCreatedTimeReverseAdvanced,
            OrderKind::FileFirst,
        ] {
            assert_eq!(sorter(order)(&x, &y), Ordering::Equal, "{order}");
        }
    }
}
