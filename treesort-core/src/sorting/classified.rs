//! The per-pass view of an entry that sorters compare.

use treesort_model::TreeEntry;

/// Joins derived text and the original name in a sort string.
pub const DERIVED_TEXT_SEPARATOR: &str = "//";

/// The four places an order can sit in the comparison cascade.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortLevel {
    /// The group's own primary order
    Primary,
    Secondary,
    /// The folder's default primary order
    DerivedPrimary,
    DerivedSecondary,
}

impl SortLevel {
    pub const ALL: [SortLevel; 4] = [
        SortLevel::Primary,
        SortLevel::Secondary,
        SortLevel::DerivedPrimary,
        SortLevel::DerivedSecondary,
    ];

    /// Slot of this level in [`ClassifiedEntry::metadata`].
    pub const fn index(self) -> usize {
        match self {
            SortLevel::Primary => 0,
            SortLevel::Secondary => 1,
            SortLevel::DerivedPrimary => 2,
            SortLevel::DerivedSecondary => 3,
        }
    }

    /// Whether this level's order comes from the folder defaults.
    pub const fn is_derived(self) -> bool {
        matches!(self, SortLevel::DerivedPrimary | SortLevel::DerivedSecondary)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedEntry<'a> {
    pub entry: &'a TreeEntry,
    /// Assigned group, or the spec's past-the-end index
    pub group_idx: usize,
    pub sort_string: String,
    pub sort_string_with_ext: String,
    /// One resolved value per [`SortLevel`]
    pub metadata: [Option<String>; 4],
    /// Folders start at zero until their dates are aggregated
    pub ctime: i64,
    pub mtime: i64,
    pub is_folder: bool,
    pub bookmark_rank: Option<u32>,
}

impl<'a> ClassifiedEntry<'a> {
    /// An entry in `group_idx` with no derived text.
    pub fn new(entry: &'a TreeEntry, group_idx: usize) -> Self {
        let (ctime, mtime) = match entry {
            TreeEntry::File(file) => (file.ctime, file.mtime),
            TreeEntry::Folder(_) => (0, 0),
        };
        ClassifiedEntry {
            entry,
            group_idx,
            sort_string: entry.basename().to_string(),
            sort_string_with_ext: entry.name().to_string(),
            metadata: Default::default(),
            ctime,
            mtime,
            is_folder: entry.is_folder(),
            bookmark_rank: None,
        }
    }

    /// Prefixes both sort strings with text captured while matching.
    pub fn with_derived_text(mut self, derived: Option<String>) -> Self {
        if let Some(derived) = derived {
            self.sort_string = format!(
                "{derived}{DERIVED_TEXT_SEPARATOR}{}",
                self.entry.basename()
            );
            self.sort_string_with_ext =
                format!("{derived}{DERIVED_TEXT_SEPARATOR}{}", self.entry.name());
        }
        self
    }

    pub fn metadata_at(&self, level: SortLevel) -> Option<&str> {
        self.metadata[level.index()].as_deref()
    }

    pub fn path(&self) -> &str {
        self.entry.path()
    }
}
