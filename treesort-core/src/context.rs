//! Everything a sort pass reads besides the spec and the entries.

use std::fmt;
use treesort_contracts::prelude::*;
use treesort_model::HostSortOrder;

/// Metadata field read by metadata orders that name no field of their own.
pub const DEFAULT_METADATA_FIELD: &str = "sort-index-value";

/// The host lookups available to a pass. Each one is optional; a missing
/// lookup behaves like one that always answers "absent".
#[derive(Clone, Copy, Default)]
pub struct Lookups<'l> {
    pub metadata: Option<&'l dyn MetadataLookup>,
    pub folder_notes: Option<&'l dyn FolderNoteResolver>,
    pub bookmarks: Option<&'l dyn BookmarkOrderLookup>,
    pub icons: Option<&'l dyn IconLookup>,
    pub macros: Option<&'l dyn MacroExpander>,
}

impl fmt::Debug for Lookups<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookups")
            .field("metadata", &self.metadata.is_some())
            .field("folder_notes", &self.folder_notes.is_some())
            .field("bookmarks", &self.bookmarks.is_some())
            .field("icons", &self.icons.is_some())
            .field("macros", &self.macros.is_some())
            .finish()
    }
}

impl<'l> Lookups<'l> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, lookup: &'l dyn MetadataLookup) -> Self {
        self.metadata = Some(lookup);
        self
    }

    pub fn with_folder_notes(
        mut self,
        resolver: &'l dyn FolderNoteResolver,
    ) -> Self {
        self.folder_notes = Some(resolver);
        self
    }

    pub fn with_bookmarks(mut self, lookup: &'l dyn BookmarkOrderLookup) -> Self {
        self.bookmarks = Some(lookup);
        self
    }

    pub fn with_icons(mut self, lookup: &'l dyn IconLookup) -> Self {
        self.icons = Some(lookup);
        self
    }

    pub fn with_macros(mut self, expander: &'l dyn MacroExpander) -> Self {
        self.macros = Some(expander);
        self
    }
}

/// Host-side settings that stay fixed across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSettings {
    /// Criterion currently selected in the host UI
    pub host_order: HostSortOrder,
    pub default_metadata_field: String,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            host_order: HostSortOrder::default(),
            default_metadata_field: DEFAULT_METADATA_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortContext<'l> {
    pub lookups: Lookups<'l>,
    pub settings: SortSettings,
}

impl<'l> SortContext<'l> {
    pub fn new(lookups: Lookups<'l>, settings: SortSettings) -> Self {
        Self { lookups, settings }
    }

    pub fn with_host_order(mut self, host_order: HostSortOrder) -> Self {
        self.settings.host_order = host_order;
        self
    }
}
