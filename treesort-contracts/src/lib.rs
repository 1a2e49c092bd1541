//! Trait surfaces the engine uses to reach host-side lookups.
//!
//! Every lookup is narrow and synchronous. "Absent" is always a normal
//! answer; none of these return errors.

pub mod bookmarks;
pub mod folder_notes;
pub mod icons;
pub mod macros;
pub mod metadata;

/// Frequently used lookup traits for hosts wiring up the engine.
pub mod prelude {
    pub use super::bookmarks::BookmarkOrderLookup;
    pub use super::folder_notes::{FixedIndexNote, FolderNoteResolver};
    pub use super::icons::IconLookup;
    pub use super::macros::MacroExpander;
    pub use super::metadata::{Frontmatter, MetadataLookup};
}
