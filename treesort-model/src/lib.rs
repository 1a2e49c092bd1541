//! Core data model definitions shared across treesort crates.
#![allow(missing_docs)]

pub mod entry;
pub mod error;
pub mod group;
pub mod order;
#[cfg(feature = "serde")]
pub mod regex_serde;
pub mod spec;

pub use entry::{FileEntry, FolderEntry, TreeEntry};
pub use error::{ModelError, Result as ModelResult};
pub use group::{
    CaptureNormalizer, GroupKind, NameMatcher, RegexMatcher, SortGroup,
};
pub use order::{
    DateLayout, HostSortOrder, MetadataExtractor, OrderKind, OrderSpec,
};
pub use spec::SortSpec;

/// Re-export so downstream crates build matchers against the same version.
pub use regex;
