//! # treesort core
//!
//! Classification-and-comparison engine that re-orders the children of a
//! folder according to a [`SortSpec`](treesort_model::SortSpec).
//!
//! ## Overview
//!
//! One sort pass runs these steps over a folder's children:
//!
//! - **Filter**: drop hidden items, set ignored items aside
//! - **Classify**: first-match-wins rule cascade assigning a group index and
//!   a group-local sort string, plus metadata values when an active order
//!   reads them
//! - **Aggregate folder dates**: only for folders under an advanced date order
//! - **Resolve bookmark ranks**: only when a bookmark order is active
//! - **Compare**: group index, then up to four cascading orders from the
//!   sorter registry, then a fixed final default
//!
//! Folders without a spec fall back to [`sort_by_host_order`].
//!
//! ## Examples
//!
//! ```no_run
//! use treesort_core::{SortContext, sort_folder_children};
//! use treesort_model::{FolderEntry, NameMatcher, SortGroup, SortSpec};
//!
//! fn order(folder: &FolderEntry) -> Vec<String> {
//!     let spec = SortSpec::new(vec![
//!         SortGroup::exact_prefix(NameMatcher::literal("Chapter ")),
//!         SortGroup::match_all(),
//!     ]);
//!     let ctx = SortContext::default();
//!     sort_folder_children(folder, Some(&spec), &ctx)
//!         .into_iter()
//!         .map(|entry| entry.name().to_string())
//!         .collect()
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Which spec applies to which folder
pub mod catalog;

/// Lookup bundle and pass settings
pub mod context;

/// Error types and spec validation
pub mod error;

/// The classification-and-comparison engine
pub mod sorting;

pub use catalog::SortSpecCatalog;
pub use context::{DEFAULT_METADATA_FIELD, Lookups, SortContext, SortSettings};
pub use error::{SpecError, validate_spec};
pub use sorting::{
    ClassifiedEntry, GroupComparator, SortLevel, SorterFn, SorterRegistry,
    sort_by_host_order, sort_entries, sort_folder_children,
};
