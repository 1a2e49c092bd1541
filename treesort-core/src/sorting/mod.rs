//! Classification and comparison of folder children
//!
//! This module provides:
//! - Sort keys that keep missing values last in either direction
//! - Collations for the lexicographic orders
//! - The group classifier and its name matchers
//! - Lazy resolvers for metadata values, folder dates and bookmark ranks
//! - The sorter registry and the multi-level comparator
//! - The sort pass entry points

pub mod bookmarks;
pub mod classified;
pub mod classifier;
pub mod collation;
pub mod comparator;
pub mod folder_dates;
pub mod keys;
pub mod matchers;
pub mod metadata;
pub mod pass;
pub mod registry;
pub mod shadow;
pub mod traits;

#[cfg(test)]
mod tests;

pub use classified::*;
pub use classifier::classify;
pub use collation::*;
pub use comparator::GroupComparator;
pub use keys::*;
pub use pass::{compare_host, sort_by_host_order, sort_entries, sort_folder_children};
pub use registry::{SorterFn, SorterRegistry};
pub use shadow::ShadowGroups;
pub use traits::*;
