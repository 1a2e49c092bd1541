//! Sort key types for comparing classified entries
//!
//! These wrap the values extracted during a pass and carry the
//! missing-last rule through [`SortKey::compare_with_order`].

use super::collation::Collation;
use super::traits::SortKey;
use std::cmp::Ordering;

/// Epoch-millisecond timestamp; zero marks a folder whose date could not be
/// determined.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimestampKey(pub i64);

impl SortKey for TimestampKey {
    fn is_missing(&self) -> bool {
        self.0 == 0
    }

    fn compare_present(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// External bookmark rank, 1-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RankKey(pub Option<u32>);

impl SortKey for RankKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    fn compare_present(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Resolved metadata value compared under a collation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MetadataKey<'v> {
    value: Option<&'v str>,
    collation: Collation,
}

impl<'v> MetadataKey<'v> {
    pub fn new(value: Option<&'v str>, collation: Collation) -> Self {
        MetadataKey { value, collation }
    }
}

impl SortKey for MetadataKey<'_> {
    fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    fn compare_present(&self, other: &Self) -> Ordering {
        match (self.value, other.value) {
            (Some(a), Some(b)) => self.collation.compare(a, b),
            _ => Ordering::Equal,
        }
    }
}
