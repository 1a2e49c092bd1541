//! Core trait for the values sorters compare.

use std::cmp::Ordering;

/// A comparable value that may be missing.
///
/// Missing values always sort after present ones, whichever direction the
/// order runs in. Two missing values compare equal so the cascade can move
/// on to its next level.
pub trait SortKey {
    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;

    /// Compare two keys that are both present
    fn compare_present(&self, other: &Self) -> Ordering;

    /// Compare two keys while ensuring missing values always sort last
    #[inline]
    fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if reverse {
                    other.compare_present(self)
                } else {
                    self.compare_present(other)
                }
            }
        }
    }
}
