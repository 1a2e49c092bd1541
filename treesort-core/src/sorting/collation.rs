//! String collations behind the lexicographic orders.

use std::cmp::Ordering;

/// How two sort strings are compared.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Collation {
    /// Case-insensitive, numeric-aware
    Alphabetical,
    /// Numeric-aware, lowercase before uppercase on otherwise equal text
    TrueAlphabetical,
    /// Raw code points
    Unicode,
}

impl Collation {
    #[inline]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Alphabetical => compare_alphabetical(a, b),
            Collation::TrueAlphabetical => compare_true_alphabetical(a, b),
            Collation::Unicode => a.cmp(b),
        }
    }
}

/// Case-insensitive natural comparison; `file2` sorts before `file10`.
pub fn compare_alphabetical(a: &str, b: &str) -> Ordering {
    alphanumeric_sort::compare_str(a.to_lowercase(), b.to_lowercase())
}

/// Natural comparison that still tells `a` and `A` apart.
pub fn compare_true_alphabetical(a: &str, b: &str) -> Ordering {
    compare_alphabetical(a, b).then_with(|| compare_case(a, b))
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}
