//! Sort groups: one rule each, tried in evaluation order.

use crate::order::OrderSpec;
use regex::Regex;

/// Rewrites the text captured by a regex matcher so that plain string
/// comparison orders it sensibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum CaptureNormalizer {
    /// `42` or `3.14`; the integer part is zero-padded
    Number,
    /// `1.2.10`; every segment is zero-padded
    CompoundNumber { separator: char },
    /// `XIV`; converted to a zero-padded arabic number
    RomanNumber,
    /// `IV-ii`; every roman segment is converted and padded
    CompoundRomanNumber { separator: char },
}

/// A compiled pattern plus an optional normalizer for its first capture.
///
/// Prefix patterns are expected to be anchored with `^` and suffix patterns
/// with `$` by whoever builds the groups.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegexMatcher {
    #[cfg_attr(feature = "serde", serde(with = "crate::regex_serde"))]
    pub pattern: Regex,
    #[cfg_attr(feature = "serde", serde(default))]
    pub normalizer: Option<CaptureNormalizer>,
}

impl RegexMatcher {
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            normalizer: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: CaptureNormalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }
}

impl PartialEq for RegexMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str()
            && self.normalizer == other.normalizer
    }
}

/// Either a literal string or a regex; a name-based rule always has one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NameMatcher {
    Literal(String),
    Regex(RegexMatcher),
}

impl NameMatcher {
    pub fn literal(text: impl Into<String>) -> Self {
        NameMatcher::Literal(text.into())
    }

    pub fn regex(pattern: Regex) -> Self {
        NameMatcher::Regex(RegexMatcher::new(pattern))
    }
}

/// What a group matches on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum GroupKind {
    MatchAll,
    /// Bucket reached only through outsider redirection, never by matching
    Outsiders,
    ExactName { matcher: NameMatcher },
    ExactPrefix { matcher: NameMatcher },
    ExactSuffix { matcher: NameMatcher },
    ExactHeadAndTail { head: NameMatcher, tail: NameMatcher },
    /// Field name comes from [`SortGroup::with_metadata_field`]
    HasMetadataField,
    BookmarkedOnly,
    HasIcon {
        #[cfg_attr(feature = "serde", serde(default))]
        icon_name: Option<String>,
    },
}

/// One rule of a [`SortSpec`](crate::SortSpec).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortGroup {
    pub kind: GroupKind,
    pub files_only: bool,
    pub folders_only: bool,
    /// Match against `name.ext` instead of the basename
    pub match_with_extension: bool,
    pub order: Option<OrderSpec>,
    pub secondary_order: Option<OrderSpec>,
    pub with_metadata_field: Option<String>,
    /// Entries matched here are sorted in the bucket of this group instead
    pub combine_with: Option<usize>,
    pub priority: Option<i32>,
}

impl Default for SortGroup {
    fn default() -> Self {
        SortGroup::new(GroupKind::MatchAll)
    }
}

impl SortGroup {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            files_only: false,
            folders_only: false,
            match_with_extension: false,
            order: None,
            secondary_order: None,
            with_metadata_field: None,
            combine_with: None,
            priority: None,
        }
    }

    pub fn match_all() -> Self {
        SortGroup::new(GroupKind::MatchAll)
    }

    pub fn outsiders() -> Self {
        SortGroup::new(GroupKind::Outsiders)
    }

    pub fn exact_name(matcher: NameMatcher) -> Self {
        SortGroup::new(GroupKind::ExactName { matcher })
    }

    pub fn exact_prefix(matcher: NameMatcher) -> Self {
        SortGroup::new(GroupKind::ExactPrefix { matcher })
    }

    pub fn exact_suffix(matcher: NameMatcher) -> Self {
        SortGroup::new(GroupKind::ExactSuffix { matcher })
    }

    pub fn head_and_tail(head: NameMatcher, tail: NameMatcher) -> Self {
        SortGroup::new(GroupKind::ExactHeadAndTail { head, tail })
    }

    pub fn has_metadata_field(field: impl Into<String>) -> Self {
        SortGroup::new(GroupKind::HasMetadataField).with_metadata_field(field)
    }

    pub fn files_only(mut self) -> Self {
        self.files_only = true;
        self
    }

    pub fn folders_only(mut self) -> Self {
        self.folders_only = true;
        self
    }

    pub fn matching_with_extension(mut self) -> Self {
        self.match_with_extension = true;
        self
    }

    pub fn ordered_by(mut self, order: impl Into<OrderSpec>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn then_by(mut self, order: impl Into<OrderSpec>) -> Self {
        self.secondary_order = Some(order.into());
        self
    }

    pub fn with_metadata_field(mut self, field: impl Into<String>) -> Self {
        self.with_metadata_field = Some(field.into());
        self
    }

    pub fn combined_with(mut self, group_idx: usize) -> Self {
        self.combine_with = Some(group_idx);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Orders set directly on this group, primary first.
    pub fn orders(&self) -> impl Iterator<Item = &OrderSpec> {
        self.order.iter().chain(self.secondary_order.iter())
    }
}
