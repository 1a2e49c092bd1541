//! Named ordering strategies and the host's own sort criterion.

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Every ordering strategy a group or a folder default can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OrderKind {
    Alphabetical,
    AlphabeticalWithFileExt,
    AlphabeticalReverse,
    AlphabeticalReverseWithFileExt,
    TrueAlphabetical,
    TrueAlphabeticalWithFileExt,
    TrueAlphabeticalReverse,
    TrueAlphabeticalReverseWithFileExt,
    /// Raw code point comparison, no collation
    Unicode,
    UnicodeReverse,
    AlphabeticalWithFilesPreferred,
    AlphabeticalWithFoldersPreferred,
    ByModifiedTime,
    ByModifiedTimeAdvanced,
    ByModifiedTimeAdvancedRecursive,
    ByModifiedTimeReverse,
    ByModifiedTimeReverseAdvanced,
    ByModifiedTimeReverseAdvancedRecursive,
    ByCreatedTime,
    ByCreatedTimeAdvanced,
    ByCreatedTimeAdvancedRecursive,
    ByCreatedTimeReverse,
    ByCreatedTimeReverseAdvanced,
    ByCreatedTimeReverseAdvancedRecursive,
    ByMetadataFieldAlphabetical,
    ByMetadataFieldTrueAlphabetical,
    ByMetadataFieldAlphabeticalReverse,
    ByMetadataFieldTrueAlphabeticalReverse,
    ByBookmarkOrder,
    ByBookmarkOrderReverse,
    FileFirst,
    FolderFirst,
    /// Whatever the host currently has selected
    HostDefault,
}

impl OrderKind {
    pub const ALL: [OrderKind; 33] = [
        OrderKind::Alphabetical,
        OrderKind::AlphabeticalWithFileExt,
        OrderKind::AlphabeticalReverse,
        OrderKind::AlphabeticalReverseWithFileExt,
        OrderKind::TrueAlphabetical,
        OrderKind::TrueAlphabeticalWithFileExt,
        OrderKind::TrueAlphabeticalReverse,
        OrderKind::TrueAlphabeticalReverseWithFileExt,
        OrderKind::Unicode,
        OrderKind::UnicodeReverse,
        OrderKind::AlphabeticalWithFilesPreferred,
        OrderKind::AlphabeticalWithFoldersPreferred,
        OrderKind::ByModifiedTime,
        OrderKind::ByModifiedTimeAdvanced,
        OrderKind::ByModifiedTimeAdvancedRecursive,
        OrderKind::ByModifiedTimeReverse,
        OrderKind::ByModifiedTimeReverseAdvanced,
        OrderKind::ByModifiedTimeReverseAdvancedRecursive,
        OrderKind::ByCreatedTime,
        OrderKind::ByCreatedTimeAdvanced,
        OrderKind::ByCreatedTimeAdvancedRecursive,
        OrderKind::ByCreatedTimeReverse,
        OrderKind::ByCreatedTimeReverseAdvanced,
        OrderKind::ByCreatedTimeReverseAdvancedRecursive,
        OrderKind::ByMetadataFieldAlphabetical,
        OrderKind::ByMetadataFieldTrueAlphabetical,
        OrderKind::ByMetadataFieldAlphabeticalReverse,
        OrderKind::ByMetadataFieldTrueAlphabeticalReverse,
        OrderKind::ByBookmarkOrder,
        OrderKind::ByBookmarkOrderReverse,
        OrderKind::FileFirst,
        OrderKind::FolderFirst,
        OrderKind::HostDefault,
    ];

    /// The order applied when nothing else discriminates a pair.
    pub const FINAL_DEFAULT: OrderKind = OrderKind::AlphabeticalWithFilesPreferred;

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Alphabetical => "alphabetical",
            OrderKind::AlphabeticalWithFileExt => "alphabetical-with-file-ext",
            OrderKind::AlphabeticalReverse => "alphabetical-reverse",
            OrderKind::AlphabeticalReverseWithFileExt => {
                "alphabetical-reverse-with-file-ext"
            }
            OrderKind::TrueAlphabetical => "true-alphabetical",
            OrderKind::TrueAlphabeticalWithFileExt => {
                "true-alphabetical-with-file-ext"
            }
            OrderKind::TrueAlphabeticalReverse => "true-alphabetical-reverse",
            OrderKind::TrueAlphabeticalReverseWithFileExt => {
                "true-alphabetical-reverse-with-file-ext"
            }
            OrderKind::Unicode => "unicode",
            OrderKind::UnicodeReverse => "unicode-reverse",
            OrderKind::AlphabeticalWithFilesPreferred => {
                "alphabetical-with-files-preferred"
            }
            OrderKind::AlphabeticalWithFoldersPreferred => {
                "alphabetical-with-folders-preferred"
            }
            OrderKind::ByModifiedTime => "by-modified-time",
            OrderKind::ByModifiedTimeAdvanced => "by-modified-time-advanced",
            OrderKind::ByModifiedTimeAdvancedRecursive => {
                "by-modified-time-advanced-recursive"
            }
            OrderKind::ByModifiedTimeReverse => "by-modified-time-reverse",
            OrderKind::ByModifiedTimeReverseAdvanced => {
                "by-modified-time-reverse-advanced"
            }
            OrderKind::ByModifiedTimeReverseAdvancedRecursive => {
                "by-modified-time-reverse-advanced-recursive"
            }
            OrderKind::ByCreatedTime => "by-created-time",
            OrderKind::ByCreatedTimeAdvanced => "by-created-time-advanced",
            OrderKind::ByCreatedTimeAdvancedRecursive => {
                "by-created-time-advanced-recursive"
            }
            OrderKind::ByCreatedTimeReverse => "by-created-time-reverse",
            OrderKind::ByCreatedTimeReverseAdvanced => {
                "by-created-time-reverse-advanced"
            }
            OrderKind::ByCreatedTimeReverseAdvancedRecursive => {
                "by-created-time-reverse-advanced-recursive"
            }
            OrderKind::ByMetadataFieldAlphabetical => {
                "by-metadata-field-alphabetical"
            }
            OrderKind::ByMetadataFieldTrueAlphabetical => {
                "by-metadata-field-true-alphabetical"
            }
            OrderKind::ByMetadataFieldAlphabeticalReverse => {
                "by-metadata-field-alphabetical-reverse"
            }
            OrderKind::ByMetadataFieldTrueAlphabeticalReverse => {
                "by-metadata-field-true-alphabetical-reverse"
            }
            OrderKind::ByBookmarkOrder => "by-bookmark-order",
            OrderKind::ByBookmarkOrderReverse => "by-bookmark-order-reverse",
            OrderKind::FileFirst => "file-first",
            OrderKind::FolderFirst => "folder-first",
            OrderKind::HostDefault => "host-default",
        }
    }

    pub fn is_by_metadata(&self) -> bool {
        matches!(
            self,
            OrderKind::ByMetadataFieldAlphabetical
                | OrderKind::ByMetadataFieldTrueAlphabetical
                | OrderKind::ByMetadataFieldAlphabeticalReverse
                | OrderKind::ByMetadataFieldTrueAlphabeticalReverse
        )
    }

    pub fn is_by_bookmark(&self) -> bool {
        matches!(
            self,
            OrderKind::ByBookmarkOrder | OrderKind::ByBookmarkOrderReverse
        )
    }

    /// Advanced date orders read aggregated folder timestamps.
    pub fn needs_folder_dates(&self) -> bool {
        matches!(
            self,
            OrderKind::ByModifiedTimeAdvanced
                | OrderKind::ByModifiedTimeAdvancedRecursive
                | OrderKind::ByModifiedTimeReverseAdvanced
                | OrderKind::ByModifiedTimeReverseAdvancedRecursive
                | OrderKind::ByCreatedTimeAdvanced
                | OrderKind::ByCreatedTimeAdvancedRecursive
                | OrderKind::ByCreatedTimeReverseAdvanced
                | OrderKind::ByCreatedTimeReverseAdvancedRecursive
        )
    }

    pub fn needs_deep_folder_dates(&self) -> bool {
        matches!(
            self,
            OrderKind::ByModifiedTimeAdvancedRecursive
                | OrderKind::ByModifiedTimeReverseAdvancedRecursive
                | OrderKind::ByCreatedTimeAdvancedRecursive
                | OrderKind::ByCreatedTimeReverseAdvancedRecursive
        )
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderKind::ALL
            .iter()
            .copied()
            .find(|order| order.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownOrder(s.to_string()))
    }
}

/// The single criterion the host's own file explorer sorts by.
///
/// The host labels `ByModifiedTime` / `ByCreatedTime` as "new to old", which
/// is the reverse of the engine's ascending time orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum HostSortOrder {
    #[default]
    Alphabetical,
    AlphabeticalReverse,
    ByModifiedTime,
    ByModifiedTimeReverse,
    ByCreatedTime,
    ByCreatedTimeReverse,
}

impl HostSortOrder {
    pub const ALL: [HostSortOrder; 6] = [
        HostSortOrder::Alphabetical,
        HostSortOrder::AlphabeticalReverse,
        HostSortOrder::ByModifiedTime,
        HostSortOrder::ByModifiedTimeReverse,
        HostSortOrder::ByCreatedTime,
        HostSortOrder::ByCreatedTimeReverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostSortOrder::Alphabetical => "alphabetical",
            HostSortOrder::AlphabeticalReverse => "alphabeticalReverse",
            HostSortOrder::ByModifiedTime => "byModifiedTime",
            HostSortOrder::ByModifiedTimeReverse => "byModifiedTimeReverse",
            HostSortOrder::ByCreatedTime => "byCreatedTime",
            HostSortOrder::ByCreatedTimeReverse => "byCreatedTimeReverse",
        }
    }

    /// Engine order equivalent to this host criterion. Time criteria are
    /// direction-inverted on purpose.
    pub fn as_order_kind(&self) -> OrderKind {
        match self {
            HostSortOrder::Alphabetical => OrderKind::Alphabetical,
            HostSortOrder::AlphabeticalReverse => OrderKind::AlphabeticalReverse,
            HostSortOrder::ByModifiedTime => OrderKind::ByModifiedTimeReverse,
            HostSortOrder::ByModifiedTimeReverse => OrderKind::ByModifiedTime,
            HostSortOrder::ByCreatedTime => OrderKind::ByCreatedTimeReverse,
            HostSortOrder::ByCreatedTimeReverse => OrderKind::ByCreatedTime,
        }
    }
}

impl fmt::Display for HostSortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostSortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HostSortOrder::ALL
            .iter()
            .copied()
            .find(|order| order.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownHostOrder(s.to_string()))
    }
}

/// Day/month ordering of a date written inside a metadata value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DateLayout {
    /// `dd-mm-yyyy`
    DayMonthYear,
    /// `mm-dd-yyyy`
    MonthDayYear,
}

/// Transformation applied to a raw metadata value before it is compared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum MetadataExtractor {
    /// Pull a date out of the value and rewrite it as `yyyy-mm-dd`
    Date { layout: DateLayout },
}

/// One ordering selection: the strategy plus its metadata parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderSpec {
    pub order: OrderKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata_field: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub extractor: Option<MetadataExtractor>,
}

impl OrderSpec {
    pub fn new(order: OrderKind) -> Self {
        Self {
            order,
            metadata_field: None,
            extractor: None,
        }
    }

    pub fn with_metadata_field(mut self, field: impl Into<String>) -> Self {
        self.metadata_field = Some(field.into());
        self
    }

    pub fn with_extractor(mut self, extractor: MetadataExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }
}

impl From<OrderKind> for OrderSpec {
    fn from(order: OrderKind) -> Self {
        OrderSpec::new(order)
    }
}
