//! Frontmatter lookups for the has-metadata-field rule and the metadata
//! orders.

use super::classified::{ClassifiedEntry, SortLevel};
use crate::context::SortContext;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use treesort_model::{DateLayout, MetadataExtractor, OrderSpec, SortSpec, TreeEntry};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})[-/.](\d{1,2})[-/.](\d{4})").expect("date pattern is valid")
});

/// Notes whose frontmatter describes `entry`, highest priority first.
///
/// A file is its own note. A folder is described by the index note named by
/// the folder-note resolver, then by the note sharing the folder's name.
pub fn note_paths(entry: &TreeEntry, ctx: &SortContext<'_>) -> Vec<String> {
    match entry {
        TreeEntry::File(file) => vec![file.path.clone()],
        TreeEntry::Folder(folder) => {
            let mut paths = Vec::with_capacity(2);
            if let Some(basename) = ctx
                .lookups
                .folder_notes
                .and_then(|resolver| resolver.index_note_basename(&folder.path))
            {
                paths.push(folder.note_path(&basename));
            }
            if !folder.is_root() {
                let own = folder.note_path(&folder.name);
                if !paths.contains(&own) {
                    paths.push(own);
                }
            }
            paths
        }
    }
}

/// Whether any note describing `entry` declares `field`, whatever its value.
pub fn has_metadata_field(entry: &TreeEntry, field: &str, ctx: &SortContext<'_>) -> bool {
    let Some(lookup) = ctx.lookups.metadata else {
        return false;
    };
    note_paths(entry, ctx)
        .iter()
        .any(|path| lookup.has_field(path, field))
}

/// First non-null value of `field` across the notes describing `entry`,
/// flattened to text. Empty text counts as absent.
pub fn metadata_value(entry: &TreeEntry, field: &str, ctx: &SortContext<'_>) -> Option<String> {
    let lookup = ctx.lookups.metadata?;
    note_paths(entry, ctx)
        .iter()
        .filter_map(|path| lookup.frontmatter(path))
        .filter_map(|frontmatter| frontmatter.get(field))
        .find(|value| !value.is_null())
        .and_then(stringify)
        .filter(|text| !text.is_empty())
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(stringify)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Null | Value::Object(_) => None,
    }
}

/// Rewrites a raw value; `None` means the value could not be used.
pub fn apply_extractor(extractor: &MetadataExtractor, raw: &str) -> Option<String> {
    match extractor {
        MetadataExtractor::Date { layout } => extract_date(raw, *layout),
    }
}

fn extract_date(raw: &str, layout: DateLayout) -> Option<String> {
    let captures = DATE_PATTERN.captures(raw)?;
    let first: u32 = captures.get(1)?.as_str().parse().ok()?;
    let second: u32 = captures.get(2)?.as_str().parse().ok()?;
    let year: i32 = captures.get(3)?.as_str().parse().ok()?;
    let (day, month) = match layout {
        DateLayout::DayMonthYear => (first, second),
        DateLayout::MonthDayYear => (second, first),
    };
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%Y-%m-%d").to_string())
}

/// The order sitting at `level` for an entry in `group_idx`.
pub fn order_at_level<'s>(
    spec: &'s SortSpec,
    group_idx: usize,
    level: SortLevel,
) -> Option<&'s OrderSpec> {
    match level {
        SortLevel::Primary => spec.groups.get(group_idx)?.order.as_ref(),
        SortLevel::Secondary => spec.groups.get(group_idx)?.secondary_order.as_ref(),
        SortLevel::DerivedPrimary => spec.default_order.as_ref(),
        SortLevel::DerivedSecondary => spec.default_secondary_order.as_ref(),
    }
}

/// Fills the metadata slot of every level whose order reads metadata.
pub fn resolve_metadata_levels(
    classified: &mut ClassifiedEntry<'_>,
    spec: &SortSpec,
    ctx: &SortContext<'_>,
) {
    let group = spec.groups.get(classified.group_idx);
    for level in SortLevel::ALL {
        let Some(order) = order_at_level(spec, classified.group_idx, level) else {
            continue;
        };
        if !order.order.is_by_metadata() {
            continue;
        }
        let group_field = if level.is_derived() {
            None
        } else {
            group.and_then(|g| g.with_metadata_field.as_deref())
        };
        let field = order
            .metadata_field
            .as_deref()
            .or(group_field)
            .unwrap_or(ctx.settings.default_metadata_field.as_str());

        let value = metadata_value(classified.entry, field, ctx).and_then(|raw| {
            match &order.extractor {
                Some(extractor) => apply_extractor(extractor, &raw),
                None => Some(raw),
            }
        });
        classified.metadata[level.index()] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Lookups;
    use serde_json::json;
    use std::collections::HashMap;
    use treesort_contracts::prelude::*;
    use treesort_model::{FileEntry, FolderEntry, OrderKind, SortGroup};

    fn frontmatter(value: Value) -> Frontmatter {
        value.as_object().cloned().unwrap_or_default()
    }

    fn folder(path: &str) -> TreeEntry {
        FolderEntry::new(path, vec![]).unwrap().into()
    }

    #[test]
    fn test_index_note_wins_over_folder_note() {
        let mut cache: HashMap<String, Frontmatter> = HashMap::new();
        cache.insert("work/work.md".into(), frontmatter(json!({ "rank": "b" })));
        cache.insert("work/index.md".into(), frontmatter(json!({ "rank": "a" })));
        let notes = FixedIndexNote("index".into());
        let ctx = SortContext::new(
            Lookups::new().with_metadata(&cache).with_folder_notes(&notes),
            Default::default(),
        );

        let entry = folder("work");
        assert_eq!(note_paths(&entry, &ctx), vec!["work/index.md", "work/work.md"]);
        assert_eq!(metadata_value(&entry, "rank", &ctx).as_deref(), Some("a"));
    }

    #[test]
    fn test_null_index_value_falls_back() {
        let mut cache: HashMap<String, Frontmatter> = HashMap::new();
        cache.insert("work/work.md".into(), frontmatter(json!({ "rank": 3 })));
        cache.insert("work/index.md".into(), frontmatter(json!({ "rank": null })));
        let notes = FixedIndexNote("index".into());
        let ctx = SortContext::new(
            Lookups::new().with_metadata(&cache).with_folder_notes(&notes),
            Default::default(),
        );

        let entry = folder("work");
        assert!(has_metadata_field(&entry, "rank", &ctx));
        assert_eq!(metadata_value(&entry, "rank", &ctx).as_deref(), Some("3"));
    }

    #[test]
    fn test_stringify_values() {
        assert_eq!(stringify(&json!(["a", 2, true])).as_deref(), Some("a,2,true"));
        assert_eq!(stringify(&json!({ "x": 1 })), None);
        assert_eq!(stringify(&json!(1.5)).as_deref(), Some("1.5"));
    }

    #[test]
    fn test_date_extractor() {
        let dmy = MetadataExtractor::Date {
            layout: DateLayout::DayMonthYear,
        };
        let mdy = MetadataExtractor::Date {
            layout: DateLayout::MonthDayYear,
        };
        assert_eq!(apply_extractor(&dmy, "due 03-04-2024").as_deref(), Some("2024-04-03"));
        assert_eq!(apply_extractor(&mdy, "03/04/2024").as_deref(), Some("2024-03-04"));
        assert_eq!(apply_extractor(&dmy, "31.02.2024"), None);
        assert_eq!(apply_extractor(&dmy, "soon"), None);
    }

    #[test]
    fn test_field_precedence_per_level() {
        let mut cache: HashMap<String, Frontmatter> = HashMap::new();
        cache.insert(
            "a.md".into(),
            frontmatter(json!({ "explicit": "e", "group": "g", "sort-index-value": "d" })),
        );
        let ctx = SortContext::new(Lookups::new().with_metadata(&cache), Default::default());

        let spec = SortSpec::new(vec![
            SortGroup::match_all()
                .with_metadata_field("group")
                .ordered_by(
                    OrderSpec::new(OrderKind::ByMetadataFieldAlphabetical)
                        .with_metadata_field("explicit"),
                )
                .then_by(OrderKind::ByMetadataFieldAlphabeticalReverse),
        ])
        .ordered_by(OrderKind::ByMetadataFieldTrueAlphabetical)
        .then_by(OrderKind::Alphabetical);

        let entry: TreeEntry = FileEntry::new("a.md", 1, 1).unwrap().into();
        let mut classified = ClassifiedEntry::new(&entry, 0);
        resolve_metadata_levels(&mut classified, &spec, &ctx);

        assert_eq!(classified.metadata_at(SortLevel::Primary), Some("e"));
        assert_eq!(classified.metadata_at(SortLevel::Secondary), Some("g"));
        assert_eq!(classified.metadata_at(SortLevel::DerivedPrimary), Some("d"));
        assert_eq!(classified.metadata_at(SortLevel::DerivedSecondary), None);
    }
}
