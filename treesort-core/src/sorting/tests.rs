//! Scenario tests for whole sort passes

#[cfg(test)]
mod tests {
    use crate::context::{Lookups, SortContext, SortSettings};
    use crate::sorting::{sort_by_host_order, sort_entries, sort_folder_children};
    use serde_json::json;
    use std::collections::HashMap;
    use treesort_contracts::prelude::*;
    use treesort_model::regex::Regex;
    use treesort_model::{
        FileEntry, FolderEntry, HostSortOrder, NameMatcher, OrderKind, OrderSpec, SortGroup,
        SortSpec, TreeEntry,
    };

    fn file(path: &str, ctime: i64, mtime: i64) -> TreeEntry {
        FileEntry::new(path, ctime, mtime).unwrap().into()
    }

    fn folder(path: &str, children: Vec<TreeEntry>) -> TreeEntry {
        FolderEntry::new(path, children).unwrap().into()
    }

    fn names(entries: &[&TreeEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name().to_string()).collect()
    }

    fn chapters() -> FolderEntry {
        FolderEntry::new(
            "book",
            vec![
                file("book/Chapter 2.md", 1, 1),
                file("book/Chapter 10.md", 1, 1),
                file("book/Notes.md", 1, 1),
                file("book/Chapter 1.md", 1, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_chapter_scenario() {
        let spec = SortSpec::new(vec![
            SortGroup::exact_prefix(NameMatcher::regex(Regex::new(r"^Chapter (.+)$").unwrap())),
            SortGroup::match_all(),
        ]);
        let folder = chapters();
        let sorted = sort_folder_children(&folder, Some(&spec), &SortContext::default());
        assert_eq!(
            names(&sorted),
            vec!["Chapter 1.md", "Chapter 2.md", "Chapter 10.md", "Notes.md"]
        );
    }

    #[test]
    fn test_chapter_scenario_with_literal_prefix() {
        let spec = SortSpec::new(vec![
            SortGroup::exact_prefix(NameMatcher::literal("Chapter ")),
            SortGroup::match_all(),
        ]);
        let folder = chapters();
        let sorted = sort_folder_children(&folder, Some(&spec), &SortContext::default());
        assert_eq!(
            names(&sorted),
            vec!["Chapter 1.md", "Chapter 2.md", "Chapter 10.md", "Notes.md"]
        );
    }

    #[test]
    fn test_hidden_entry_removed_even_if_it_matches() {
        let spec = SortSpec::new(vec![
            SortGroup::exact_prefix(NameMatcher::literal("dr")),
            SortGroup::match_all(),
        ])
        .hiding("draft.md");
        let folder = FolderEntry::root(vec![
            file("draft.md", 1, 1),
            file("drum.md", 1, 1),
            file("a.md", 1, 1),
        ]);
        let sorted = sort_folder_children(&folder, Some(&spec), &SortContext::default());
        assert_eq!(names(&sorted), vec!["drum.md", "a.md"]);
    }

    #[test]
    fn test_ignored_entries_follow_in_input_order() {
        let spec = SortSpec::new(vec![SortGroup::match_all()])
            .ignoring("z.md")
            .ignoring("b.md");
        let entries = [
            file("z.md", 1, 1),
            file("c.md", 1, 1),
            file("b.md", 1, 1),
            file("a.md", 1, 1),
        ];
        let sorted = sort_entries("/", &entries, Some(&spec), &SortContext::default());
        assert_eq!(names(&sorted), vec!["a.md", "c.md", "z.md", "b.md"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let spec = SortSpec::new(vec![
            SortGroup::exact_suffix(NameMatcher::literal("log")).ordered_by(OrderKind::ByModifiedTime),
            SortGroup::match_all(),
        ]);
        let entries = [
            file("b-log.md", 1, 5),
            file("a-log.md", 1, 5),
            file("c-log.md", 1, 2),
            file("note.md", 1, 1),
            folder("x", vec![]),
        ];
        let ctx = SortContext::default();
        let first = sort_entries("/", &entries, Some(&spec), &ctx);
        let second = sort_entries("/", first.iter().copied(), Some(&spec), &ctx);
        assert_eq!(names(&first), names(&second));
        assert_eq!(
            names(&first),
            vec!["c-log.md", "a-log.md", "b-log.md", "note.md", "x"]
        );
    }

    #[test]
    fn test_empty_folder_last_under_advanced_orders() {
        let entries = [
            folder("empty", vec![]),
            folder("old", vec![file("old/a.md", 1, 10)]),
            folder("new", vec![file("new/a.md", 1, 30), file("new/b.md", 1, 20)]),
        ];
        let ctx = SortContext::default();

        for (order, expected) in [
            (OrderKind::ByModifiedTimeAdvanced, vec!["old", "new", "empty"]),
            (OrderKind::ByModifiedTimeReverseAdvanced, vec!["new", "old", "empty"]),
        ] {
            let spec = SortSpec::new(vec![SortGroup::match_all().ordered_by(order)]);
            let sorted = sort_entries("/", &entries, Some(&spec), &ctx);
            assert_eq!(names(&sorted), expected, "{order}");
        }
    }

    #[test]
    fn test_present_metadata_before_absent_both_directions() {
        let mut cache: HashMap<String, Frontmatter> = HashMap::new();
        for (path, rank) in [("b.md", json!("2")), ("c.md", json!("1")), ("d.md", json!(""))] {
            cache.insert(
                path.to_string(),
                json!({ "rank": rank }).as_object().cloned().unwrap(),
            );
        }
        let ctx = SortContext::new(Lookups::new().with_metadata(&cache), SortSettings::default());
        let entries = [
            file("a.md", 1, 1),
            file("b.md", 1, 1),
            file("c.md", 1, 1),
            file("d.md", 1, 1),
        ];

        for (order, expected) in [
            (OrderKind::ByMetadataFieldAlphabetical, vec!["c.md", "b.md", "a.md", "d.md"]),
            (OrderKind::ByMetadataFieldAlphabeticalReverse, vec!["b.md", "c.md", "a.md", "d.md"]),
        ] {
            let spec = SortSpec::new(vec![SortGroup::match_all()])
                .ordered_by(OrderSpec::new(order).with_metadata_field("rank"));
            let sorted = sort_entries("/", &entries, Some(&spec), &ctx);
            assert_eq!(names(&sorted), expected, "{order}");
        }
    }

    #[test]
    fn test_redirected_groups_share_one_bucket() {
        let spec = SortSpec::new(vec![
            SortGroup::exact_prefix(NameMatcher::literal("b")).ordered_by(OrderKind::AlphabeticalReverse),
            SortGroup::exact_prefix(NameMatcher::literal("a")).combined_with(0),
            SortGroup::match_all(),
        ]);
        let entries = [
            file("c.md", 1, 1),
            file("a1.md", 1, 1),
            file("b1.md", 1, 1),
            file("a2.md", 1, 1),
        ];
        let sorted = sort_entries("/", &entries, Some(&spec), &SortContext::default());
        assert_eq!(names(&sorted), vec!["b1.md", "a2.md", "a1.md", "c.md"]);
    }

    #[test]
    fn test_priority_changes_matching_not_position() {
        let mut spec = SortSpec::new(vec![
            SortGroup::exact_suffix(NameMatcher::literal("-old")),
            SortGroup::exact_prefix(NameMatcher::literal("2024")).with_priority(1),
            SortGroup::match_all(),
        ]);
        spec.derive_priority_order();
        let entries = [
            file("2024-old.md", 1, 1),
            file("2023-old.md", 1, 1),
            file("misc.md", 1, 1),
        ];
        let sorted = sort_entries("/", &entries, Some(&spec), &SortContext::default());
        assert_eq!(names(&sorted), vec!["2023-old.md", "2024-old.md", "misc.md"]);
    }

    #[test]
    fn test_bookmark_order_outside_bookmark_group() {
        let ranks: HashMap<String, u32> =
            HashMap::from([("b.md".to_string(), 1), ("c.md".to_string(), 2)]);
        let ctx = SortContext::new(Lookups::new().with_bookmarks(&ranks), SortSettings::default());
        let spec = SortSpec::new(vec![SortGroup::match_all().ordered_by(OrderKind::ByBookmarkOrder)]);
        let entries = [file("a.md", 1, 1), file("c.md", 1, 1), file("b.md", 1, 1)];
        let sorted = sort_entries("/", &entries, Some(&spec), &ctx);
        assert_eq!(names(&sorted), vec!["b.md", "c.md", "a.md"]);
    }

    #[test]
    fn test_host_default_order_in_a_group() {
        let spec = SortSpec::new(vec![SortGroup::match_all().ordered_by(OrderKind::HostDefault)]);
        let entries = [file("a.md", 1, 10), file("b.md", 1, 30), file("c.md", 1, 20)];
        let ctx = SortContext::default().with_host_order(HostSortOrder::ByModifiedTime);
        let sorted = sort_entries("/", &entries, Some(&spec), &ctx);
        assert_eq!(names(&sorted), vec!["b.md", "c.md", "a.md"]);
    }

    #[test]
    fn test_without_spec_host_order_applies() {
        let entries = [
            file("b.md", 1, 10),
            folder("zeta", vec![]),
            file("a.md", 1, 30),
            folder("Alpha", vec![]),
        ];
        let ctx = SortContext::default().with_host_order(HostSortOrder::ByModifiedTime);
        let sorted = sort_entries("/", &entries, None, &ctx);
        assert_eq!(names(&sorted), vec!["Alpha", "zeta", "a.md", "b.md"]);

        let reversed = sort_by_host_order(&entries, HostSortOrder::AlphabeticalReverse);
        assert_eq!(names(&reversed), vec!["zeta", "Alpha", "b.md", "a.md"]);
    }

    #[test]
    fn test_returned_entries_are_the_callers() {
        let folder = chapters();
        let spec = SortSpec::new(vec![SortGroup::match_all()]);
        let sorted = sort_folder_children(&folder, Some(&spec), &SortContext::default());
        assert!(
            sorted
                .iter()
                .all(|entry| folder.children.iter().any(|child| std::ptr::eq(child, *entry)))
        );
    }
}
