//! Spec file loading and the scan-sort-render path.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treesort_config::{ConfigLoadError, SpecFile, load_catalog, render_tree, scan_tree};
use treesort_core::{SortContext, SortSpecCatalog, SpecError};
use treesort_model::{GroupKind, NameMatcher, OrderKind};

const BOOK_SPECS: &str = r#"
[[specs]]
target_folders = ["book/..."]
default_order = { order = "by-modified-time" }
items_to_hide = ["draft.md"]
outsiders_group = 2

[[specs.groups]]
kind = { kind = "exact-prefix", matcher = { regex = { pattern = "^Chapter (\\d+)", normalizer = { kind = "number" } } } }
order = { order = "alphabetical" }

[[specs.groups]]
kind = { kind = "has-metadata-field" }
with_metadata_field = "status"
priority = 5

[[specs.groups]]
kind = { kind = "outsiders" }

[[specs]]
target_folders = ["/"]

[[specs.groups]]
kind = { kind = "match-all" }
order = { order = "by-metadata-field-alphabetical", metadata_field = "due", extractor = { kind = "date", layout = "day-month-year" } }
"#;

#[test]
fn toml_spec_file_builds_catalog() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("specs.toml");
    fs::write(&path, BOOK_SPECS).expect("write specs");

    let catalog = load_catalog(&path).expect("catalog");
    assert_eq!(catalog.len(), 2);

    let book = catalog.resolve("book/part-1").expect("book spec");
    assert_eq!(book.priority_order, Some(vec![1, 0]));
    assert!(book.items_to_hide.contains("draft.md"));
    assert!(matches!(
        &book.groups[0].kind,
        GroupKind::ExactPrefix {
            matcher: NameMatcher::Regex(_)
        }
    ));
    assert_eq!(
        book.default_order.as_ref().map(|order| order.order),
        Some(OrderKind::ByModifiedTime)
    );

    let root = catalog.resolve("/").expect("root spec");
    let order = root.groups[0].order.as_ref().expect("group order");
    assert_eq!(order.metadata_field.as_deref(), Some("due"));
    assert!(order.extractor.is_some());
}

#[test]
fn json_spec_file_parses() {
    let raw = r#"{
        "specs": [{
            "target_folders": ["notes"],
            "groups": [
                { "kind": { "kind": "exact-suffix", "matcher": { "literal": "-todo" } }, "files_only": true },
                { "kind": { "kind": "has-icon", "icon_name": "LiStar" } }
            ],
            "items_to_ignore": ["scratch.md"]
        }]
    }"#;
    let file = SpecFile::parse(raw, Path::new("specs.json")).expect("parse");
    assert_eq!(file.specs.len(), 1);
    assert!(file.specs[0].groups[0].files_only);
    assert_eq!(
        file.specs[0].groups[1].kind,
        GroupKind::HasIcon {
            icon_name: Some("LiStar".to_string())
        }
    );
}

#[test]
fn invalid_spec_is_rejected_with_its_index() {
    let raw = r#"
[[specs]]
target_folders = ["a"]
[[specs.groups]]
kind = { kind = "match-all" }

[[specs]]
target_folders = ["b"]
outsiders_files_group = 4
[[specs.groups]]
kind = { kind = "match-all" }
"#;
    let file = SpecFile::parse(raw, Path::new("specs.toml")).expect("parse");
    let err = file
        .into_catalog(Path::new("specs.toml"))
        .expect_err("out of range outsider bucket");
    match err {
        ConfigLoadError::InvalidSpec { index, source, .. } => {
            assert_eq!(index, 1);
            assert!(matches!(source, SpecError::GroupIndexOutOfRange { index: 4, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_file_reports_parse_error() {
    let err = SpecFile::parse("specs = 3", Path::new("specs.toml")).expect_err("not a list");
    assert!(matches!(err, ConfigLoadError::Parse { .. }));

    let missing = load_catalog(Path::new("/definitely/not/here.toml")).expect_err("missing");
    assert!(matches!(missing, ConfigLoadError::Io { .. }));
}

#[test]
fn scanned_directory_renders_in_spec_order() {
    let dir = TempDir::new().expect("tempdir");
    let root = dir.path();
    for name in ["Chapter 10.md", "Chapter 2.md", "notes.md", ".obsidian"] {
        fs::write(root.join(name), "").expect("write file");
    }
    fs::create_dir(root.join("assets")).expect("mkdir");
    fs::write(root.join("assets/b.png"), "").expect("write");
    fs::write(root.join("assets/a.png"), "").expect("write");

    let specs = r#"
[[specs]]
target_folders = ["/"]
[[specs.groups]]
kind = { kind = "exact-prefix", matcher = { regex = { pattern = "^Chapter (\\d+)" } } }
[[specs.groups]]
kind = { kind = "match-all" }
"#;
    let catalog = SpecFile::parse(specs, Path::new("specs.toml"))
        .and_then(|file| file.into_catalog(Path::new("specs.toml")))
        .expect("catalog");

    let tree = scan_tree(root, None).expect("scan");
    let rendered = render_tree(&tree, &catalog, &SortContext::default()).expect("render");
    assert_eq!(
        rendered,
        "Chapter 2.md\nChapter 10.md\nassets/\n  a.png\n  b.png\nnotes.md\n"
    );

    let shallow = scan_tree(root, Some(0)).expect("scan");
    let rendered = render_tree(&shallow, &SortSpecCatalog::new(), &SortContext::default()).expect("render");
    assert_eq!(rendered, "assets/\nChapter 2.md\nChapter 10.md\nnotes.md\n");
}
