//! Text rendering of a sorted tree.

use std::fmt::{self, Write};
use treesort_core::{SortContext, SortSpecCatalog, sort_folder_children};
use treesort_model::{FolderEntry, TreeEntry};

const INDENT: &str = "  ";

/// Renders every folder below `root` with its children ordered by the spec
/// the catalog assigns to it. Folders carry a trailing `/`.
pub fn render_tree(
    root: &FolderEntry,
    catalog: &SortSpecCatalog,
    ctx: &SortContext<'_>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render_children(root, catalog, ctx, 0, &mut out)?;
    Ok(out)
}

/// Writes the sorted children of `folder`, descending into subfolders.
pub fn render_children<W: Write>(
    folder: &FolderEntry,
    catalog: &SortSpecCatalog,
    ctx: &SortContext<'_>,
    level: usize,
    out: &mut W,
) -> fmt::Result {
    let spec = catalog.resolve(&folder.path);
    let indent = INDENT.repeat(level);
    for child in sort_folder_children(folder, spec, ctx) {
        match child {
            TreeEntry::Folder(sub) => {
                writeln!(out, "{indent}{}/", sub.name)?;
                render_children(sub, catalog, ctx, level + 1, out)?;
            }
            TreeEntry::File(file) => writeln!(out, "{indent}{}", file.name)?,
        }
    }
    Ok(())
}
