//! Builds a tree snapshot from a directory on disk.

use crate::loader::error::ConfigLoadError;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::trace;
use treesort_model::{FileEntry, FolderEntry, TreeEntry};

fn epoch_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigLoadError + '_ {
    move |source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Snapshot of `root` with paths relative to it. Dot-entries are skipped.
/// `max_depth` limits how many folder levels below `root` are read; deeper
/// folders appear without children.
pub fn scan_tree(root: &Path, max_depth: Option<usize>) -> Result<FolderEntry, ConfigLoadError> {
    let children = scan_children(root, root, "", max_depth)?;
    Ok(FolderEntry::root(children))
}

fn scan_children(
    root: &Path,
    dir: &Path,
    rel: &str,
    depth_left: Option<usize>,
) -> Result<Vec<TreeEntry>, ConfigLoadError> {
    let mut children = Vec::new();
    for dir_entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let dir_entry = dir_entry.map_err(io_error(dir))?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = dir_entry.path();
        let rel_path = if rel.is_empty() {
            name.clone()
        } else {
            format!("{rel}/{name}")
        };
        let metadata = dir_entry.metadata().map_err(io_error(&path))?;
        let invalid = |err: treesort_model::ModelError| ConfigLoadError::InvalidEntry {
            path: root.to_path_buf(),
            message: err.to_string(),
        };

        let entry: TreeEntry = if metadata.is_dir() {
            let nested = match depth_left {
                Some(0) => Vec::new(),
                other => scan_children(root, &path, &rel_path, other.map(|d| d - 1))?,
            };
            FolderEntry::new(rel_path, nested).map_err(invalid)?.into()
        } else {
            let mtime = metadata.modified().map(epoch_millis).unwrap_or(0);
            let ctime = metadata.created().map(epoch_millis).unwrap_or(mtime);
            FileEntry::new(rel_path, ctime, mtime).map_err(invalid)?.into()
        };
        trace!(path = entry.path(), "scanned entry");
        children.push(entry);
    }
    Ok(children)
}
