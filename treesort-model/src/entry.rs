//! Tree snapshot handles handed to the engine by the host.
//!
//! Paths are `/`-separated and relative to the tree root, the way a vault
//! or workspace addresses its items. Timestamps are epoch milliseconds.

use crate::error::{ModelError, Result};

/// A file or folder inside the tree snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum TreeEntry {
    File(FileEntry),
    Folder(FolderEntry),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileEntry {
    pub path: String,
    /// Full name including the extension
    pub name: String,
    /// Name without the last extension
    pub basename: String,
    /// Extension without the dot, empty when there is none
    pub extension: String,
    pub ctime: i64,
    pub mtime: i64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FolderEntry {
    pub path: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<TreeEntry>,
}

fn last_segment(path: &str) -> Result<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.is_empty() {
        return Err(ModelError::InvalidEntry(format!(
            "path has no final segment: {path:?}"
        )));
    }
    Ok(name)
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if dot > 0 => (&name[..dot], &name[dot + 1..]),
        _ => (name, ""),
    }
}

impl FileEntry {
    pub fn new(path: impl Into<String>, ctime: i64, mtime: i64) -> Result<Self> {
        let path = path.into();
        let name = last_segment(&path)?.to_string();
        let (basename, extension) = split_extension(&name);
        Ok(Self {
            basename: basename.to_string(),
            extension: extension.to_string(),
            name,
            path,
            ctime,
            mtime,
        })
    }
}

impl FolderEntry {
    /// The tree root, addressed as `/` with an empty name.
    pub fn root(children: Vec<TreeEntry>) -> Self {
        Self {
            path: "/".to_string(),
            name: String::new(),
            children,
        }
    }

    pub fn new(path: impl Into<String>, children: Vec<TreeEntry>) -> Result<Self> {
        let path = path.into();
        if path == "/" {
            return Ok(Self::root(children));
        }
        let name = last_segment(&path)?.to_string();
        Ok(Self {
            path,
            name,
            children,
        })
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Path of a note living directly inside this folder.
    pub fn note_path(&self, basename: &str) -> String {
        if self.is_root() {
            format!("{basename}.md")
        } else {
            format!("{}/{basename}.md", self.path)
        }
    }
}

impl TreeEntry {
    pub fn path(&self) -> &str {
        match self {
            TreeEntry::File(file) => &file.path,
            TreeEntry::Folder(folder) => &folder.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeEntry::File(file) => &file.name,
            TreeEntry::Folder(folder) => &folder.name,
        }
    }

    /// Name without extension; folders have no extension.
    pub fn basename(&self) -> &str {
        match self {
            TreeEntry::File(file) => &file.basename,
            TreeEntry::Folder(folder) => &folder.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeEntry::Folder(_))
    }

    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            TreeEntry::File(file) => Some(file),
            TreeEntry::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderEntry> {
        match self {
            TreeEntry::Folder(folder) => Some(folder),
            TreeEntry::File(_) => None,
        }
    }
}

impl From<FileEntry> for TreeEntry {
    fn from(file: FileEntry) -> Self {
        TreeEntry::File(file)
    }
}

impl From<FolderEntry> for TreeEntry {
    fn from(folder: FolderEntry) -> Self {
        TreeEntry::Folder(folder)
    }
}
