/// Tells the engine which note inside a folder acts as its index note.
pub trait FolderNoteResolver: Send + Sync {
    /// Basename (no `.md`) of the index note for the folder at `folder_path`.
    fn index_note_basename(&self, folder_path: &str) -> Option<String>;
}

/// Same index-note basename for every folder, e.g. `index` or `_about_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIndexNote(pub String);

impl FolderNoteResolver for FixedIndexNote {
    fn index_note_basename(&self, _folder_path: &str) -> Option<String> {
        Some(self.0.clone())
    }
}
