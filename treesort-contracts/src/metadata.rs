use std::collections::HashMap;

/// Parsed frontmatter of one note: field name to raw value.
pub type Frontmatter = serde_json::Map<String, serde_json::Value>;

/// Read access to the host's frontmatter cache.
pub trait MetadataLookup: Send + Sync {
    /// Frontmatter of the note at `note_path`, if the note exists and has any.
    fn frontmatter(&self, note_path: &str) -> Option<&Frontmatter>;

    /// Whether the note declares `field`, whatever its value.
    fn has_field(&self, note_path: &str, field: &str) -> bool {
        self.frontmatter(note_path)
            .is_some_and(|fm| fm.contains_key(field))
    }
}

impl MetadataLookup for HashMap<String, Frontmatter> {
    fn frontmatter(&self, note_path: &str) -> Option<&Frontmatter> {
        self.get(note_path)
    }
}
