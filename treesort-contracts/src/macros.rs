use treesort_model::SortGroup;

/// Rewrites folder-specific placeholders inside a group before a pass.
///
/// The engine calls this once per group at the start of every pass and keeps
/// the result only for that pass.
pub trait MacroExpander: Send + Sync {
    /// A rewritten copy of `group` for the folder at `folder_path`, or `None`
    /// when the group has nothing to expand.
    fn expand(&self, group: &SortGroup, folder_path: &str) -> Option<SortGroup>;
}
