//! Lookup of the spec that governs a folder.
//!
//! A spec names its folders in [`SortSpec::target_folders`]:
//!
//! - `notes/daily` applies to that folder only
//! - `notes/*` applies to `notes` and its direct subfolders
//! - `notes/...` applies to `notes` and every folder below it
//!
//! An exact target wins over wildcards. Among wildcards the nearest folder
//! wins, and `*` wins over `...` on the same folder.

use std::collections::HashMap;
use tracing::warn;
use treesort_model::SortSpec;

const ROOT: &str = "/";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TargetScope {
    Exact,
    Direct,
    Recursive,
}

fn parse_target(target: &str) -> (TargetScope, String) {
    let target = target.trim();
    if let Some(path) = target.strip_suffix("...") {
        (TargetScope::Recursive, normalize(path))
    } else if let Some(path) = target.strip_suffix('*') {
        (TargetScope::Direct, normalize(path))
    } else {
        (TargetScope::Exact, normalize(target))
    }
}

/// Folder paths compare without leading or trailing slashes; the root is `/`.
fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        ROOT.to_string()
    } else {
        trimmed.to_string()
    }
}

fn parent(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }
    Some(path.rsplit_once('/').map_or(ROOT, |(parent, _)| parent))
}

#[derive(Debug, Clone, Default)]
pub struct SortSpecCatalog {
    specs: Vec<SortSpec>,
    exact: HashMap<String, usize>,
    direct: HashMap<String, usize>,
    recursive: HashMap<String, usize>,
}

impl SortSpecCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(specs: impl IntoIterator<Item = SortSpec>) -> Self {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.insert(spec);
        }
        catalog
    }

    /// Registers `spec` under each of its targets. A target already claimed
    /// by an earlier spec moves to this one.
    pub fn insert(&mut self, spec: SortSpec) {
        let idx = self.specs.len();
        for target in &spec.target_folders {
            let (scope, path) = parse_target(target);
            let table = match scope {
                TargetScope::Exact => &mut self.exact,
                TargetScope::Direct => &mut self.direct,
                TargetScope::Recursive => &mut self.recursive,
            };
            if let Some(previous) = table.insert(path, idx) {
                warn!(folder = %target, previous, "folder targeted by more than one spec");
            }
        }
        self.specs.push(spec);
    }

    /// The spec governing the folder at `folder_path`, if any.
    pub fn resolve(&self, folder_path: &str) -> Option<&SortSpec> {
        let path = normalize(folder_path);
        let idx = self
            .exact
            .get(&path)
            .or_else(|| self.direct.get(&path))
            .or_else(|| self.recursive.get(&path))
            .or_else(|| {
                let parent = parent(&path)?;
                self.direct
                    .get(parent)
                    .or_else(|| self.nearest_recursive(parent))
            })?;
        self.specs.get(*idx)
    }

    fn nearest_recursive(&self, from: &str) -> Option<&usize> {
        let mut current = Some(from);
        while let Some(path) = current {
            if let Some(idx) = self.recursive.get(path) {
                return Some(idx);
            }
            current = parent(path);
        }
        None
    }

    pub fn specs(&self) -> &[SortSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
