//! Sort spec files: a `specs` list in TOML or JSON, one entry per spec.

use super::error::ConfigLoadError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use treesort_core::{SortSpecCatalog, validate_spec};
use treesort_model::SortSpec;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpecFile {
    pub specs: Vec<SortSpec>,
}

impl SpecFile {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parses by extension; anything other than `.json` / `.toml` is tried as
    /// TOML and then as JSON.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigLoadError> {
        let parse_error = |message: String| ConfigLoadError::Parse {
            path: origin.to_path_buf(),
            message,
        };
        match origin.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(contents).map_err(|err| parse_error(err.to_string())),
            Some("toml") => toml::from_str(contents).map_err(|err| parse_error(err.to_string())),
            _ => toml::from_str(contents).or_else(|toml_err| {
                serde_json::from_str(contents).map_err(|json_err| {
                    parse_error(format!("toml error: {toml_err}; json error: {json_err}"))
                })
            }),
        }
    }

    /// Derives priority orders, validates every spec and indexes them by
    /// target folder.
    pub fn into_catalog(self, origin: &Path) -> Result<SortSpecCatalog, ConfigLoadError> {
        let mut catalog = SortSpecCatalog::new();
        for (index, mut spec) in self.specs.into_iter().enumerate() {
            spec.derive_priority_order();
            validate_spec(&spec).map_err(|source| ConfigLoadError::InvalidSpec {
                path: origin.to_path_buf(),
                index,
                source,
            })?;
            debug!(index, targets = ?spec.target_folders, groups = spec.groups.len(), "loaded sort spec");
            catalog.insert(spec);
        }
        Ok(catalog)
    }
}

/// Reads, validates and indexes the spec file at `path`.
pub fn load_catalog(path: &Path) -> Result<SortSpecCatalog, ConfigLoadError> {
    let catalog = SpecFile::load(path)?.into_catalog(path)?;
    info!(path = %path.display(), specs = catalog.len(), "loaded sort specs");
    Ok(catalog)
}
