use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use treesort_contracts::folder_notes::FixedIndexNote;
use treesort_core::{DEFAULT_METADATA_FIELD, SortSettings};
use treesort_model::HostSortOrder;

const CONFIG_PATH_VAR: &str = "TREESORT_CONFIG_PATH";
const CONFIG_JSON_VAR: &str = "TREESORT_CONFIG_JSON";

/// Source that produced the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Host-side settings for sort passes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Criterion the host explorer has selected. Folders without a spec are
    /// ordered by it, and `host-default` orders resolve to it.
    pub host_order: HostSortOrder,
    /// Frontmatter field read by metadata orders that name none.
    pub default_metadata_field: String,
    /// Basename of the note that describes a folder from inside it, e.g.
    /// `index` for `<folder>/index.md`. Unset means only `<folder>/<name>.md`
    /// is consulted.
    pub index_note_basename: Option<String>,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host_order: HostSortOrder::default(),
            default_metadata_field: DEFAULT_METADATA_FIELD.to_string(),
            index_note_basename: None,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration using environment variables.
    /// Evaluation order:
    /// 1) `$TREESORT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$TREESORT_CONFIG_JSON` (inline JSON),
    /// 3) `treesort.toml`, `treesort.json` or `config/treesort.toml` in the
    ///    working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`EngineConfig::load_from_env`] over an arbitrary variable source,
    /// looking for default files under `base_dir`.
    pub fn load_with(
        var: impl Fn(&str) -> Option<String>,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)> {
        if let Some(path_str) = var(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = var(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read engine config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid engine config {}", path.display())),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid engine config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // TOML first, JSON second
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse engine config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid engine config json: {err}"))
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &["treesort.toml", "treesort.json", "config/treesort.toml"];

        CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }

    /// Settings handed to every sort pass.
    pub fn settings(&self) -> SortSettings {
        SortSettings {
            host_order: self.host_order,
            default_metadata_field: self.default_metadata_field.clone(),
        }
    }

    pub fn folder_note_resolver(&self) -> Option<FixedIndexNote> {
        self.index_note_basename
            .as_ref()
            .filter(|basename| !basename.trim().is_empty())
            .map(|basename| FixedIndexNote(basename.clone()))
    }
}
