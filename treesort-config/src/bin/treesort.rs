use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use treesort_config::{
    ConfigSource, EngineConfig, init_tracing, load_catalog, render_tree, scan_tree,
};
use treesort_contracts::prelude::Frontmatter;
use treesort_core::{Lookups, SortContext, SortSpecCatalog};
use treesort_model::HostSortOrder;

#[derive(Parser)]
#[command(name = "treesort", about = "Print a directory tree ordered by sort specs")]
struct Cli {
    /// Engine configuration file (TOML or JSON); overrides the environment
    #[arg(long)]
    config: Option<PathBuf>,
    /// Sort spec file (TOML or JSON)
    #[arg(long)]
    spec: Option<PathBuf>,
    /// Host sort order, e.g. `alphabetical` or `byModifiedTime`
    #[arg(long)]
    host_order: Option<HostSortOrder>,
    /// How many folder levels below DIR to read
    #[arg(long)]
    depth: Option<usize>,
    /// JSON object mapping note paths to their frontmatter
    #[arg(long)]
    frontmatter: Option<PathBuf>,
    /// JSON object mapping paths to 1-based bookmark ranks
    #[arg(long)]
    bookmarks: Option<PathBuf>,
    dir: PathBuf,
}

fn read_json_map<T: serde::de::DeserializeOwned>(
    path: Option<&PathBuf>,
) -> Result<HashMap<String, T>> {
    let Some(path) = path else {
        return Ok(HashMap::new());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = match &cli.config {
        Some(path) => (EngineConfig::load_from_file(path)?, ConfigSource::File(path.clone())),
        None => EngineConfig::load_from_env()?,
    };
    if let Some(host_order) = cli.host_order {
        config.host_order = host_order;
    }

    init_tracing(&config.log_filter)?;
    tracing::info!(?source, host_order = %config.host_order, "loaded engine configuration");

    let catalog = match &cli.spec {
        Some(path) => load_catalog(path)?,
        None => SortSpecCatalog::new(),
    };
    let tree = scan_tree(&cli.dir, cli.depth)
        .with_context(|| format!("failed to scan {}", cli.dir.display()))?;

    let frontmatter: HashMap<String, Frontmatter> = read_json_map(cli.frontmatter.as_ref())?;
    let bookmarks: HashMap<String, u32> = read_json_map(cli.bookmarks.as_ref())?;
    let index_note = config.folder_note_resolver();

    let mut lookups = Lookups::new()
        .with_metadata(&frontmatter)
        .with_bookmarks(&bookmarks);
    if let Some(resolver) = &index_note {
        lookups = lookups.with_folder_notes(resolver);
    }
    let ctx = SortContext::new(lookups, config.settings());

    let rendered = render_tree(&tree, &catalog, &ctx).context("failed to render the sorted tree")?;
    print!("{rendered}");
    Ok(())
}
