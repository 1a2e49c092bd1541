use std::path::PathBuf;
use thiserror::Error;
use treesort_core::SpecError;

/// Failures while reading engine configs, spec files or a directory tree.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The file or directory could not be read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The contents are not valid TOML or JSON for the expected shape.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    /// A spec parsed but failed validation.
    #[error("spec #{index} in {path} is invalid")]
    InvalidSpec {
        path: PathBuf,
        index: usize,
        #[source]
        source: SpecError,
    },
    /// A scanned path could not become a tree entry.
    #[error("invalid entry path under {path}: {message}")]
    InvalidEntry { path: PathBuf, message: String },
}
