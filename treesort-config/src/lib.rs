//! Configuration library for treesort.
//!
//! Loads the engine configuration and sort spec files, installs the tracing
//! subscriber, and turns a directory on disk into the tree snapshot the core
//! engine sorts. The `treesort` binary is a thin shell over these pieces.
#![allow(missing_docs)]

pub mod loader;
pub mod logging;
pub mod models;
pub mod render;
pub mod scan;

pub use loader::error::ConfigLoadError;
pub use loader::spec_file::{SpecFile, load_catalog};
pub use logging::init_tracing;
pub use models::engine::{ConfigSource, EngineConfig};
pub use render::render_tree;
pub use scan::scan_tree;
