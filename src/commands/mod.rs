pub mod browse;
pub mod categories;
pub mod completions;
pub mod config;
pub mod stats;
pub mod submit;

use eyre::{Context, Result};

use crate::config::Config;
use crate::directory::DirectoryView;
use crate::directory::catalog::Catalog;

/// Build the session's directory from the configured catalog, or the samples
pub fn load_directory(config: &Config) -> Result<DirectoryView> {
    let catalog = match config.catalog_path() {
        Some(path) => Catalog::load(&path).with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::sample(),
    };
    Ok(DirectoryView::new(catalog.into_records()))
}
