//! Content loaders for reading sheet data from files.
//!
//! This module provides loaders that convert RON/JSON/TOML files into
//! `sheet-core` types. All loaders use the formats defined in [`crate::formats`].

pub mod catalog;
pub mod character;
pub mod config;
pub mod factory;

pub use catalog::CatalogLoader;
pub use character::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
