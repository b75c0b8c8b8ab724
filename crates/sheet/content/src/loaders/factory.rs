//! Content factory for loading sheet data from a data directory.

use std::path::{Path, PathBuf};

use sheet_core::{SheetConfig, TraitCatalog};

use crate::formats::CharacterFile;
use crate::loaders::{CatalogLoader, CharacterLoader, ConfigLoader, LoadResult};

/// Content factory that loads reference data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// └── traits.ron       (or traits.json)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CATALOG_FILES: [&'static str; 2] = ["traits.ron", "traits.json"];

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load sheet configuration from `config.toml`, or defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<SheetConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(SheetConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the trait catalog from `traits.ron`, falling back to `traits.json`.
    pub fn load_catalog(&self) -> LoadResult<TraitCatalog> {
        let path = Self::CATALOG_FILES
            .iter()
            .map(|name| self.data_dir.join(name))
            .find(|path| path.exists())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No trait catalog (traits.ron or traits.json) in {}",
                    self.data_dir.display()
                )
            })?;
        CatalogLoader::load(&path)
    }

    /// Load a character file. Relative paths resolve against the current
    /// directory, not the data directory.
    pub fn load_character(&self, path: &Path) -> LoadResult<CharacterFile> {
        CharacterLoader::load(path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
