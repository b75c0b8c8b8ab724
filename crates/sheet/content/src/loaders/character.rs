//! Character file loader.

use std::path::Path;

use crate::formats::CharacterFile;
use crate::loaders::{LoadResult, read_file};

/// Loader for character files from TOML.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load a character file. See [`CharacterFile`] for the layout.
    pub fn load(path: &Path) -> LoadResult<CharacterFile> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse character data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CharacterFile> {
        let character: CharacterFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character TOML: {}", e))?;

        Ok(character)
    }
}
