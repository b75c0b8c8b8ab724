//! Ancestry trait catalog loader.
//!
//! Catalogs are written either as RON or as JSON (the shape a web page
//! embeds). Both share the [`CatalogFile`] layout.

use std::path::Path;

use sheet_core::TraitCatalog;

use crate::formats::CatalogFile;
use crate::loaders::{LoadResult, read_file};

/// Loader for trait catalogs.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog, choosing the format from the file extension
    /// (`.ron` or `.json`).
    pub fn load(path: &Path) -> LoadResult<TraitCatalog> {
        let content = read_file(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(anyhow::anyhow!(
                "Unsupported trait catalog format: {}",
                path.display()
            )),
        }
    }

    /// Parse a RON catalog.
    ///
    /// ```ron
    /// {
    ///     "Forest-kin": [
    ///         (name: "Nimble", kind: "stat", target: Some("dex"), value: Some(2)),
    ///         (name: "Darkvision", kind: "sense"),
    ///     ],
    /// }
    /// ```
    pub fn from_ron(content: &str) -> LoadResult<TraitCatalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trait catalog RON: {}", e))?;
        Self::convert(file)
    }

    /// Parse a JSON catalog.
    pub fn from_json(content: &str) -> LoadResult<TraitCatalog> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trait catalog JSON: {}", e))?;
        Self::convert(file)
    }

    fn convert(file: CatalogFile) -> LoadResult<TraitCatalog> {
        file.into_catalog()
            .map_err(|e| anyhow::anyhow!("Invalid trait catalog entry: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::Ability;

    #[test]
    fn json_catalog_accepts_type_alias_and_string_values() {
        let catalog = CatalogLoader::from_json(
            r#"{
                "Forest-kin": [
                    { "name": "Nimble", "type": "stat", "target": "dex", "value": "2" },
                    { "name": "Darkvision", "type": "sense", "description": "See in dim light." }
                ]
            }"#,
        )
        .expect("valid catalog");

        assert_eq!(catalog.modifiers_for(Ability::Dex).total(), 2);
        assert_eq!(catalog.ancestry("Forest-kin").map(<[_]>::len), Some(2));
    }

    #[test]
    fn ron_catalog_parses() {
        let catalog = CatalogLoader::from_ron(
            r#"{
                "Stoneborn": [
                    (name: "Sturdy", kind: "stat", target: Some("con"), value: Some(2)),
                    (name: "Stiff", kind: "stat", target: Some("dex"), value: Some(-1)),
                ],
            }"#,
        )
        .expect("valid catalog");

        assert_eq!(catalog.modifiers_for(Ability::Con).total(), 2);
        assert_eq!(catalog.modifiers_for(Ability::Dex).total(), -1);
    }

    #[test]
    fn stat_trait_without_target_is_rejected() {
        let err = CatalogLoader::from_json(
            r#"{ "Forest-kin": [ { "name": "Nimble", "kind": "stat", "value": 2 } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Forest-kin.Nimble.target"));
    }
}
