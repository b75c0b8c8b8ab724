//! Raw file formats for content data.
//!
//! These records mirror what is written in data files and are loose
//! (optional fields, numbers-as-strings). Conversion into `sheet-core` types
//! is where validation happens.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sheet_core::{
    Ability, AbilityScores, AncestryTrait, CharacterModifier, CharacterSheet, LEVEL_FIELD,
    SheetConfig, SheetError, StatBounds, TraitCatalog, parse_field,
};

/// Trait catalog file: ancestry name → list of traits.
///
/// JSON example:
/// ```json
/// {
///   "Forest-kin": [
///     { "name": "Nimble", "kind": "stat", "target": "dex", "value": 2 },
///     { "name": "Darkvision", "kind": "sense", "description": "See in dim light." }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogFile {
    pub ancestries: BTreeMap<String, Vec<TraitRecord>>,
}

impl CatalogFile {
    /// Converts every record into a typed catalog entry.
    pub fn into_catalog(self) -> Result<TraitCatalog, SheetError> {
        let mut catalog = TraitCatalog::new();
        for (ancestry, records) in self.ancestries {
            let traits = records
                .into_iter()
                .map(|record| record.into_trait(&ancestry))
                .collect::<Result<Vec<_>, _>>()?;
            catalog.add_ancestry(ancestry, traits);
        }
        Ok(catalog)
    }
}

/// One trait as written in a catalog file.
///
/// `kind` is also accepted under the key `type`. Stat traits need both a
/// `target` and a `value` within [`StatBounds::DELTA`]; other kinds ignore
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitRecord {
    pub name: String,
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub value: Option<RawNumber>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TraitRecord {
    pub const STAT_KIND: &'static str = "stat";

    /// Converts into a typed trait; `ancestry` is only used for error paths.
    pub fn into_trait(self, ancestry: &str) -> Result<AncestryTrait, SheetError> {
        let path = |key: &str| format!("{ancestry}.{}.{key}", self.name);

        let entry = if self.kind == Self::STAT_KIND {
            let target = self
                .target
                .clone()
                .ok_or_else(|| SheetError::missing(path("target")))?;
            let field = path("value");
            let value = match &self.value {
                Some(raw) => StatBounds::DELTA.check(&field, raw.to_i32(&field)?)?,
                None => return Err(SheetError::missing(field)),
            };
            AncestryTrait::stat(self.name, target, value)
        } else {
            AncestryTrait::other(self.name, self.kind)
        };

        Ok(match self.description {
            Some(description) => entry.with_description(description),
            None => entry,
        })
    }
}

/// A number that may have been written as a string (`2` or `"+2"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i32),
    Text(String),
}

impl RawNumber {
    pub fn to_i32(&self, field: &str) -> Result<i32, SheetError> {
        match self {
            RawNumber::Int(value) => Ok(*value),
            RawNumber::Text(text) => parse_field(field, Some(text)),
        }
    }
}

/// A character file (TOML).
///
/// ```toml
/// name = "Ilsa"
/// ancestry = "Forest-kin"
/// level = 5            # or a [classes] table whose levels are summed
///
/// [scores]
/// str = 14
/// dex = 12
/// con = 13
/// int = 10
/// wis = 16
/// cha = 8
///
/// [[modifiers]]
/// name = "Gloves of Thievery"
/// target = "dex"
/// value = 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterFile {
    #[serde(default = "CharacterFile::default_name")]
    pub name: String,
    #[serde(default)]
    pub ancestry: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub classes: BTreeMap<String, i32>,
    pub scores: AbilityScores,
    #[serde(default)]
    pub modifiers: Vec<CharacterModifier>,
}

impl CharacterFile {
    fn default_name() -> String {
        "New Character".to_string()
    }

    /// Character level: the explicit `level`, otherwise the sum of class levels.
    ///
    /// Each class level must lie within [`StatBounds::LEVEL`].
    pub fn total_level(&self) -> Result<i32, SheetError> {
        if let Some(level) = self.level {
            return Ok(level);
        }
        if self.classes.is_empty() {
            return Err(SheetError::missing(LEVEL_FIELD));
        }
        self.classes.iter().try_fold(0i32, |total, (class, level)| {
            let level = StatBounds::LEVEL.check(&format!("classes.{class}"), *level)?;
            Ok(total.saturating_add(level))
        })
    }

    /// Validates scores, level and modifier deltas against `config` and
    /// builds the sheet.
    pub fn to_sheet(&self, config: &SheetConfig) -> Result<CharacterSheet, SheetError> {
        for ability in Ability::ALL {
            config
                .score_bounds
                .check(ability.score_field(), self.scores.get(ability))?;
        }
        for modifier in &self.modifiers {
            let field = format!("modifiers.{}.value", modifier.name);
            StatBounds::DELTA.check(&field, modifier.value)?;
        }
        let level = config.level_bounds.check(LEVEL_FIELD, self.total_level()?)?;

        let mut sheet = CharacterSheet::new(self.scores, level);
        sheet.modifiers = self.modifiers.clone();
        Ok(sheet)
    }

    /// The part of `catalog` that applies to this character.
    ///
    /// With an `ancestry` set only that ancestry's traits apply; without one
    /// the whole catalog is treated as this character's traits.
    pub fn applicable_traits(&self, catalog: &TraitCatalog) -> TraitCatalog {
        match &self.ancestry {
            Some(ancestry) => catalog.only(ancestry),
            None => catalog.clone(),
        }
    }
}
