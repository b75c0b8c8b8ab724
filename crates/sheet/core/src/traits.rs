//! Ancestry traits and the trait catalog.
//!
//! The catalog is read-only reference data: ancestry name → ordered list of
//! traits. Only [`TraitEffect::Stat`] traits take part in derivation; every
//! other kind is carried through untouched so the catalog can describe
//! traits the rules do not (yet) compute with.
//!
//! # Lookup
//!
//! ```
//! # use sheet_core::{Ability, AncestryTrait, TraitCatalog};
//! let mut catalog = TraitCatalog::new();
//! catalog.add_trait("Forest-kin", AncestryTrait::stat("Nimble", "dex", 2));
//! catalog.add_trait("Forest-kin", AncestryTrait::other("Darkvision", "sense"));
//! catalog.add_trait("Stoneborn", AncestryTrait::stat("Sturdy", "con", 1));
//!
//! let matches = catalog.modifiers_for(Ability::Dex);
//! assert_eq!(matches.total(), 2);
//! assert_eq!(matches.ancestries().collect::<Vec<_>>(), ["Forest-kin"]);
//! ```

use std::collections::BTreeMap;

use crate::ability::Ability;

/// What a trait does, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraitEffect {
    /// Additive modifier to an ability score.
    ///
    /// `target` is kept as written in the catalog. Targets that do not name
    /// one of the six abilities never match and are otherwise ignored.
    Stat { target: String, value: i32 },

    /// Any other trait kind (senses, speed, languages, ...). Not used by
    /// derivation.
    Other { kind: String },
}

impl TraitEffect {
    /// Signed delta this effect applies to `ability`, if any.
    pub fn stat_delta(&self, ability: Ability) -> Option<i32> {
        match self {
            TraitEffect::Stat { target, value } => {
                (Ability::from_name(target) == Some(ability)).then_some(*value)
            }
            TraitEffect::Other { .. } => None,
        }
    }

    /// Kind tag as it appears in catalog files.
    pub fn kind(&self) -> &str {
        match self {
            TraitEffect::Stat { .. } => "stat",
            TraitEffect::Other { kind } => kind,
        }
    }
}

/// A single named trait granted by an ancestry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AncestryTrait {
    pub name: String,
    pub description: Option<String>,
    pub effect: TraitEffect,
}

impl AncestryTrait {
    /// Creates a stat-modifying trait.
    pub fn stat(name: impl Into<String>, target: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            effect: TraitEffect::Stat {
                target: target.into(),
                value,
            },
        }
    }

    /// Creates a trait of some other kind.
    pub fn other(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            effect: TraitEffect::Other { kind: kind.into() },
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Immutable reference catalog of traits, grouped by ancestry.
///
/// Ancestries are kept in name order; traits within an ancestry keep their
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitCatalog {
    ancestries: BTreeMap<String, Vec<AncestryTrait>>,
}

impl TraitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trait to an ancestry, creating the ancestry if needed.
    pub fn add_trait(&mut self, ancestry: impl Into<String>, entry: AncestryTrait) {
        self.ancestries.entry(ancestry.into()).or_default().push(entry);
    }

    /// Appends all given traits to an ancestry.
    pub fn add_ancestry(
        &mut self,
        ancestry: impl Into<String>,
        entries: impl IntoIterator<Item = AncestryTrait>,
    ) {
        self.ancestries
            .entry(ancestry.into())
            .or_default()
            .extend(entries);
    }

    /// Traits of a single ancestry.
    pub fn ancestry(&self, name: &str) -> Option<&[AncestryTrait]> {
        self.ancestries.get(name).map(Vec::as_slice)
    }

    /// Iterates `(ancestry, traits)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AncestryTrait])> {
        self.ancestries
            .iter()
            .map(|(name, traits)| (name.as_str(), traits.as_slice()))
    }

    /// Number of ancestries in the catalog.
    pub fn len(&self) -> usize {
        self.ancestries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ancestries.is_empty()
    }

    /// Returns a catalog restricted to a single ancestry.
    ///
    /// Used when the reference data covers every ancestry but a character
    /// only benefits from its own. Unknown names yield an empty catalog.
    pub fn only(&self, ancestry: &str) -> TraitCatalog {
        let mut filtered = TraitCatalog::new();
        if let Some(traits) = self.ancestries.get(ancestry) {
            filtered.add_ancestry(ancestry, traits.iter().cloned());
        }
        filtered
    }

    /// All stat traits targeting `ability`, grouped by ancestry.
    ///
    /// Ancestries without a matching trait are left out of the result.
    pub fn modifiers_for(&self, ability: Ability) -> TraitMatches<'_> {
        let mut groups = BTreeMap::new();
        for (ancestry, traits) in &self.ancestries {
            let matching: Vec<_> = traits
                .iter()
                .filter(|t| t.effect.stat_delta(ability).is_some())
                .collect();
            if !matching.is_empty() {
                groups.insert(ancestry.as_str(), matching);
            }
        }
        TraitMatches { ability, groups }
    }

    /// Like [`modifiers_for`](Self::modifiers_for), keyed by a raw ability name.
    ///
    /// Names outside the six abilities produce `None`, which callers treat as
    /// an empty, no-op result.
    pub fn modifiers_for_name(&self, name: &str) -> Option<TraitMatches<'_>> {
        Ability::from_name(name).map(|ability| self.modifiers_for(ability))
    }
}

/// Result of a trait lookup for one ability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitMatches<'a> {
    ability: Ability,
    groups: BTreeMap<&'a str, Vec<&'a AncestryTrait>>,
}

impl<'a> TraitMatches<'a> {
    pub fn ability(&self) -> Ability {
        self.ability
    }

    /// Ancestries that contributed at least one matching trait.
    pub fn ancestries(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    /// Matching traits of one ancestry.
    pub fn get(&self, ancestry: &str) -> Option<&[&'a AncestryTrait]> {
        self.groups.get(ancestry).map(Vec::as_slice)
    }

    /// Iterates `(ancestry, trait, delta)` over every match.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a AncestryTrait, i32)> + '_ {
        let ability = self.ability;
        self.groups.iter().flat_map(move |(ancestry, traits)| {
            traits.iter().filter_map(move |t| {
                t.effect
                    .stat_delta(ability)
                    .map(|delta| (*ancestry, *t, delta))
            })
        })
    }

    /// Sum of all matching deltas.
    pub fn total(&self) -> i32 {
        self.iter().map(|(_, _, delta)| delta).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> TraitCatalog {
        let mut catalog = TraitCatalog::new();
        catalog.add_ancestry(
            "Forest-kin",
            [
                AncestryTrait::stat("Nimble", "dex", 2),
                AncestryTrait::other("Darkvision", "sense"),
                AncestryTrait::stat("Keen Mind", "wis", 1),
            ],
        );
        catalog.add_ancestry(
            "Stoneborn",
            [
                AncestryTrait::stat("Sturdy", "con", 2),
                AncestryTrait::stat("Stiff", "dex", -1),
            ],
        );
        catalog.add_trait("Mistwalker", AncestryTrait::stat("Lucky", "luck", 3));
        catalog
    }

    #[test]
    fn lookup_groups_matches_by_ancestry() {
        let catalog = sample_catalog();
        let matches = catalog.modifiers_for(Ability::Dex);

        assert_eq!(
            matches.ancestries().collect::<Vec<_>>(),
            ["Forest-kin", "Stoneborn"]
        );
        assert_eq!(matches.get("Forest-kin").map(|t| t.len()), Some(1));
        assert_eq!(matches.get("Forest-kin").unwrap()[0].name, "Nimble");
        assert_eq!(matches.total(), 1);
    }

    #[test]
    fn ancestries_without_matches_are_omitted() {
        let catalog = sample_catalog();
        let matches = catalog.modifiers_for(Ability::Con);
        assert_eq!(matches.ancestries().collect::<Vec<_>>(), ["Stoneborn"]);

        let none = catalog.modifiers_for(Ability::Cha);
        assert!(none.is_empty());
        assert_eq!(none.total(), 0);
    }

    #[test]
    fn unknown_ability_names_produce_no_result() {
        let catalog = sample_catalog();
        assert!(catalog.modifiers_for_name("luck").is_none());
        assert_eq!(
            catalog.modifiers_for_name("wis").map(|m| m.total()),
            Some(1)
        );
    }

    #[test]
    fn non_stat_traits_never_match() {
        let effect = TraitEffect::Other {
            kind: "sense".into(),
        };
        for ability in Ability::ALL {
            assert_eq!(effect.stat_delta(ability), None);
        }
        assert_eq!(effect.kind(), "sense");
    }

    #[test]
    fn lookup_is_pure_and_repeatable() {
        let catalog = sample_catalog();
        let before = catalog.clone();

        let first = catalog.modifiers_for(Ability::Dex);
        let second = catalog.modifiers_for(Ability::Dex);

        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn only_restricts_to_one_ancestry() {
        let catalog = sample_catalog();
        let stoneborn = catalog.only("Stoneborn");
        assert_eq!(stoneborn.len(), 1);
        assert_eq!(stoneborn.modifiers_for(Ability::Dex).total(), -1);
        assert!(catalog.only("Nobody").is_empty());
    }
}
