//! Ability Scores - Layer 1 of the stat system.
//!
//! Base scores (STR, DEX, CON, INT, WIS, CHA) are the Single Source of Truth
//! and the only scores that are stored. Adjusted scores are derived from them
//! by adding every trait and character delta that targets the ability.
//!
//! EffectiveScore = Base + Σ deltas

use super::bonus::{Bonus, BonusStack, StatLayer};
use crate::ability::Ability;
use crate::character::CharacterModifier;
use crate::traits::TraitCatalog;

/// The six base ability scores as entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl AbilityScores {
    /// Create scores in sheet order (STR, DEX, CON, INT, WIS, CHA)
    pub fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            str,
            dex,
            con,
            int,
            wis,
            cha,
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.str,
            Ability::Dex => self.dex,
            Ability::Con => self.con,
            Ability::Int => self.int,
            Ability::Wis => self.wis,
            Ability::Cha => self.cha,
        }
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        let slot = match ability {
            Ability::Str => &mut self.str,
            Ability::Dex => &mut self.dex,
            Ability::Con => &mut self.con,
            Ability::Int => &mut self.int,
            Ability::Wis => &mut self.wis,
            Ability::Cha => &mut self.cha,
        };
        *slot = score;
    }
}

impl Default for AbilityScores {
    /// Default scores: all 10
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

/// Deltas that apply to each ability score.
///
/// NOT stored - collected from the trait catalog and the character's own
/// modifiers every time scores are derived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreBonuses {
    pub str_bonuses: BonusStack,
    pub dex_bonuses: BonusStack,
    pub con_bonuses: BonusStack,
    pub int_bonuses: BonusStack,
    pub wis_bonuses: BonusStack,
    pub cha_bonuses: BonusStack,
}

impl ScoreBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every stat delta from the catalog and per-character modifiers.
    ///
    /// Ancestry bonuses are labelled `"<ancestry>: <trait>"`; per-character
    /// modifiers use their own name.
    pub fn collect(catalog: &TraitCatalog, modifiers: &[CharacterModifier]) -> Self {
        let mut bonuses = Self::new();
        for ability in Ability::ALL {
            for (ancestry, entry, delta) in catalog.modifiers_for(ability).iter() {
                bonuses.add(ability, Bonus::new(format!("{ancestry}: {}", entry.name), delta));
            }
        }
        for modifier in modifiers {
            bonuses.add(modifier.target, Bonus::new(modifier.name.clone(), modifier.value));
        }
        bonuses
    }

    pub fn add(&mut self, ability: Ability, bonus: Bonus) {
        self.stack_mut(ability).add(bonus);
    }

    pub fn stack(&self, ability: Ability) -> &BonusStack {
        match ability {
            Ability::Str => &self.str_bonuses,
            Ability::Dex => &self.dex_bonuses,
            Ability::Con => &self.con_bonuses,
            Ability::Int => &self.int_bonuses,
            Ability::Wis => &self.wis_bonuses,
            Ability::Cha => &self.cha_bonuses,
        }
    }

    fn stack_mut(&mut self, ability: Ability) -> &mut BonusStack {
        match ability {
            Ability::Str => &mut self.str_bonuses,
            Ability::Dex => &mut self.dex_bonuses,
            Ability::Con => &mut self.con_bonuses,
            Ability::Int => &mut self.int_bonuses,
            Ability::Wis => &mut self.wis_bonuses,
            Ability::Cha => &mut self.cha_bonuses,
        }
    }
}

/// Adjusted scores - base scores with every delta applied.
///
/// It is NEVER stored - always recomputed from the base scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveScores {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl EffectiveScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.str,
            Ability::Dex => self.dex,
            Ability::Con => self.con,
            Ability::Int => self.int,
            Ability::Wis => self.wis,
            Ability::Cha => self.cha,
        }
    }
}

/// Layer 1: Scores Layer
///
/// Base: AbilityScores (user input)
/// Bonuses: ScoreBonuses (ancestry traits, character modifiers)
/// Final: EffectiveScores (adjusted scores)
impl StatLayer for EffectiveScores {
    type Base = AbilityScores;
    type Bonuses = ScoreBonuses;
    type Final = Self;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final {
        Self {
            str: bonuses.str_bonuses.apply(base.str),
            dex: bonuses.dex_bonuses.apply(base.dex),
            con: bonuses.con_bonuses.apply(base.con),
            int: bonuses.int_bonuses.apply(base.int),
            wis: bonuses.wis_bonuses.apply(base.wis),
            cha: bonuses.cha_bonuses.apply(base.cha),
        }
    }

    fn empty_bonuses() -> Self::Bonuses {
        ScoreBonuses::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::AncestryTrait;

    #[test]
    fn collect_merges_ancestry_and_character_modifiers() {
        let mut catalog = TraitCatalog::new();
        catalog.add_trait("Forest-kin", AncestryTrait::stat("Nimble", "dex", 2));
        catalog.add_trait("Forest-kin", AncestryTrait::stat("Odd", "luck", 5));
        let modifiers = [CharacterModifier::new("Gloves of Thievery", Ability::Dex, 1)];

        let bonuses = ScoreBonuses::collect(&catalog, &modifiers);

        let dex = bonuses.stack(Ability::Dex);
        assert_eq!(dex.total(), 3);
        let sources: Vec<_> = dex.iter().map(|b| b.source.as_str()).collect();
        assert_eq!(sources, ["Forest-kin: Nimble", "Gloves of Thievery"]);
        for ability in [Ability::Str, Ability::Con, Ability::Int, Ability::Wis, Ability::Cha] {
            assert!(bonuses.stack(ability).is_empty());
        }
    }

    #[test]
    fn effective_scores_add_deltas_to_base() {
        let base = AbilityScores::new(8, 12, 13, 10, 16, 8);
        let mut bonuses = ScoreBonuses::new();
        bonuses.add(Ability::Str, Bonus::new("a", 2));
        bonuses.add(Ability::Str, Bonus::new("b", -1));
        bonuses.add(Ability::Str, Bonus::new("c", 1));

        let scores = EffectiveScores::compute(&base, &bonuses);
        assert_eq!(scores.str, 10);
        assert_eq!(scores.dex, 12);
        assert_eq!(scores.get(Ability::Wis), 16);
    }

    #[test]
    fn deriving_twice_from_the_same_base_is_stable() {
        let base = AbilityScores::new(14, 12, 13, 10, 16, 8);
        let mut bonuses = ScoreBonuses::new();
        bonuses.add(Ability::Dex, Bonus::new("Forest-kin: Nimble", 2));

        let first = EffectiveScores::compute(&base, &bonuses);
        let second = EffectiveScores::compute(&base, &bonuses);
        assert_eq!(first, second);
        assert_eq!(second.dex, 14);
    }

    #[test]
    fn set_and_get_round_through_every_ability() {
        let mut scores = AbilityScores::default();
        for (i, ability) in Ability::ALL.into_iter().enumerate() {
            scores.set(ability, 3 + i as i32);
        }
        assert_eq!(scores, AbilityScores::new(3, 4, 5, 6, 7, 8));
    }
}
