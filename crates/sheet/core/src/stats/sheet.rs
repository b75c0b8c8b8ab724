//! Full derivation of a character sheet.
//!
//! [`derive`] runs the layers in dependency order:
//!
//! 1. apply trait and character deltas to all six scores
//! 2. compute all six modifiers from the adjusted scores
//! 3. compute the proficiency bonus from the level
//! 4. compute the spell save DC from (2) and (3), when enabled

use super::bonus::StatLayer;
use super::modifiers::AbilityModifiers;
use super::proficiency::proficiency_bonus;
use super::scores::{EffectiveScores, ScoreBonuses};
use super::spellcasting::spell_save_dc;
use crate::ability::Ability;
use crate::character::CharacterSheet;
use crate::config::SheetConfig;
use crate::traits::TraitCatalog;

/// Every value derived for one character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedSheet {
    /// Deltas that were applied, per ability, with their sources.
    pub bonuses: ScoreBonuses,
    /// Adjusted scores (base + deltas).
    pub scores: EffectiveScores,
    pub modifiers: AbilityModifiers,
    pub proficiency_bonus: i32,
    /// `None` when spell save DC display is disabled.
    pub spell_save_dc: Option<i32>,
}

impl DerivedSheet {
    /// Computes all derived values. See [`derive`].
    pub fn compute(sheet: &CharacterSheet, catalog: &TraitCatalog, config: &SheetConfig) -> Self {
        let bonuses = ScoreBonuses::collect(catalog, &sheet.modifiers);
        let scores = EffectiveScores::compute(&sheet.scores, &bonuses);
        let modifiers = AbilityModifiers::from_base(&scores);
        let proficiency = proficiency_bonus(sheet.level);
        let dc = config
            .spell_save_dc
            .then(|| spell_save_dc(proficiency, modifiers.get(config.spellcasting_ability)));

        Self {
            bonuses,
            scores,
            modifiers,
            proficiency_bonus: proficiency,
            spell_save_dc: dc,
        }
    }

    /// Output fields in display order: `<stat>`, `<stat>_bonus` for each
    /// ability, then `proficiency_bonus` and, if enabled, `spell_save_dc`.
    pub fn output_fields(&self) -> Vec<(&'static str, i32)> {
        let mut fields = Vec::with_capacity(Ability::ALL.len() * 2 + 2);
        for ability in Ability::ALL {
            fields.push((ability.score_field(), self.scores.get(ability)));
            fields.push((ability.bonus_field(), self.modifiers.get(ability)));
        }
        fields.push((PROFICIENCY_FIELD, self.proficiency_bonus));
        if let Some(dc) = self.spell_save_dc {
            fields.push((SPELL_SAVE_DC_FIELD, dc));
        }
        fields
    }
}

/// Form field holding the character level.
pub const LEVEL_FIELD: &str = "level";
/// Form field displaying the proficiency bonus.
pub const PROFICIENCY_FIELD: &str = "proficiency_bonus";
/// Form field displaying the spell save DC.
pub const SPELL_SAVE_DC_FIELD: &str = "spell_save_dc";

/// Derives every displayed value for a character (pure function).
///
/// Base scores in `sheet` are never modified, so calling this any number of
/// times with the same inputs yields the same result.
pub fn derive(sheet: &CharacterSheet, catalog: &TraitCatalog, config: &SheetConfig) -> DerivedSheet {
    DerivedSheet::compute(sheet, catalog, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterModifier;
    use crate::stats::scores::AbilityScores;
    use crate::traits::AncestryTrait;

    fn forest_kin() -> TraitCatalog {
        let mut catalog = TraitCatalog::new();
        catalog.add_trait("Forest-kin", AncestryTrait::stat("Nimble", "dex", 2));
        catalog
    }

    fn sample_sheet() -> CharacterSheet {
        CharacterSheet::new(AbilityScores::new(14, 12, 13, 10, 16, 8), 5)
    }

    #[test]
    fn forest_kin_end_to_end() {
        let derived = derive(&sample_sheet(), &forest_kin(), &SheetConfig::default());

        assert_eq!(derived.scores.dex, 14);
        assert_eq!(derived.modifiers.dex, 2);
        assert_eq!(derived.modifiers.str, 2);
        assert_eq!(derived.modifiers.wis, 3);
        assert_eq!(derived.proficiency_bonus, 3);
        assert_eq!(derived.spell_save_dc, Some(14));
    }

    #[test]
    fn disabled_spell_save_dc_is_absent() {
        let config = SheetConfig::default().with_spell_save_dc(false);
        let derived = derive(&sample_sheet(), &forest_kin(), &config);

        assert_eq!(derived.spell_save_dc, None);
        assert!(
            derived
                .output_fields()
                .iter()
                .all(|(name, _)| *name != SPELL_SAVE_DC_FIELD)
        );
    }

    #[test]
    fn spellcasting_ability_is_configurable() {
        let config = SheetConfig::default().with_spellcasting_ability(Ability::Cha);
        let derived = derive(&sample_sheet(), &forest_kin(), &config);
        // 8 + 3 + (-1)
        assert_eq!(derived.spell_save_dc, Some(10));
    }

    #[test]
    fn character_modifiers_stack_with_traits() {
        let sheet = sample_sheet().with_modifier(CharacterModifier::new("Belt", Ability::Dex, 1));
        let derived = derive(&sheet, &forest_kin(), &SheetConfig::default());
        assert_eq!(derived.scores.dex, 15);
        assert_eq!(derived.modifiers.dex, 2);
    }

    #[test]
    fn repeated_derivation_never_double_applies() {
        let sheet = sample_sheet();
        let catalog = forest_kin();
        let config = SheetConfig::default();

        let first = derive(&sheet, &catalog, &config);
        let second = derive(&sheet, &catalog, &config);

        assert_eq!(first, second);
        assert_eq!(sheet.scores.dex, 12);
    }

    #[test]
    fn unbounded_catalog_values_saturate_instead_of_overflowing() {
        let mut catalog = TraitCatalog::new();
        catalog.add_trait("Giant", AncestryTrait::stat("Huge", "str", i32::MAX));
        catalog.add_trait("Giant", AncestryTrait::stat("Hollow", "wis", i32::MIN));

        let derived = derive(&sample_sheet(), &catalog, &SheetConfig::default());
        assert_eq!(derived.scores.str, i32::MAX);
        assert_eq!(derived.scores.wis, i32::MIN + 16);
        assert!(derived.spell_save_dc.is_some());
    }

    #[test]
    fn output_fields_cover_the_whole_sheet() {
        let derived = derive(&sample_sheet(), &forest_kin(), &SheetConfig::default());
        let fields = derived.output_fields();

        assert_eq!(fields.len(), 14);
        assert_eq!(fields[2], ("dex", 14));
        assert_eq!(fields[3], ("dex_bonus", 2));
        assert_eq!(fields[12], (PROFICIENCY_FIELD, 3));
        assert_eq!(fields[13], (SPELL_SAVE_DC_FIELD, 14));
    }
}
