//! Modifiers - Layer 2 of the stat system.
//!
//! Roll modifiers for ability checks, derived from adjusted scores.
//!
//! Formula: modifier = floor((score - 10) / 2)

use super::bonus::StatLayer;
use super::scores::EffectiveScores;
use crate::ability::Ability;

/// Calculate a modifier from an ability score.
///
/// Uses floor division, so odd scores below 10 round down: 7 → -2, not -1.
///
/// ```
/// # use sheet_core::ability_modifier;
/// assert_eq!(ability_modifier(10), 0);
/// assert_eq!(ability_modifier(11), 0);
/// assert_eq!(ability_modifier(7), -2);
/// assert_eq!(ability_modifier(20), 5);
/// assert_eq!(ability_modifier(1), -5);
/// ```
pub const fn ability_modifier(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

/// Ability modifiers, one per ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityModifiers {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl AbilityModifiers {
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

/// Layer 2: Modifiers Layer
///
/// Base: EffectiveScores (output from Layer 1)
/// Bonuses: none, modifiers follow from the score alone
/// Final: AbilityModifiers
impl StatLayer for AbilityModifiers {
    type Base = EffectiveScores;
    type Bonuses = ();
    type Final = Self;

    fn compute(base: &Self::Base, _bonuses: &Self::Bonuses) -> Self::Final {
        Self {
            str: ability_modifier(base.str),
            dex: ability_modifier(base.dex),
            con: ability_modifier(base.con),
            int: ability_modifier(base.int),
            wis: ability_modifier(base.wis),
            cha: ability_modifier(base.cha),
        }
    }

    fn empty_bonuses() -> Self::Bonuses {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_floor_formula_across_score_range() {
        for score in 1..=30 {
            let expected = ((score as f64 - 10.0) / 2.0).floor() as i32;
            assert_eq!(ability_modifier(score), expected, "score {score}");
        }
    }

    #[test]
    fn negative_results_round_toward_negative_infinity() {
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(0), -5);
        assert_eq!(ability_modifier(-1), -6);
        assert_eq!(ability_modifier(i32::MIN), i32::MIN.div_euclid(2));
        assert_eq!(ability_modifier(i32::MAX), (i32::MAX - 10) / 2);
    }

    #[test]
    fn layer_maps_every_ability() {
        let scores = EffectiveScores {
            str: 14,
            dex: 14,
            con: 13,
            int: 10,
            wis: 16,
            cha: 8,
        };
        let mods = AbilityModifiers::from_base(&scores);
        assert_eq!(
            [mods.str, mods.dex, mods.con, mods.int, mods.wis, mods.cha],
            [2, 2, 1, 0, 3, -1]
        );
        assert_eq!(mods.get(Ability::Wis), 3);
    }
}
