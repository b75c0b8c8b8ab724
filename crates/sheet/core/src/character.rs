//! Character input record: base scores, level and per-character modifiers.

use crate::ability::Ability;
use crate::stats::AbilityScores;

/// A per-character additive modifier (feats, items, manual adjustments).
///
/// Applied on top of ancestry traits when computing adjusted scores.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterModifier {
    pub name: String,
    pub target: Ability,
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl CharacterModifier {
    pub fn new(name: impl Into<String>, target: Ability, value: i32) -> Self {
        Self {
            name: name.into(),
            target,
            value,
            description: None,
        }
    }
}

/// Everything the derivation needs to know about one character.
///
/// Scores here are always the *base* scores as entered by the user. Trait
/// and character modifiers are added during derivation and never written
/// back into this record, so deriving twice can't apply a bonus twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSheet {
    pub scores: AbilityScores,
    pub level: i32,
    pub modifiers: Vec<CharacterModifier>,
}

impl CharacterSheet {
    pub fn new(scores: AbilityScores, level: i32) -> Self {
        Self {
            scores,
            level,
            modifiers: Vec::new(),
        }
    }

    /// Adds a per-character modifier (builder pattern).
    pub fn with_modifier(mut self, modifier: CharacterModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Replaces one base score.
    pub fn set_score(&mut self, ability: Ability, score: i32) {
        self.scores.set(ability, score);
    }
}

impl Default for CharacterSheet {
    /// All scores 10, level 1
    fn default() -> Self {
        Self::new(AbilityScores::default(), 1)
    }
}
