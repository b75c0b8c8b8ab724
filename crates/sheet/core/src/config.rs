use crate::ability::Ability;
use crate::error::SheetError;

/// Sheet configuration and tunable rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Whether the spell save DC is computed and displayed.
    pub spell_save_dc: bool,
    /// Ability whose modifier feeds the spell save DC.
    pub spellcasting_ability: Ability,
    /// Accepted range for the character level.
    pub level_bounds: StatBounds,
    /// Accepted range for user-entered (base) ability scores.
    pub score_bounds: StatBounds,
}

impl SheetConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPELLCASTING_ABILITY: Ability = Ability::Wis;

    pub fn new() -> Self {
        Self {
            spell_save_dc: true,
            spellcasting_ability: Self::DEFAULT_SPELLCASTING_ABILITY,
            level_bounds: StatBounds::LEVEL,
            score_bounds: StatBounds::ABILITY_SCORE,
        }
    }

    /// Returns this config with spell save DC display switched on or off.
    pub fn with_spell_save_dc(mut self, enabled: bool) -> Self {
        self.spell_save_dc = enabled;
        self
    }

    pub fn with_spellcasting_ability(mut self, ability: Ability) -> Self {
        self.spellcasting_ability = ability;
        self
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive bounds for a validated numeric input.
///
/// Bounds apply to raw input only. Derived values (adjusted scores,
/// modifiers) are never clamped; a trait may push a score past the input
/// maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBounds {
    pub min: i32,
    pub max: i32,
}

impl StatBounds {
    /// Character level bounds [1, 20]
    pub const LEVEL: Self = Self { min: 1, max: 20 };

    /// Ability score bounds [0, 30]
    pub const ABILITY_SCORE: Self = Self { min: 0, max: 30 };

    /// Bounds for a single trait or character modifier delta [-30, 30]
    pub const DELTA: Self = Self { min: -30, max: 30 };

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Rejects `value` with [`SheetError::OutOfRange`] when outside the bounds.
    pub fn check(&self, field: &str, value: i32) -> Result<i32, SheetError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(SheetError::OutOfRange {
                field: field.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}
