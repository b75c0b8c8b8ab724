//! Spellcasting - Layer 4 of the stat system.

/// Base difficulty every spell save DC starts from.
pub const SPELL_SAVE_BASE: i32 = 8;

/// Spell save DC from an already-derived proficiency bonus and the
/// spellcasting ability's modifier.
///
/// Formula: `8 + proficiency + modifier`
///
/// ```
/// # use sheet_core::spell_save_dc;
/// assert_eq!(spell_save_dc(3, 2), 13);
/// ```
pub const fn spell_save_dc(proficiency: i32, casting_modifier: i32) -> i32 {
    SPELL_SAVE_BASE
        .saturating_add(proficiency)
        .saturating_add(casting_modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_modifier_lowers_the_dc() {
        assert_eq!(spell_save_dc(2, -1), 9);
        assert_eq!(spell_save_dc(6, 5), 19);
    }
}
