//! The six ability identifiers and their form field names.

/// One of the six ability scores on a character sheet.
///
/// The string form is the lowercase short name used for form fields
/// (`str`, `dex`, ...) and for trait targets in catalogs. Parsing is
/// case-insensitive; anything else fails to parse and is treated by callers
/// as "no such ability".
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Ability {
    /// Strength
    Str,
    /// Dexterity
    Dex,
    /// Constitution
    Con,
    /// Intelligence
    Int,
    /// Wisdom
    Wis,
    /// Charisma
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];

    /// Parses a trait target or field name, returning `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Name of the form field holding this ability's score.
    pub fn score_field(self) -> &'static str {
        match self {
            Ability::Str => "str",
            Ability::Dex => "dex",
            Ability::Con => "con",
            Ability::Int => "int",
            Ability::Wis => "wis",
            Ability::Cha => "cha",
        }
    }

    /// Name of the form field displaying this ability's modifier.
    pub fn bonus_field(self) -> &'static str {
        match self {
            Ability::Str => "str_bonus",
            Ability::Dex => "dex_bonus",
            Ability::Con => "con_bonus",
            Ability::Int => "int_bonus",
            Ability::Wis => "wis_bonus",
            Ability::Cha => "cha_bonus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_field_names_case_insensitively() {
        assert_eq!(Ability::from_name("dex"), Some(Ability::Dex));
        assert_eq!(Ability::from_name("WIS"), Some(Ability::Wis));
        assert_eq!(Ability::from_name("luck"), None);
        assert_eq!(Ability::from_name(""), None);
    }

    #[test]
    fn field_names_follow_display_form() {
        for ability in Ability::iter() {
            assert_eq!(ability.score_field(), ability.to_string());
            assert_eq!(ability.bonus_field(), format!("{ability}_bonus"));
        }
    }

    #[test]
    fn all_matches_iteration_order() {
        assert_eq!(Ability::iter().collect::<Vec<_>>(), Ability::ALL.to_vec());
    }
}
