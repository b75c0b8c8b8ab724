//! Deterministic character sheet rules shared by the session layer and tools.
//!
//! `sheet-core` defines the canonical derivation rules (ability modifiers,
//! proficiency bonus, spell save DC) and exposes pure APIs over explicit
//! inputs. Nothing here reads from or writes to a presentation layer; the
//! `sheet-session` crate owns that boundary.
//!
//! The single entry point for a full computation is [`derive`]:
//!
//! ```
//! # use sheet_core::*;
//! let mut catalog = TraitCatalog::new();
//! catalog.add_trait("Forest-kin", AncestryTrait::stat("Nimble", "dex", 2));
//!
//! let sheet = CharacterSheet::new(AbilityScores::new(14, 12, 13, 10, 16, 8), 5);
//! let derived = derive(&sheet, &catalog, &SheetConfig::default());
//!
//! assert_eq!(derived.scores.dex, 14);
//! assert_eq!(derived.modifiers.dex, 2);
//! assert_eq!(derived.proficiency_bonus, 3);
//! assert_eq!(derived.spell_save_dc, Some(14));
//! ```
pub mod ability;
pub mod character;
pub mod config;
pub mod error;
pub mod stats;
pub mod traits;

pub use ability::Ability;
pub use character::{CharacterModifier, CharacterSheet};
pub use config::{SheetConfig, StatBounds};
pub use error::{SheetError, parse_field};
pub use stats::{
    AbilityModifiers, AbilityScores, Bonus, BonusStack, DerivedSheet, EffectiveScores,
    LEVEL_FIELD, PROFICIENCY_FIELD, SPELL_SAVE_DC_FIELD, ScoreBonuses, StatLayer,
    ability_modifier, derive, proficiency_bonus, spell_save_dc,
};
pub use traits::{AncestryTrait, TraitCatalog, TraitEffect, TraitMatches};
