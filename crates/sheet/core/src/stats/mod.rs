//! Stat derivation - layered, pure, recomputed on every call.
//!
//! # Architecture
//!
//! ```text
//! [ Base Scores + Score Bonuses (Layer 1) ]   trait / character deltas
//!      ↓
//! [ Ability Modifiers (Layer 2) ]             floor((score - 10) / 2)
//!      ↓
//! [ Proficiency (Layer 3) ]                   ceil(1 + level / 4)
//!      ↓
//! [ Spell Save DC (Layer 4) ]                 8 + proficiency + modifier
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: base scores and level are the only inputs that are stored
//! 2. **Unidirectional Flow**: each layer only reads the layers above it
//! 3. **Deterministic**: pure functions, no I/O, no hidden state

pub mod bonus;
pub mod modifiers;
pub mod proficiency;
pub mod scores;
pub mod sheet;
pub mod spellcasting;

pub use bonus::{Bonus, BonusStack, StatLayer};
pub use modifiers::{AbilityModifiers, ability_modifier};
pub use proficiency::proficiency_bonus;
pub use scores::{AbilityScores, EffectiveScores, ScoreBonuses};
pub use sheet::{DerivedSheet, LEVEL_FIELD, PROFICIENCY_FIELD, SPELL_SAVE_DC_FIELD, derive};
pub use spellcasting::spell_save_dc;
