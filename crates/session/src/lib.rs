//! Presentation boundary for the stat derivation engine.
//!
//! A [`SheetSession`] reads raw named fields from a [`FormFields`]
//! implementation, validates them, runs the pure derivation from
//! `sheet-core` and writes the displayed values back:
//!
//! | Reads | Writes |
//! |---|---|
//! | `str` `dex` `con` `int` `wis` `cha` | adjusted `<stat>`, `<stat>_bonus` |
//! | `level` | `proficiency_bonus`, `spell_save_dc` (when enabled) |
//!
//! Base scores are held by the session, so re-reading the form after it has
//! displayed adjusted scores never applies a trait bonus twice.

pub mod error;
pub mod form;
pub mod session;

pub use error::SessionError;
pub use form::{FieldMap, FormFields};
pub use session::SheetSession;
