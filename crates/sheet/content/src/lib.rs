//! Data-driven content definitions and loaders.
//!
//! This crate reads the reference data a character sheet is computed from:
//! - Ancestry trait catalogs (RON or JSON)
//! - Character files (TOML)
//! - Sheet configuration (TOML)
//!
//! File formats are described by the raw records in [`formats`]; loaders
//! turn them into `sheet-core` types, rejecting malformed entries with the
//! file and entry named in the error.

#[cfg(feature = "serde")]
pub mod formats;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "serde")]
pub use formats::{CatalogFile, CharacterFile, TraitRecord};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, CharacterLoader, ConfigLoader, ContentFactory, LoadResult};
