//! `sheet` command line entry point.
//!
//! Loads a character file plus the trait catalog and sheet config from the
//! data directory, runs a sheet session and prints every derived field.
mod config;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::ClientConfig;
use sheet_content::{CharacterFile, ContentFactory};
use sheet_core::{Ability, LEVEL_FIELD};
use sheet_session::{FieldMap, SheetSession};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = ClientConfig::from_env();
    let character_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| client.character.clone())
        .context("usage: sheet <character.toml> (or set SHEET_CHARACTER)")?;

    let factory = ContentFactory::new(&client.data_dir);
    let mut config = factory.load_config()?;
    if let Some(enabled) = client.spell_save_dc {
        config = config.with_spell_save_dc(enabled);
    }
    let catalog = factory.load_catalog()?;
    let character = factory.load_character(&character_path)?;
    tracing::info!(
        "Loaded {} ({}) from {}",
        character.name,
        character.ancestry.as_deref().unwrap_or("any ancestry"),
        character_path.display()
    );

    let mut form = character_form(&character)?;
    let traits = character.applicable_traits(&catalog);
    let session =
        SheetSession::start_with_modifiers(&mut form, traits, config, character.modifiers)?;

    for (field, value) in session.derived().output_fields() {
        println!("{field}={value}");
    }
    Ok(())
}

/// Fills the form inputs from a character file.
fn character_form(character: &CharacterFile) -> Result<FieldMap> {
    let mut form = FieldMap::new();
    for ability in Ability::ALL {
        form.set(ability.score_field(), character.scores.get(ability).to_string());
    }
    let level = character
        .total_level()
        .with_context(|| format!("character {} has no level", character.name))?;
    form.set(LEVEL_FIELD, level.to_string());
    Ok(form)
}
