//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for a single `sheet` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub spell_save_dc: Option<bool>,
    pub character: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            spell_save_dc: None,
            character: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHEET_DATA_DIR` - Directory holding `config.toml` and the trait catalog (default: `data`)
    /// - `SHEET_SPELL_SAVE_DC` - Overrides `spell_save_dc` from `config.toml`
    /// - `SHEET_CHARACTER` - Character file used when no path argument is given
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var("SHEET_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.spell_save_dc = read_env_bool(&var, "SHEET_SPELL_SAVE_DC");
        config.character = var("SHEET_CHARACTER").map(PathBuf::from);

        config
    }
}

fn read_env_bool(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match var(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
