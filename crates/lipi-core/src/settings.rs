//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` installs a custom TOML; it fails once `settings()` has run
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::script::Script;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Install custom settings. Fails with `AlreadyInitialized` if settings are
/// already in use, whether from an earlier `init_custom` or from the defaults.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    INSTANCE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub batch: BatchSettings,
    pub transliterate: TransliterateSettings,
    /// Parsed `transliterate.default_target`.
    #[serde(skip)]
    default_target: Option<Script>,
}

impl Settings {
    /// Target for hosts without a stored preference.
    pub fn default_target(&self) -> Script {
        self.default_target.unwrap_or(Script::PIVOT)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    pub chunk_size: usize,
    #[serde(default = "default_yield")]
    pub yield_between_chunks: bool,
}

fn default_yield() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransliterateSettings {
    pub default_target: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    if s.batch.chunk_size == 0 {
        return Err(SettingsError::InvalidValue {
            field: "batch.chunk_size".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    let target = Script::from_code(&s.transliterate.default_target).map_err(|e| {
        SettingsError::InvalidValue {
            field: "transliterate.default_target".to_string(),
            reason: e.to_string(),
        }
    })?;
    s.default_target = Some(target);
    Ok(s)
}
