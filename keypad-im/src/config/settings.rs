//! Settings configuration
//!
//! Manages user-configurable settings for the input method.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use keypad_engine::TextCase;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::engine::EngineConfig;
use crate::core::mode::{ModeConfig, ModeId};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the input method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Key handling settings
    pub input: InputSettings,
    /// Language selection
    pub languages: LanguageSettings,
}

/// Key handling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// Delay before a multi-tap letter is accepted automatically (0 = never)
    pub abc_auto_accept_timeout_ms: u64,
    /// Mode on startup
    #[serde(default)]
    pub default_mode: ModeId,
    /// Case on startup, if the language allows it
    #[serde(default)]
    pub default_text_case: TextCase,
}

/// Language selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSettings {
    /// Enabled language ids, in cycling order
    pub enabled: Vec<String>,
    /// Language active on startup
    pub default: String,
    /// Directory of user language definitions (optional, defaults to data_dir/languages)
    pub user_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
///
/// Arrays are replaced, not appended: `enabled = ["bg"]` means only Bulgarian.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(key) {
                    Some(base_value) => merge_toml(base_value, value),
                    None => {
                        base_table.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, _) => *base = overlay.clone(),
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "keypad", "keypad-im")
}

impl Settings {
    /// Get the data directory path
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get the user language directory.
    ///
    /// Every `*.toml` file in it is loaded on top of the built-in languages.
    /// Default: `~/.local/share/keypad-im/languages/`
    pub fn language_dir(&self) -> Option<PathBuf> {
        match &self.languages.user_dir {
            Some(dir) => Some(PathBuf::from(dir)),
            None => Self::data_dir().map(|dir| dir.join("languages")),
        }
    }

    /// Engine configuration derived from these settings
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            mode: ModeConfig {
                abc_auto_accept_timeout_ms: self.input.abc_auto_accept_timeout_ms,
                default_text_case: self.input.default_text_case,
            },
            default_mode: self.input.default_mode,
        }
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_file);
        Self::load_from(&config_file)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Save settings to the default configuration file
    pub fn save(&self) -> Result<()> {
        let Some(config_file) = Self::config_file() else {
            anyhow::bail!("Could not determine config directory");
        };
        debug!("Saving config to {:?}", config_file);
        self.save_to(&config_file)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
