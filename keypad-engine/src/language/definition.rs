//! Language definition files (TOML)
//!
//! A definition describes one language:
//!
//! ```toml
//! id = "en"
//! name = "English"
//! locale = "en-US"
//! script = "latin"
//! layout = [
//!     "SPECIAL",                  # 0
//!     "PUNCTUATION",              # 1
//!     ["a", "b", "c"],            # 2
//!     # ... keys 3 to 9
//! ]
//! ```
//!
//! Keys 0 and 1 usually use the `SPECIAL` and `PUNCTUATION` presets instead of
//! spelling out their characters.

use serde::Deserialize;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use super::error::{LanguageError, Result};
use super::locale::Locale;
use super::profile::{LanguageProfile, Script};
use crate::digit::Digit;

/// Characters of the `SPECIAL` key preset
const SPECIAL_PRESET: &[&str] = &[" ", "+", "\n"];

/// Characters of the `PUNCTUATION` key preset
const PUNCTUATION_PRESET: &[&str] = &[
    ".", ",", "-", "?", "!", "'", "\"", ":", ";", "(", ")", "/",
];

/// Special character groups used when a definition does not list its own
const DEFAULT_SPECIAL_GROUPS: &[&[&str]] = &[
    &["@", "#", "$", "%", "&", "*", "_", "=", "\\", "<", ">"],
    &["€", "£", "¥", "¢", "§", "°", "~", "^", "|", "[", "]", "{", "}", "`"],
];

/// Named character set for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyPreset {
    Special,
    Punctuation,
}

impl KeyPreset {
    fn chars(self) -> &'static [&'static str] {
        match self {
            KeyPreset::Special => SPECIAL_PRESET,
            KeyPreset::Punctuation => PUNCTUATION_PRESET,
        }
    }
}

/// Contents of one key in a layout: a preset name or an explicit letter list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KeyLayout {
    Preset(KeyPreset),
    Letters(Vec<String>),
}

/// Raw language definition as written in a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageDefinition {
    pub id: String,
    pub name: String,
    pub locale: String,
    pub script: Script,
    #[serde(default = "default_abc_string")]
    pub abc_string: String,
    #[serde(default = "default_has_upper_case")]
    pub has_upper_case: bool,
    pub layout: Vec<KeyLayout>,
    /// Per-key digit labels, for languages with native numerals
    #[serde(default)]
    pub digits: Option<Vec<String>>,
    #[serde(default = "default_special_chars_key")]
    pub special_chars_key: u8,
    #[serde(default)]
    pub special_chars: Option<Vec<Vec<String>>>,
}

fn default_abc_string() -> String {
    "abc".to_string()
}

fn default_has_upper_case() -> bool {
    true
}

fn default_special_chars_key() -> u8 {
    1
}

impl LanguageDefinition {
    /// Parse a definition from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the definition and build the profile.
    pub fn into_profile(self) -> Result<LanguageProfile> {
        let invalid = |reason: String| LanguageError::InvalidDefinition {
            id: self.id.clone(),
            reason,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty".to_string()));
        }
        if self.layout.len() != Digit::ALL.len() {
            return Err(invalid(format!(
                "layout must have 10 keys, found {}",
                self.layout.len()
            )));
        }

        let locale = Locale::parse(&self.locale)?;
        let special_chars_key = Digit::new(self.special_chars_key).map_err(|_| {
            invalid(format!(
                "special_chars_key {} is not a digit",
                self.special_chars_key
            ))
        })?;

        let mut keys = Vec::with_capacity(self.layout.len());
        for (key, layout) in self.layout.iter().enumerate() {
            let letters = match layout {
                KeyLayout::Preset(preset) => {
                    preset.chars().iter().map(|s| s.to_string()).collect()
                }
                KeyLayout::Letters(letters) => normalize_letters(letters),
            };
            if letters.iter().any(String::is_empty) {
                return Err(invalid(format!("key {} has an empty letter", key)));
            }
            if has_nul(&letters) {
                return Err(invalid(format!("key {} contains a NUL character", key)));
            }
            keys.push(letters);
        }

        let digits = match &self.digits {
            Some(digits) if digits.len() != Digit::ALL.len() => {
                return Err(invalid(format!(
                    "digits must have 10 entries, found {}",
                    digits.len()
                )));
            }
            Some(digits) if digits.iter().any(String::is_empty) => {
                return Err(invalid("digits must not contain empty labels".to_string()));
            }
            Some(digits) if has_nul(digits) => {
                return Err(invalid("digits must not contain NUL characters".to_string()));
            }
            Some(digits) => normalize_letters(digits),
            None => Digit::ALL.iter().map(|d| d.to_string()).collect(),
        };

        let special_char_groups: Vec<Vec<String>> = match &self.special_chars {
            Some(groups) => groups
                .iter()
                .map(|g| normalize_letters(g))
                .filter(|g| !g.is_empty())
                .collect(),
            None => DEFAULT_SPECIAL_GROUPS
                .iter()
                .map(|g| g.iter().map(|s| s.to_string()).collect())
                .collect(),
        };

        if special_char_groups.iter().any(|g| has_nul(g)) {
            return Err(invalid(
                "special_chars must not contain NUL characters".to_string(),
            ));
        }

        trace!(
            "language '{}' ({}): {} special groups",
            self.id,
            locale,
            special_char_groups.len()
        );

        Ok(LanguageProfile {
            id: self.id,
            name: self.name,
            locale,
            abc_string: self.abc_string,
            script: self.script,
            has_upper_case: self.has_upper_case,
            keys,
            digits,
            special_chars_key,
            special_char_groups,
            case_converter: LanguageProfile::default_case_converter(),
        })
    }
}

/// NFC-normalize each letter so precomposed and decomposed input compare equal.
fn normalize_letters(letters: &[String]) -> Vec<String> {
    letters.iter().map(|l| l.nfc().collect()).collect()
}

/// Letters cross the C boundary as NUL-terminated strings.
fn has_nul(letters: &[String]) -> bool {
    letters.iter().any(|l| l.contains('\0'))
}
