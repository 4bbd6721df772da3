//! Error types for language profiles

use std::path::PathBuf;

/// Errors that can occur while building or looking up language profiles.
#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("digit out of range: {0}")]
    InvalidDigit(u32),

    #[error("invalid locale tag: '{0}'")]
    InvalidLocale(String),

    #[error("unknown language: '{0}'")]
    UnknownLanguage(String),

    #[error("invalid language definition '{id}': {reason}")]
    InvalidDefinition { id: String, reason: String },

    #[error("failed to parse language definition")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LanguageError>;
