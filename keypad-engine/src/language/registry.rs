//! Registry of available languages
//!
//! Built-in definitions are embedded at compile time. Users may add or
//! override languages by dropping `*.toml` definition files into a directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use super::definition::LanguageDefinition;
use super::error::{LanguageError, Result};
use super::profile::LanguageProfile;

/// Built-in language definitions, keyed by file stem
const BUILTIN_DEFINITIONS: &[(&str, &str)] = &[
    ("bg", include_str!("../../languages/bg.toml")),
    ("de", include_str!("../../languages/de.toml")),
    ("el", include_str!("../../languages/el.toml")),
    ("en", include_str!("../../languages/en.toml")),
    ("he", include_str!("../../languages/he.toml")),
    ("tr", include_str!("../../languages/tr.toml")),
    ("uk", include_str!("../../languages/uk.toml")),
];

/// Languages by id
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Arc<LanguageProfile>>,
}

impl LanguageRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with all built-in languages.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (stem, content) in BUILTIN_DEFINITIONS {
            let profile = LanguageDefinition::from_toml(content)
                .and_then(LanguageDefinition::into_profile)
                .unwrap_or_else(|e| panic!("embedded language '{}' must be valid: {}", stem, e));
            registry.insert(profile);
        }
        registry
    }

    /// Add a profile, replacing any language with the same id.
    pub fn insert(&mut self, profile: LanguageProfile) -> Arc<LanguageProfile> {
        let profile = Arc::new(profile);
        if self
            .languages
            .insert(profile.id().to_string(), Arc::clone(&profile))
            .is_some()
        {
            debug!("language '{}' replaced", profile.id());
        }
        profile
    }

    /// Look up a language by id.
    pub fn get(&self, id: &str) -> Result<Arc<LanguageProfile>> {
        self.find(id)
            .ok_or_else(|| LanguageError::UnknownLanguage(id.to_string()))
    }

    pub fn find(&self, id: &str) -> Option<Arc<LanguageProfile>> {
        self.languages.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.languages.contains_key(id)
    }

    /// Language ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<LanguageProfile>> {
        self.languages.values()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Load one definition file and register it.
    pub fn load_file(&mut self, path: &Path) -> Result<Arc<LanguageProfile>> {
        let content = fs::read_to_string(path).map_err(|source| LanguageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = LanguageDefinition::from_toml(&content)?.into_profile()?;
        debug!("Loaded language '{}' from {:?}", profile.id(), path);
        Ok(self.insert(profile))
    }

    /// Load every `*.toml` file in `dir`. Invalid files are skipped with a warning.
    ///
    /// Returns the number of languages loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let entries = fs::read_dir(dir).map_err(|source| LanguageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_file(&path) {
                Ok(_) => loaded += 1,
                Err(e) => warn!("Skipping language file {:?}: {}", path, e),
            }
        }
        Ok(loaded)
    }
}
