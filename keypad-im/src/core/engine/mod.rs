//! Input engine - drives the active input mode from key events
//!
//! The engine plays the host's part of the input mode contract: it counts
//! multi-tap repeats, keeps the displayed suggestion list and its cursor,
//! commits text when the mode asks for it and tells the host when to arm or
//! cancel the auto-accept timer.

mod display;
mod input;
mod mode;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use keypad_engine::{LanguageProfile, LanguageRegistry};
use tracing::{debug, trace, warn};

use super::keycode::{Key, KeyEvent};
use super::mode::{InputMode, ModeError};
use super::suggestion::SuggestionList;
use crate::config::settings::Settings;

/// The input engine
pub struct InputMethodEngine {
    /// Active input mode
    mode: InputMode,
    /// Engine configuration
    config: EngineConfig,
    /// All known languages
    registry: LanguageRegistry,
    /// Enabled language ids, in cycling order
    languages: Vec<String>,
    /// Index of the active language in `languages`
    language_index: usize,
    /// Suggestions as displayed to the user, with the selection cursor
    suggestions: SuggestionList,
    /// Multi-tap repeat tracking
    taps: TapTracker,
}

impl InputMethodEngine {
    /// Create an engine with the built-in languages and English enabled
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let registry = LanguageRegistry::builtin();
        let languages = vec!["en".to_string()];
        let language = registry.find(&languages[0]);
        Self {
            mode: InputMode::new(config.default_mode, config.mode, language),
            config,
            registry,
            languages,
            language_index: 0,
            suggestions: SuggestionList::default(),
            taps: TapTracker::default(),
        }
    }

    /// Create with a language registry and the ids of the enabled languages.
    ///
    /// The first enabled language becomes active.
    pub fn with_languages(
        registry: LanguageRegistry,
        enabled: Vec<String>,
        config: EngineConfig,
    ) -> Result<Self, ModeError> {
        let Some(first) = enabled.first() else {
            return Err(ModeError::NoLanguage);
        };
        for id in &enabled {
            registry.get(id)?;
        }
        let language = registry.get(first)?;
        Ok(Self {
            mode: InputMode::new(config.default_mode, config.mode, Some(language)),
            config,
            registry,
            languages: enabled,
            language_index: 0,
            suggestions: SuggestionList::default(),
            taps: TapTracker::default(),
        })
    }

    /// Create from user settings: built-in languages, plus definition files
    /// from the user language directory when it exists.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let mut registry = LanguageRegistry::builtin();
        if let Some(dir) = settings.language_dir()
            && dir.is_dir()
        {
            let loaded = registry.load_dir(&dir)?;
            debug!("Loaded {} user language(s) from {:?}", loaded, dir);
        }

        let mut engine = Self::with_languages(
            registry,
            settings.languages.enabled.clone(),
            settings.engine_config(),
        )?;

        let default = &settings.languages.default;
        if engine.set_language(default).is_err() {
            warn!(
                "Default language '{}' is not enabled, using '{}'",
                default, engine.languages[0]
            );
        }
        Ok(engine)
    }

    /// Get the active input mode
    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Get the suggestions as displayed, with the selection cursor
    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    /// Get the active language
    pub fn language(&self) -> Option<&Arc<LanguageProfile>> {
        self.mode.language()
    }

    /// Get the enabled language ids
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a composition is waiting to be accepted
    pub fn is_composing(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Mode indicator label
    pub fn mode_label(&self) -> String {
        self.mode.to_string()
    }

    /// Reset the engine state, dropping any pending composition
    pub fn reset(&mut self) {
        self.mode.reset();
        self.suggestions.clear();
        self.taps.clear();
    }

    /// Process a key event
    pub fn process_key(&mut self, key: &KeyEvent) -> EngineResult {
        trace!(
            "Processing key: {} hold={} in phase: {:?}",
            key.key,
            key.hold,
            self.mode.phase()
        );

        match key.key {
            Key::Digit(digit) => self.process_digit(digit, key.hold),
            Key::Backspace => self.process_backspace(),
            Key::Ok => self.process_accept(),
            Key::Star => self.process_star(),
            Key::Pound => self.next_mode(),
            Key::NextLanguage => self.next_language(),
            Key::Cancel => self.process_cancel(),
        }
    }

    /// The auto-accept timer fired: accept the selected suggestion.
    pub fn on_timeout(&mut self) -> EngineResult {
        if !self.is_composing() {
            return EngineResult::not_consumed();
        }
        debug!("Auto-accept timeout");
        let result = self.accept_selected(EngineResult::consumed());
        self.with_composition_actions(result)
    }

    /// Commit any pending input and return the text
    pub fn commit(&mut self) -> String {
        let text = self.selected_text().unwrap_or_default();
        if self.is_composing() {
            self.mode.on_accept_suggestion(&text);
        }
        self.suggestions.clear();
        self.taps.clear();
        text
    }
}

impl Default for InputMethodEngine {
    fn default() -> Self {
        Self::new()
    }
}
