//! Input modes
//!
//! An input mode interprets digit presses for one kind of text entry and
//! tells the host what to do with the resulting suggestions:
//!
//! - `should_accept_previous_suggestion`: commit what was selected before this key
//! - `should_select_next_suggestion`: keep the list, advance the selection
//! - `should_accept_current_suggestion`: commit the new selection right away
//! - `auto_accept_timeout`: arm a timer that accepts the selection (0 = don't)
//!
//! The set of modes is closed; [`InputMode`] dispatches to each variant.

mod abc;
mod base;
mod numeric;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use keypad_engine::{Digit, LanguageError, LanguageProfile, TextCase};
use serde::{Deserialize, Serialize};

pub use abc::ModeAbc;
pub use numeric::ModeNumeric;

use base::ModeBase;

use super::state::Phase;

/// Errors reported by input modes
#[derive(Debug, thiserror::Error)]
pub enum ModeError {
    /// A key was pressed before any language was loaded
    #[error("no language loaded")]
    NoLanguage,

    #[error(transparent)]
    Language(#[from] LanguageError),
}

/// Identifies an input mode
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeId {
    /// Multi-tap letters
    #[default]
    Abc,
    /// Digits only
    Numeric,
}

impl ModeId {
    /// The mode that follows this one when cycling
    pub fn next(self) -> Self {
        match self {
            ModeId::Abc => ModeId::Numeric,
            ModeId::Numeric => ModeId::Abc,
        }
    }
}

/// Settings consumed by the input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    /// Delay before a multi-tap letter is accepted automatically (0 = never)
    pub abc_auto_accept_timeout_ms: u64,
    /// Case a new alphabetic mode starts in, if the language allows it
    pub default_text_case: TextCase,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            abc_auto_accept_timeout_ms: 800,
            default_text_case: TextCase::Lower,
        }
    }
}

/// The active input mode
#[derive(Debug, Clone)]
pub enum InputMode {
    Abc(ModeAbc),
    Numeric(ModeNumeric),
}

impl InputMode {
    pub fn new(id: ModeId, config: ModeConfig, language: Option<Arc<LanguageProfile>>) -> Self {
        match id {
            ModeId::Abc => InputMode::Abc(ModeAbc::new(config, language)),
            ModeId::Numeric => InputMode::Numeric(ModeNumeric::new(language)),
        }
    }

    pub fn id(&self) -> ModeId {
        match self {
            InputMode::Abc(_) => ModeId::Abc,
            InputMode::Numeric(_) => ModeId::Numeric,
        }
    }

    fn base(&self) -> &ModeBase {
        match self {
            InputMode::Abc(mode) => &mode.base,
            InputMode::Numeric(mode) => &mode.base,
        }
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        match self {
            InputMode::Abc(mode) => &mut mode.base,
            InputMode::Numeric(mode) => &mut mode.base,
        }
    }

    /// Handle a digit press. `repeat` counts earlier presses of the same key
    /// in the current composition (0 for a fresh press).
    ///
    /// Returns whether the key was handled.
    pub fn on_number(&mut self, digit: Digit, hold: bool, repeat: u32) -> Result<bool, ModeError> {
        match self {
            InputMode::Abc(mode) => mode.on_number(digit, hold, repeat),
            InputMode::Numeric(mode) => mode.on_number(digit, hold, repeat),
        }
    }

    /// Drop the composition. Returns false: erasing committed text is up to the host.
    pub fn on_backspace(&mut self) -> bool {
        match self {
            InputMode::Abc(mode) => mode.on_backspace(),
            InputMode::Numeric(mode) => mode.on_backspace(),
        }
    }

    /// Called after the host committed `word`; ends the composition.
    pub fn on_accept_suggestion(&mut self, word: &str) {
        match self {
            InputMode::Abc(mode) => mode.on_accept_suggestion(word),
            InputMode::Numeric(mode) => mode.reset(),
        }
    }

    pub fn should_accept_previous_suggestion(&self) -> bool {
        match self {
            InputMode::Abc(mode) => mode.should_accept_previous_suggestion(),
            InputMode::Numeric(_) => true,
        }
    }

    pub fn should_select_next_suggestion(&self) -> bool {
        match self {
            InputMode::Abc(mode) => mode.should_select_next_suggestion(),
            InputMode::Numeric(_) => false,
        }
    }

    pub fn should_accept_current_suggestion(&self) -> bool {
        match self {
            InputMode::Abc(_) => false,
            InputMode::Numeric(mode) => mode.should_accept_current_suggestion(),
        }
    }

    /// Switch to another language and re-resolve the pending digit under it.
    pub fn change_language(&mut self, language: Arc<LanguageProfile>) {
        match self {
            InputMode::Abc(mode) => mode.change_language(language),
            InputMode::Numeric(mode) => mode.change_language(language),
        }
    }

    /// Cycle the punctuation groups of the special characters key.
    ///
    /// Returns false, without changing anything, unless that key is pending.
    pub fn next_special_characters(&mut self) -> bool {
        match self {
            InputMode::Abc(mode) => mode.next_special_characters(),
            InputMode::Numeric(_) => false,
        }
    }

    /// Case-convert a suggestion for display or commit. Stored suggestions are not touched.
    pub fn adjust_suggestion_text_case(&self, word: &str, new_text_case: TextCase) -> String {
        match self {
            InputMode::Abc(mode) => mode.adjust_suggestion_text_case(word, new_text_case),
            InputMode::Numeric(_) => word.to_string(),
        }
    }

    /// Advance to the next allowed text case. Returns false if only one is allowed.
    pub fn next_text_case(&mut self) -> bool {
        self.base_mut().next_text_case()
    }

    /// Return to idle. Safe to call in any state, any number of times.
    pub fn reset(&mut self) {
        match self {
            InputMode::Abc(mode) => mode.reset(),
            InputMode::Numeric(mode) => mode.reset(),
        }
    }

    pub fn digit_sequence(&self) -> &str {
        &self.base().digit_sequence
    }

    pub fn suggestions(&self) -> &[String] {
        &self.base().suggestions
    }

    pub fn text_case(&self) -> TextCase {
        self.base().text_case
    }

    pub fn allowed_text_cases(&self) -> &[TextCase] {
        &self.base().allowed_text_cases
    }

    /// Auto-accept delay in milliseconds (0 = wait for an explicit action)
    pub fn auto_accept_timeout(&self) -> u64 {
        self.base().auto_accept_timeout
    }

    pub fn language(&self) -> Option<&Arc<LanguageProfile>> {
        self.base().language.as_ref()
    }

    pub fn phase(&self) -> Phase {
        let base = self.base();
        match base.first_digit() {
            None => Phase::Idle,
            Some(digit) if base.special.group() > 0 => Phase::SpecialChars {
                digit,
                group: base.special.group(),
            },
            Some(digit) => Phase::Composing { digit },
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Abc(mode) => f.write_str(&mode.label()),
            InputMode::Numeric(_) => f.write_str("123"),
        }
    }
}
