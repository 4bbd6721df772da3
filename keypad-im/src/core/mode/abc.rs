//! Multi-tap alphabetic mode
//!
//! Each press of a digit key offers that key's letters followed by the digit
//! itself. Pressing the same key again within the auto-accept timeout moves
//! the host's selection to the next letter; any other key starts over.

use std::sync::Arc;

use keypad_engine::{Digit, LanguageProfile, TextCase};
use tracing::trace;

use super::base::ModeBase;
use super::{ModeConfig, ModeError};

#[derive(Debug, Clone)]
pub struct ModeAbc {
    pub(super) base: ModeBase,
    config: ModeConfig,
    /// Set when the host must advance to the next suggestion instead of
    /// accepting the previous one
    should_select_next_letter: bool,
}

impl ModeAbc {
    pub fn new(config: ModeConfig, language: Option<Arc<LanguageProfile>>) -> Self {
        let mut mode = Self {
            // Without a language nothing restricts the case
            base: ModeBase::new(
                config.default_text_case,
                vec![TextCase::Lower, TextCase::Upper],
            ),
            config,
            should_select_next_letter: false,
        };
        if let Some(language) = language {
            mode.change_language(language);
        }
        mode
    }

    pub fn on_backspace(&mut self) -> bool {
        self.reset();
        false
    }

    pub fn on_number(&mut self, number: Digit, hold: bool, repeat: u32) -> Result<bool, ModeError> {
        let language = Arc::clone(self.base.language()?);

        if hold {
            self.reset();
            self.base.auto_accept_timeout = 0;
            self.base.digit_sequence = number.to_string();
            self.should_select_next_letter = false;
            self.base.suggestions.push(language.key_number(number));
        } else if repeat > 0 && self.base.first_digit() == Some(number) {
            self.base.auto_accept_timeout = self.config.abc_auto_accept_timeout_ms;
            self.should_select_next_letter = true;
        } else {
            self.start_letters(number, &language);
        }

        trace!(
            "abc: key={} hold={} repeat={} suggestions={:?}",
            number, hold, repeat, self.base.suggestions
        );
        Ok(true)
    }

    pub fn adjust_suggestion_text_case(&self, word: &str, new_text_case: TextCase) -> String {
        self.base.adjust_case(word, new_text_case)
    }

    /// Fresh press: the key's letters followed by its digit
    fn start_letters(&mut self, number: Digit, language: &LanguageProfile) {
        self.reset();
        self.base.auto_accept_timeout = self.config.abc_auto_accept_timeout_ms;
        self.base.digit_sequence = number.to_string();
        self.should_select_next_letter = false;
        self.base
            .suggestions
            .extend(language.key_letters(number).iter().cloned());
        self.base.suggestions.push(language.key_number(number));
    }

    fn refresh_suggestions(&mut self, language: &LanguageProfile) {
        match self.base.first_digit() {
            None => self.base.suggestions.clear(),
            Some(digit) => self.start_letters(digit, language),
        }
    }

    pub fn next_special_characters(&mut self) -> bool {
        let Some(language) = self.base.language.clone() else {
            return false;
        };
        let Some(digit) = self.base.first_digit() else {
            return false;
        };

        if digit == language.special_chars_key() && self.base.next_special_characters() {
            self.base.suggestions.push(language.key_number(digit));
            return true;
        }

        false
    }

    pub fn change_language(&mut self, language: Arc<LanguageProfile>) {
        let mut allowed = vec![TextCase::Lower];
        if language.has_upper_case() {
            allowed.push(TextCase::Upper);
        }
        self.base.language = Some(Arc::clone(&language));
        self.base.set_allowed_text_cases(allowed);

        self.refresh_suggestions(&language);
        // Never accept a suggestion computed under the previous language
        self.should_select_next_letter = true;
    }

    pub fn on_accept_suggestion(&mut self, _word: &str) {
        self.reset();
    }

    pub fn should_accept_previous_suggestion(&self) -> bool {
        !self.should_select_next_letter
    }

    pub fn should_select_next_suggestion(&self) -> bool {
        self.should_select_next_letter
    }

    pub fn reset(&mut self) {
        self.base.reset();
        self.should_select_next_letter = false;
    }

    /// Mode label such as `abc`, `ABC / US` or `абв / bg`
    pub fn label(&self) -> String {
        let Some(language) = &self.base.language else {
            return match self.base.text_case {
                TextCase::Lower => "abc".to_string(),
                TextCase::Upper => "ABC".to_string(),
            };
        };

        let mut label = language.abc_string().to_string();
        if language.script().is_shared_alphabet() {
            // Many languages share these alphabets; tell the enabled ones apart.
            let code = disambiguator(language);
            if !code.is_empty() {
                label.push_str(" / ");
                label.push_str(&code.to_uppercase());
            }
        }

        language.change_case(&label, self.base.text_case)
    }
}

/// Country code, else language code, else display name. Empty if all three are.
fn disambiguator(language: &LanguageProfile) -> &str {
    [
        language.locale().country(),
        language.locale().language(),
        language.name(),
    ]
    .into_iter()
    .find(|s| !s.is_empty())
    .unwrap_or("")
}
