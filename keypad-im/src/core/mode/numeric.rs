//! Numeric mode: every key types its digit
//!
//! Digits are accepted as soon as they are pressed. Holding `0` types `+`.

use std::sync::Arc;

use keypad_engine::{Digit, LanguageProfile, TextCase};

use super::base::ModeBase;
use super::ModeError;

#[derive(Debug, Clone)]
pub struct ModeNumeric {
    pub(super) base: ModeBase,
}

impl ModeNumeric {
    pub fn new(language: Option<Arc<LanguageProfile>>) -> Self {
        let mut mode = Self {
            base: ModeBase::new(TextCase::Lower, vec![TextCase::Lower]),
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

    pub fn on_number(&mut self, number: Digit, hold: bool, _repeat: u32) -> Result<bool, ModeError> {
        self.reset();
        self.base.digit_sequence = number.to_string();

        let suggestion = if hold && number == Digit::ZERO {
            "+".to_string()
        } else {
            self.key_number(number)
        };
        self.base.suggestions.push(suggestion);
        Ok(true)
    }

    /// The language's digit label, or the ASCII digit without a language
    fn key_number(&self, number: Digit) -> String {
        self.base
            .language
            .as_ref()
            .map(|l| l.key_number(number))
            .unwrap_or_else(|| number.to_string())
    }

    pub fn change_language(&mut self, language: Arc<LanguageProfile>) {
        self.base.language = Some(language);
        if let Some(digit) = self.base.first_digit() {
            self.base.suggestions = vec![self.key_number(digit)];
        }
    }

    pub fn should_accept_current_suggestion(&self) -> bool {
        !self.base.digit_sequence.is_empty()
    }

    pub fn reset(&mut self) {
        self.base.reset();
    }
}
