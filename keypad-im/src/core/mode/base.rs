//! State shared by every input mode

use std::sync::Arc;

use keypad_engine::{Digit, LanguageProfile, Locale, SpecialCharCycler, TextCase, locale_case};

use super::ModeError;

/// Pending digits, suggestions, case and language common to all modes
#[derive(Debug, Clone)]
pub(super) struct ModeBase {
    /// Pending digit trail (at most one digit in the modes implemented here)
    pub digit_sequence: String,
    /// Suggestions for the pending digits, first = default selection
    pub suggestions: Vec<String>,
    pub text_case: TextCase,
    /// Always starts with `Lower`
    pub allowed_text_cases: Vec<TextCase>,
    /// Auto-accept delay in milliseconds (0 = wait for an explicit action)
    pub auto_accept_timeout: u64,
    pub language: Option<Arc<LanguageProfile>>,
    pub special: SpecialCharCycler,
}

impl ModeBase {
    pub fn new(text_case: TextCase, allowed_text_cases: Vec<TextCase>) -> Self {
        let mut base = Self {
            digit_sequence: String::new(),
            suggestions: Vec::new(),
            text_case,
            allowed_text_cases,
            auto_accept_timeout: 0,
            language: None,
            special: SpecialCharCycler::new(),
        };
        base.clamp_text_case();
        base
    }

    pub fn reset(&mut self) {
        self.digit_sequence.clear();
        self.suggestions.clear();
        self.auto_accept_timeout = 0;
        self.special.reset();
    }

    pub fn language(&self) -> Result<&Arc<LanguageProfile>, ModeError> {
        self.language.as_ref().ok_or(ModeError::NoLanguage)
    }

    /// The pending digit, if any
    pub fn first_digit(&self) -> Option<Digit> {
        self.digit_sequence.chars().next().and_then(Digit::from_char)
    }

    pub fn set_allowed_text_cases(&mut self, allowed: Vec<TextCase>) {
        self.allowed_text_cases = allowed;
        self.clamp_text_case();
    }

    fn clamp_text_case(&mut self) {
        if !self.allowed_text_cases.contains(&self.text_case) {
            self.text_case = self
                .allowed_text_cases
                .first()
                .copied()
                .unwrap_or_default();
        }
    }

    /// Advance to the next allowed case. Returns false if there is nothing to switch to.
    pub fn next_text_case(&mut self) -> bool {
        if self.allowed_text_cases.len() < 2 {
            return false;
        }
        let current = self
            .allowed_text_cases
            .iter()
            .position(|c| *c == self.text_case)
            .unwrap_or(0);
        self.text_case = self.allowed_text_cases[(current + 1) % self.allowed_text_cases.len()];
        true
    }

    /// Case-convert a word with the active language's locale, or the root locale without one.
    pub fn adjust_case(&self, word: &str, case: TextCase) -> String {
        match &self.language {
            Some(language) => language.change_case(word, case),
            None => locale_case(word, &Locale::default(), case),
        }
    }

    /// Replace the suggestions with the next special character group of the pending key.
    pub fn next_special_characters(&mut self) -> bool {
        let Some(language) = self.language.clone() else {
            return false;
        };
        if self.digit_sequence.is_empty() {
            return false;
        }
        match self.special.next(&language) {
            Some(chars) => {
                self.suggestions = chars;
                true
            }
            None => false,
        }
    }
}
