//! Mode, language and text case switching

use tracing::debug;

use super::*;

impl InputMethodEngine {
    /// Switch to the next input mode (Pound). Pending text is committed first.
    pub(super) fn next_mode(&mut self) -> EngineResult {
        let result = self.accept_selected(EngineResult::consumed());

        let next = self.mode.id().next();
        let language = self.mode.language().cloned();
        self.mode = InputMode::new(next, self.config.mode, language);
        debug!("Input mode: {:?} ({})", next, self.mode);

        self.with_composition_actions(result)
            .with_action(EngineAction::UpdateModeLabel(self.mode_label()))
    }

    /// Switch to the next enabled language
    pub(super) fn next_language(&mut self) -> EngineResult {
        if self.languages.len() < 2 {
            return EngineResult::consumed();
        }
        let index = (self.language_index + 1) % self.languages.len();
        self.activate_language(index)
    }

    /// Switch to an enabled language by id
    pub fn set_language(&mut self, id: &str) -> Result<EngineResult, ModeError> {
        let Some(index) = self.languages.iter().position(|l| l == id) else {
            return Err(ModeError::Language(
                keypad_engine::LanguageError::UnknownLanguage(id.to_string()),
            ));
        };
        Ok(self.activate_language(index))
    }

    fn activate_language(&mut self, index: usize) -> EngineResult {
        let Some(language) = self.registry.find(&self.languages[index]) else {
            warn!("Language '{}' disappeared from the registry", self.languages[index]);
            return EngineResult::not_consumed();
        };
        self.language_index = index;
        debug!("Language: {} ({})", language.id(), language.locale());

        self.mode.change_language(language);
        // The pending digit was re-resolved: show the new letters at the same position
        self.suggestions
            .replace_keep_cursor(self.mode.suggestions().to_vec());

        self.with_composition_actions(EngineResult::consumed())
            .with_action(EngineAction::UpdateModeLabel(self.mode_label()))
    }

    /// Switch to the next text case allowed by the language
    pub(super) fn next_text_case(&mut self) -> EngineResult {
        if !self.mode.next_text_case() {
            return EngineResult::consumed();
        }
        debug!("Text case: {:?}", self.mode.text_case());
        self.with_composition_actions(EngineResult::consumed())
            .with_action(EngineAction::UpdateModeLabel(self.mode_label()))
    }
}
