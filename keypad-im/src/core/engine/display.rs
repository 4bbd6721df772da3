//! Preedit, suggestion strip and timer actions

use super::*;

impl InputMethodEngine {
    /// The selected suggestion in the current text case
    pub(super) fn selected_text(&self) -> Option<String> {
        self.suggestions
            .selected()
            .map(|s| self.mode.adjust_suggestion_text_case(s, self.mode.text_case()))
    }

    /// The suggestion list in the current text case
    pub fn display_suggestions(&self) -> SuggestionList {
        let case = self.mode.text_case();
        self.suggestions
            .map_items(|s| self.mode.adjust_suggestion_text_case(s, case))
    }

    /// Append the actions that bring the host's view in line with the composition
    pub(super) fn with_composition_actions(&self, result: EngineResult) -> EngineResult {
        if !self.is_composing() {
            return result
                .with_action(EngineAction::UpdatePreedit(String::new()))
                .with_action(EngineAction::HideSuggestions)
                .with_action(EngineAction::CancelTimer);
        }

        let preedit = self.selected_text().unwrap_or_default();
        let timer = match self.mode.auto_accept_timeout() {
            0 => EngineAction::CancelTimer,
            ms => EngineAction::ArmTimer(ms),
        };
        result
            .with_action(EngineAction::UpdatePreedit(preedit))
            .with_action(EngineAction::ShowSuggestions(self.display_suggestions()))
            .with_action(timer)
    }
}
