//! Key handling: digits, backspace, accept, star, cancel

use keypad_engine::Digit;

use super::*;

impl InputMethodEngine {
    /// Handle a digit press.
    ///
    /// Pressing the same digit again while its composition is pending is a
    /// repeat; a hold never is.
    pub(super) fn process_digit(&mut self, digit: Digit, hold: bool) -> EngineResult {
        let repeat = if !hold && self.is_composing() && self.taps.last_digit == Some(digit) {
            self.taps.repeat + 1
        } else {
            0
        };

        // Read before the mode resets its own list
        let previous = self.selected_text();

        if let Err(e) = self.mode.on_number(digit, hold, repeat) {
            warn!("Ignoring key {}: {}", digit, e);
            return EngineResult::not_consumed();
        }

        let mut result = EngineResult::consumed();

        if self.mode.should_accept_previous_suggestion()
            && let Some(text) = previous
        {
            debug!("Accepting previous suggestion: {:?}", text);
            result = result.with_action(EngineAction::Commit(text));
        }

        if self.mode.should_select_next_suggestion() {
            self.suggestions.move_next();
        } else {
            self.suggestions.replace(self.mode.suggestions().to_vec());
        }

        // A hold has no timeout window, so the next press of its key starts over
        self.taps.last_digit = if hold { None } else { Some(digit) };
        self.taps.repeat = repeat;

        if self.mode.should_accept_current_suggestion() {
            result = self.accept_selected(result);
        }

        self.with_composition_actions(result)
    }

    /// Backspace drops a pending composition. With nothing pending the key is
    /// not consumed, so the host erases the previous character itself.
    pub(super) fn process_backspace(&mut self) -> EngineResult {
        let was_composing = self.is_composing();
        let handled = self.mode.on_backspace();
        self.suggestions.clear();
        self.taps.clear();

        if handled || was_composing {
            self.with_composition_actions(EngineResult::consumed())
        } else {
            EngineResult::not_consumed()
        }
    }

    /// OK accepts the selected suggestion
    pub(super) fn process_accept(&mut self) -> EngineResult {
        if !self.is_composing() {
            return EngineResult::not_consumed();
        }
        let result = self.accept_selected(EngineResult::consumed());
        self.with_composition_actions(result)
    }

    /// Star cycles special characters on the punctuation key, otherwise the text case
    pub(super) fn process_star(&mut self) -> EngineResult {
        if self.mode.next_special_characters() {
            self.suggestions.replace(self.mode.suggestions().to_vec());
            return self.with_composition_actions(EngineResult::consumed());
        }
        self.next_text_case()
    }

    /// Cancel drops the composition without committing
    pub(super) fn process_cancel(&mut self) -> EngineResult {
        if !self.is_composing() {
            return EngineResult::not_consumed();
        }
        self.reset();
        self.with_composition_actions(EngineResult::consumed())
    }

    /// Commit the selected suggestion and end the composition
    pub(super) fn accept_selected(&mut self, result: EngineResult) -> EngineResult {
        let Some(text) = self.selected_text() else {
            return result;
        };
        self.mode.on_accept_suggestion(&text);
        self.suggestions.clear();
        self.taps.clear();
        result.with_action(EngineAction::Commit(text))
    }
}
