//! Type definitions for the input engine

use keypad_engine::TextCase;

use crate::core::mode::{ModeConfig, ModeId};

use super::super::suggestion::SuggestionList;

/// Action to be performed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineAction {
    /// Update the composing text (the selected suggestion, case-adjusted)
    UpdatePreedit(String),
    /// Show the suggestion strip
    ShowSuggestions(SuggestionList),
    /// Hide the suggestion strip
    HideSuggestions,
    /// Commit text to the application
    Commit(String),
    /// Update the mode indicator (e.g. `abc / us`, `ABC / US`, `123`)
    UpdateModeLabel(String),
    /// (Re)arm the auto-accept timer; call `on_timeout` when it fires
    ArmTimer(u64),
    /// Cancel any pending auto-accept timer
    CancelTimer,
}

/// Result of processing a key event
#[derive(Debug, Clone, Default)]
pub struct EngineResult {
    /// Whether the key was consumed by the engine
    pub consumed: bool,
    /// Actions to perform
    pub actions: Vec<EngineAction>,
}

impl EngineResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            actions: Vec::new(),
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: EngineAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Text committed by this result, concatenated
    pub fn committed_text(&self) -> String {
        self.actions
            .iter()
            .filter_map(|a| match a {
                EngineAction::Commit(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Configuration for the input engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Settings handed to the input modes
    pub mode: ModeConfig,
    /// Mode the engine starts in
    pub default_mode: ModeId,
}

impl EngineConfig {
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.mode.abc_auto_accept_timeout_ms = timeout_ms;
        self
    }

    pub fn with_text_case(mut self, text_case: TextCase) -> Self {
        self.mode.default_text_case = text_case;
        self
    }
}

/// Last digit press, used to count multi-tap repeats
#[derive(Debug, Clone, Copy, Default)]
pub(in crate::core) struct TapTracker {
    /// Digit of the last press, if a composition is still pending
    pub last_digit: Option<keypad_engine::Digit>,
    /// Repeat count of the last press
    pub repeat: u32,
}

impl TapTracker {
    pub fn clear(&mut self) {
        self.last_digit = None;
        self.repeat = 0;
    }
}
