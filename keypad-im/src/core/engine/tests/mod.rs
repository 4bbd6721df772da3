//! Tests for the input engine

use super::*;
use crate::core::keycode::KeyEvent;
use crate::core::state::Phase;
use keypad_engine::{Digit, TextCase};

mod basic;
mod mode_switch;

fn d(n: u8) -> Digit {
    Digit::new(n).unwrap()
}

fn press(n: u8) -> KeyEvent {
    KeyEvent::digit(d(n))
}

fn hold(n: u8) -> KeyEvent {
    KeyEvent::hold(Key::Digit(d(n)))
}

fn press_key(key: Key) -> KeyEvent {
    KeyEvent::press(key)
}

/// Press each digit of `keys` in turn, collecting committed text
fn type_digits(engine: &mut InputMethodEngine, keys: &str) -> String {
    keys.chars()
        .filter_map(Digit::from_char)
        .map(|digit| engine.process_key(&KeyEvent::digit(digit)).committed_text())
        .collect()
}

fn preedit(result: &EngineResult) -> Option<&str> {
    result.actions.iter().rev().find_map(|a| match a {
        EngineAction::UpdatePreedit(text) => Some(text.as_str()),
        _ => None,
    })
}

fn timer(result: &EngineResult) -> Option<&EngineAction> {
    result
        .actions
        .iter()
        .rev()
        .find(|a| matches!(a, EngineAction::ArmTimer(_) | EngineAction::CancelTimer))
}

fn make_engine(enabled: &[&str]) -> InputMethodEngine {
    InputMethodEngine::with_languages(
        LanguageRegistry::builtin(),
        enabled.iter().map(|s| s.to_string()).collect(),
        EngineConfig::default(),
    )
    .unwrap()
}
