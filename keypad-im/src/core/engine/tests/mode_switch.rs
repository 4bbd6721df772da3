use super::*;
use crate::core::mode::ModeId;

#[test]
fn test_pound_commits_and_switches() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press(2));
    engine.process_key(&press(2));

    let result = engine.process_key(&press_key(Key::Pound));
    assert!(result.consumed);
    assert_eq!(result.committed_text(), "b");
    assert!(result.actions.contains(&EngineAction::UpdateModeLabel("123".to_string())));
    assert_eq!(engine.mode().id(), ModeId::Numeric);
    assert!(!engine.is_composing());

    engine.process_key(&press_key(Key::Pound));
    assert_eq!(engine.mode().id(), ModeId::Abc);
    assert_eq!(engine.mode_label(), "abc / us");
    assert_eq!(engine.language().unwrap().id(), "en");
}

#[test]
fn test_numeric_commits_immediately() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press_key(Key::Pound));

    let result = engine.process_key(&press(5));
    assert!(result.consumed);
    assert_eq!(result.committed_text(), "5");
    assert_eq!(timer(&result), Some(&EngineAction::CancelTimer));
    assert!(!engine.is_composing());

    // No repeat cycling in numeric mode
    let result = engine.process_key(&press(5));
    assert_eq!(result.committed_text(), "5");

    let result = engine.process_key(&hold(0));
    assert_eq!(result.committed_text(), "+");
}

#[test]
fn test_numeric_keys_pass_through() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press_key(Key::Pound));

    assert!(!engine.process_key(&press_key(Key::Backspace)).consumed);
    assert!(!engine.process_key(&press_key(Key::Ok)).consumed);
    assert!(!engine.on_timeout().consumed);

    // Star has no case to switch in numeric mode
    let result = engine.process_key(&press_key(Key::Star));
    assert!(result.actions.is_empty());
}

#[test]
fn test_default_mode_from_config() {
    let config = EngineConfig {
        default_mode: ModeId::Numeric,
        ..EngineConfig::default()
    };
    let mut engine = InputMethodEngine::with_config(config);
    assert_eq!(engine.mode_label(), "123");
    assert_eq!(engine.process_key(&press(7)).committed_text(), "7");
}

#[test]
fn test_language_switch_in_numeric_mode() {
    let mut engine = make_engine(&["en", "bg"]);
    engine.process_key(&press_key(Key::Pound));

    let result = engine.process_key(&press_key(Key::NextLanguage));
    assert!(result.actions.contains(&EngineAction::UpdateModeLabel("123".to_string())));
    assert_eq!(engine.language().unwrap().id(), "bg");

    engine.process_key(&press_key(Key::Pound));
    assert_eq!(engine.mode_label(), "абв / bg");
}
