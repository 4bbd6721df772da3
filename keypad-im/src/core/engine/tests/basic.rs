use super::*;

#[test]
fn test_engine_first_press() {
    let mut engine = InputMethodEngine::new();

    let result = engine.process_key(&press(2));
    assert!(result.consumed);
    assert_eq!(result.committed_text(), "");
    assert_eq!(preedit(&result), Some("a"));
    assert_eq!(timer(&result), Some(&EngineAction::ArmTimer(800)));
    assert_eq!(engine.suggestions().items(), ["a", "b", "c", "2"]);
    assert_eq!(engine.mode().phase(), Phase::Composing { digit: d(2) });
}

#[test]
fn test_engine_timeout_commits() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press(4));
    engine.process_key(&press(4));

    let result = engine.on_timeout();
    assert!(result.consumed);
    assert_eq!(result.committed_text(), "h");
    assert_eq!(preedit(&result), Some(""));
    assert_eq!(timer(&result), Some(&EngineAction::CancelTimer));
    assert!(!engine.is_composing());
    assert!(engine.mode().phase().is_idle());

    // Nothing pending: the timer is a no-op
    let result = engine.on_timeout();
    assert!(!result.consumed);
    assert!(result.actions.is_empty());
}

#[test]
fn test_engine_different_key_commits_previous() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press(4));
    engine.process_key(&press(4));

    let result = engine.process_key(&press(3));
    assert_eq!(result.committed_text(), "h");
    assert_eq!(preedit(&result), Some("d"));
}

#[test]
fn test_engine_hello() {
    let mut engine = InputMethodEngine::new();
    let mut text = String::new();

    // h = 44, e = 33, l = 555, pause, l = 555, o = 666
    text += &type_digits(&mut engine, "4433555");
    text += &engine.on_timeout().committed_text();
    text += &type_digits(&mut engine, "555666");
    text += &engine.commit();

    assert_eq!(text, "hello");
}

#[test]
fn test_engine_hold_types_digit() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press(2));

    let result = engine.process_key(&hold(5));
    assert_eq!(result.committed_text(), "a");
    assert_eq!(preedit(&result), Some("5"));
    assert_eq!(engine.suggestions().items(), ["5"]);
    assert_eq!(timer(&result), Some(&EngineAction::CancelTimer));
    assert_eq!(engine.mode().auto_accept_timeout(), 0);

    // A held digit waits for an explicit accept
    let result = engine.process_key(&press_key(Key::Ok));
    assert_eq!(result.committed_text(), "5");
}

#[test]
fn test_engine_backspace_drops_composition() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press(7));
    engine.process_key(&press(7));

    let result = engine.process_key(&press_key(Key::Backspace));
    assert!(result.consumed);
    assert_eq!(result.committed_text(), "");
    assert_eq!(preedit(&result), Some(""));
    assert!(engine.mode().digit_sequence().is_empty());

    // Nothing pending: the host erases committed text
    let result = engine.process_key(&press_key(Key::Backspace));
    assert!(!result.consumed);
    assert!(engine.mode().digit_sequence().is_empty());
}

#[test]
fn test_engine_ok_accepts() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press(9));
    engine.process_key(&press(9));
    engine.process_key(&press(9));

    let result = engine.process_key(&press_key(Key::Ok));
    assert!(result.consumed);
    assert_eq!(result.committed_text(), "y");

    // Ok with nothing pending passes through
    assert!(!engine.process_key(&press_key(Key::Ok)).consumed);
}

#[test]
fn test_engine_cancel() {
    let mut engine = InputMethodEngine::new();
    engine.process_key(&press(6));

    let result = engine.process_key(&press_key(Key::Cancel));
    assert!(result.consumed);
    assert_eq!(result.committed_text(), "");
    assert!(!engine.is_composing());

    assert!(!engine.process_key(&press_key(Key::Cancel)).consumed);
}

#[test]
fn test_engine_commit_and_reset() {
    let mut engine = InputMethodEngine::new();
    assert_eq!(engine.commit(), "");

    engine.process_key(&press(8));
    assert_eq!(engine.commit(), "t");
    assert!(engine.mode().phase().is_idle());

    engine.process_key(&press(8));
    engine.reset();
    engine.reset();
    assert!(!engine.is_composing());
    assert_eq!(engine.commit(), "");
}

#[test]
fn test_engine_zero_timeout_never_arms() {
    let mut engine = InputMethodEngine::with_config(EngineConfig::default().with_timeout(0));
    let result = engine.process_key(&press(2));
    assert_eq!(timer(&result), Some(&EngineAction::CancelTimer));
    assert!(engine.is_composing());
}

#[test]
fn test_engine_upper_case() {
    let mut engine = InputMethodEngine::new();
    let result = engine.process_key(&press_key(Key::Star));
    assert!(result.actions.contains(&EngineAction::UpdateModeLabel("ABC / US".to_string())));
    assert_eq!(engine.mode().text_case(), TextCase::Upper);

    let result = engine.process_key(&press(2));
    assert_eq!(preedit(&result), Some("A"));
    // Stored suggestions keep their case
    assert_eq!(engine.mode().suggestions()[0], "a");
    assert_eq!(engine.display_suggestions().items()[0], "A");
    assert_eq!(engine.commit(), "A");
}
