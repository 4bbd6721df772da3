use keypad_engine::{LanguageDefinition, LanguageRegistry, Locale};

use super::*;

fn d(n: u8) -> Digit {
    Digit::new(n).unwrap()
}

fn language(id: &str) -> Arc<LanguageProfile> {
    LanguageRegistry::builtin().get(id).unwrap()
}

/// Build a profile with `letters` on key 4 and nothing on keys 2-9 otherwise
fn custom_language(id: &str, locale: &str, key4: &str) -> Arc<LanguageProfile> {
    let content = format!(
        r#"
id = "{id}"
name = "Custom {id}"
locale = "{locale}"
script = "latin"
layout = ["SPECIAL", "PUNCTUATION", ["a", "b", "c"], [], {key4}, [], [], [], [], []]
"#
    );
    Arc::new(
        LanguageDefinition::from_toml(&content)
            .unwrap()
            .into_profile()
            .unwrap(),
    )
}

fn abc(language_id: &str) -> InputMode {
    InputMode::new(ModeId::Abc, ModeConfig::default(), Some(language(language_id)))
}

fn assert_invariants(mode: &InputMode) {
    assert_eq!(
        mode.suggestions().is_empty(),
        mode.digit_sequence().is_empty(),
        "suggestions={:?} sequence={:?}",
        mode.suggestions(),
        mode.digit_sequence()
    );
    assert!(mode.allowed_text_cases().contains(&TextCase::Lower));
    assert!(mode.allowed_text_cases().contains(&mode.text_case()));
}

#[test]
fn test_fresh_press() {
    let mut mode = abc("en");
    assert!(mode.on_number(d(2), false, 0).unwrap());

    assert_eq!(mode.digit_sequence(), "2");
    assert_eq!(mode.suggestions(), ["a", "b", "c", "2"]);
    assert_eq!(mode.auto_accept_timeout(), 800);
    assert!(mode.should_accept_previous_suggestion());
    assert!(!mode.should_select_next_suggestion());
    assert!(!mode.should_accept_current_suggestion());
    assert_eq!(mode.phase(), Phase::Composing { digit: d(2) });
    assert_invariants(&mode);
}

#[test]
fn test_multi_tap_cycling() {
    let mut mode = abc("en");

    mode.on_number(d(2), false, 0).unwrap();
    assert_eq!(mode.suggestions(), ["a", "b", "c", "2"]);
    assert!(!mode.should_select_next_suggestion());

    mode.on_number(d(2), false, 1).unwrap();
    assert_eq!(mode.suggestions(), ["a", "b", "c", "2"]);
    assert!(mode.should_select_next_suggestion());
    assert!(!mode.should_accept_previous_suggestion());

    mode.on_number(d(2), false, 2).unwrap();
    assert_eq!(mode.suggestions(), ["a", "b", "c", "2"]);
    assert!(mode.should_select_next_suggestion());
    assert_eq!(mode.auto_accept_timeout(), 800);
    assert_invariants(&mode);
}

#[test]
fn test_different_key_starts_over() {
    let mut mode = abc("en");
    mode.on_number(d(2), false, 0).unwrap();
    mode.on_number(d(2), false, 1).unwrap();

    mode.on_number(d(3), false, 0).unwrap();
    assert_eq!(mode.digit_sequence(), "3");
    assert_eq!(mode.suggestions(), ["d", "e", "f", "3"]);
    assert!(mode.should_accept_previous_suggestion());
}

#[test]
fn test_repeat_of_another_key_is_a_fresh_press() {
    let mut mode = abc("en");
    mode.on_number(d(2), false, 0).unwrap();

    // A repeat count that does not belong to the pending key
    mode.on_number(d(3), false, 4).unwrap();
    assert_eq!(mode.suggestions(), ["d", "e", "f", "3"]);
    assert!(!mode.should_select_next_suggestion());
}

#[test]
fn test_hold_forces_digit() {
    for repeat in [0, 1, 5] {
        let mut mode = abc("en");
        mode.on_number(d(5), false, 0).unwrap();

        assert!(mode.on_number(d(5), true, repeat).unwrap());
        assert_eq!(mode.suggestions(), ["5"]);
        assert_eq!(mode.digit_sequence(), "5");
        assert_eq!(mode.auto_accept_timeout(), 0);
        assert!(mode.should_accept_previous_suggestion());
        assert_invariants(&mode);
    }
}

#[test]
fn test_key_without_letters() {
    let mut mode = InputMode::new(
        ModeId::Abc,
        ModeConfig::default(),
        Some(custom_language("xx", "en-GB", "[]")),
    );
    mode.on_number(d(4), false, 0).unwrap();
    assert_eq!(mode.suggestions(), ["4"]);
    assert_invariants(&mode);
}

#[test]
fn test_backspace_resets() {
    let mut mode = abc("en");
    mode.on_number(d(7), false, 0).unwrap();

    assert!(!mode.on_backspace());
    assert_eq!(mode.digit_sequence(), "");
    assert!(mode.suggestions().is_empty());
    assert_eq!(mode.auto_accept_timeout(), 0);
    assert!(!mode.should_select_next_suggestion());

    // Backspace when idle
    assert!(!mode.on_backspace());
    assert_eq!(mode.digit_sequence(), "");
}

#[test]
fn test_accept_resets() {
    let mut mode = abc("en");
    mode.on_number(d(6), false, 0).unwrap();
    mode.on_number(d(6), false, 1).unwrap();

    mode.on_accept_suggestion("n");
    assert_eq!(mode.phase(), Phase::Idle);
    assert!(mode.suggestions().is_empty());
}

#[test]
fn test_reset_idempotent() {
    let mut once = abc("en");
    once.on_number(d(9), false, 0).unwrap();
    once.reset();

    let mut twice = abc("en");
    twice.on_number(d(9), false, 0).unwrap();
    twice.reset();
    twice.reset();

    assert_eq!(once.digit_sequence(), twice.digit_sequence());
    assert_eq!(once.suggestions(), twice.suggestions());
    assert_eq!(once.auto_accept_timeout(), twice.auto_accept_timeout());
    assert_eq!(
        once.should_select_next_suggestion(),
        twice.should_select_next_suggestion()
    );
    assert_eq!(once.phase(), twice.phase());
}

#[test]
fn test_no_language() {
    let mut mode = InputMode::new(ModeId::Abc, ModeConfig::default(), None);
    assert!(matches!(
        mode.on_number(d(2), false, 0),
        Err(ModeError::NoLanguage)
    ));
    assert_invariants(&mode);
    assert_eq!(mode.to_string(), "abc");

    assert!(mode.next_text_case());
    assert_eq!(mode.to_string(), "ABC");
}

#[test]
fn test_language_switch_re_resolves() {
    let l1 = custom_language("l1", "en-GB", r#"["g", "h", "i"]"#);
    let l2 = custom_language("l2", "en-IE", r#"["x", "y"]"#);

    let mut mode = InputMode::new(ModeId::Abc, ModeConfig::default(), Some(l1));
    mode.on_number(d(4), false, 0).unwrap();
    assert_eq!(mode.suggestions(), ["g", "h", "i", "4"]);
    assert!(!mode.should_select_next_suggestion());

    mode.change_language(l2);
    assert_eq!(mode.suggestions(), ["x", "y", "4"]);
    assert_eq!(mode.digit_sequence(), "4");
    assert!(mode.should_select_next_suggestion());
    assert!(!mode.should_accept_previous_suggestion());
    assert_invariants(&mode);
}

#[test]
fn test_language_switch_when_idle() {
    let mut mode = abc("en");
    mode.change_language(language("bg"));
    assert!(mode.suggestions().is_empty());
    assert!(mode.should_select_next_suggestion());
    assert_invariants(&mode);
}

#[test]
fn test_language_switch_to_key_without_letters() {
    let mut mode = abc("en");
    mode.on_number(d(4), false, 0).unwrap();

    mode.change_language(custom_language("xx", "en-GB", "[]"));
    assert_eq!(mode.suggestions(), ["4"]);
    assert_invariants(&mode);
}

#[test]
fn test_text_case_follows_language() {
    let mut mode = abc("en");
    assert_eq!(mode.allowed_text_cases(), [TextCase::Lower, TextCase::Upper]);
    assert!(mode.next_text_case());
    assert_eq!(mode.text_case(), TextCase::Upper);

    // Hebrew has no upper case: the case falls back to lower
    mode.change_language(language("he"));
    assert_eq!(mode.allowed_text_cases(), [TextCase::Lower]);
    assert_eq!(mode.text_case(), TextCase::Lower);
    assert!(!mode.next_text_case());
    assert_invariants(&mode);

    mode.change_language(language("bg"));
    assert_eq!(mode.allowed_text_cases(), [TextCase::Lower, TextCase::Upper]);
    assert_eq!(mode.text_case(), TextCase::Lower);
}

#[test]
fn test_default_text_case_upper() {
    let config = ModeConfig {
        default_text_case: TextCase::Upper,
        ..ModeConfig::default()
    };
    let mode = InputMode::new(ModeId::Abc, config, Some(language("en")));
    assert_eq!(mode.text_case(), TextCase::Upper);

    let mode = InputMode::new(ModeId::Abc, config, Some(language("he")));
    assert_eq!(mode.text_case(), TextCase::Lower);
}

#[test]
fn test_special_characters() {
    let mut mode = abc("en");
    mode.on_number(Digit::ONE, false, 0).unwrap();
    assert_eq!(mode.suggestions()[0], ".");

    assert!(mode.next_special_characters());
    assert_eq!(mode.suggestions().first().map(String::as_str), Some("@"));
    assert_eq!(mode.suggestions().last().map(String::as_str), Some("1"));
    assert_eq!(mode.phase(), Phase::SpecialChars { digit: Digit::ONE, group: 1 });

    assert!(mode.next_special_characters());
    assert_eq!(mode.suggestions().first().map(String::as_str), Some("€"));
    assert_eq!(mode.suggestions().last().map(String::as_str), Some("1"));

    // Wraps back to the key's own punctuation
    assert!(mode.next_special_characters());
    assert_eq!(mode.suggestions()[0], ".");
    assert_eq!(mode.suggestions().last().map(String::as_str), Some("1"));
    assert_eq!(mode.phase(), Phase::Composing { digit: Digit::ONE });
    assert_invariants(&mode);
}

#[test]
fn test_special_characters_other_key() {
    let mut mode = abc("en");
    assert!(!mode.next_special_characters());

    mode.on_number(d(2), false, 0).unwrap();
    assert!(!mode.next_special_characters());
    assert_eq!(mode.suggestions(), ["a", "b", "c", "2"]);
}

#[test]
fn test_hold_ends_special_characters() {
    let mut mode = abc("en");
    mode.on_number(Digit::ONE, false, 0).unwrap();
    mode.next_special_characters();

    mode.on_number(Digit::ONE, true, 0).unwrap();
    assert_eq!(mode.suggestions(), ["1"]);
    assert_eq!(mode.phase(), Phase::Composing { digit: Digit::ONE });
}

#[test]
fn test_adjust_case_is_pure() {
    let mut mode = abc("tr");
    mode.on_number(d(4), false, 0).unwrap();
    let before = mode.suggestions().to_vec();

    let upper = mode.adjust_suggestion_text_case("i", TextCase::Upper);
    let lower = mode.adjust_suggestion_text_case("i", TextCase::Lower);
    assert_eq!(upper, "İ");
    assert_eq!(lower, "i");
    assert_ne!(upper, lower);
    assert_eq!(mode.suggestions(), before.as_slice());
}

#[test]
fn test_labels() {
    let mut mode = abc("en");
    assert_eq!(mode.to_string(), "abc / us");
    mode.next_text_case();
    assert_eq!(mode.to_string(), "ABC / US");

    let mode = abc("bg");
    assert_eq!(mode.to_string(), "абв / bg");

    // Not a shared alphabet: no suffix
    let mode = abc("el");
    assert_eq!(mode.to_string(), "αβγ");
    let mode = abc("he");
    assert_eq!(mode.to_string(), "אבג");

    let mode = InputMode::new(ModeId::Numeric, ModeConfig::default(), Some(language("en")));
    assert_eq!(mode.to_string(), "123");
}

#[test]
fn test_label_fallback_chain() {
    // No country: language code
    let mode = InputMode::new(
        ModeId::Abc,
        ModeConfig::default(),
        Some(custom_language("xx", "pt", "[]")),
    );
    assert_eq!(mode.to_string(), "abc / pt");

    // No locale at all: display name
    let mode = InputMode::new(
        ModeId::Abc,
        ModeConfig::default(),
        Some(custom_language("yy", "", "[]")),
    );
    assert_eq!(mode.to_string(), "abc / custom yy");
}

#[test]
fn test_label_all_empty() {
    let content = r#"
id = "zz"
name = ""
locale = ""
script = "latin"
layout = ["SPECIAL", "PUNCTUATION", [], [], [], [], [], [], [], []]
"#;
    let profile = LanguageDefinition::from_toml(content)
        .unwrap()
        .into_profile()
        .unwrap();
    let mode = InputMode::new(ModeId::Abc, ModeConfig::default(), Some(Arc::new(profile)));
    assert_eq!(mode.to_string(), "abc");
}

#[test]
fn test_injected_case_converter_for_label() {
    fn fixed(text: &str, _: &Locale, case: TextCase) -> String {
        match case {
            TextCase::Upper => format!("<{}>", text),
            TextCase::Lower => text.to_string(),
        }
    }
    let profile = LanguageRegistry::builtin()
        .get("en")
        .unwrap()
        .as_ref()
        .clone()
        .with_case_converter(fixed);
    let mut mode = InputMode::new(ModeId::Abc, ModeConfig::default(), Some(Arc::new(profile)));
    mode.next_text_case();
    assert_eq!(mode.to_string(), "<abc / US>");
    assert_eq!(mode.adjust_suggestion_text_case("q", TextCase::Upper), "<q>");
}

#[test]
fn test_numeric_mode() {
    let mut mode = InputMode::new(ModeId::Numeric, ModeConfig::default(), Some(language("en")));
    assert_eq!(mode.allowed_text_cases(), [TextCase::Lower]);

    mode.on_number(d(7), false, 0).unwrap();
    assert_eq!(mode.suggestions(), ["7"]);
    assert_eq!(mode.auto_accept_timeout(), 0);
    assert!(mode.should_accept_current_suggestion());
    assert!(!mode.should_select_next_suggestion());

    mode.on_number(Digit::ZERO, true, 0).unwrap();
    assert_eq!(mode.suggestions(), ["+"]);

    mode.on_number(d(3), true, 0).unwrap();
    assert_eq!(mode.suggestions(), ["3"]);

    assert!(!mode.next_special_characters());
    assert!(!mode.next_text_case());

    mode.on_accept_suggestion("3");
    assert!(!mode.should_accept_current_suggestion());
    assert_invariants(&mode);
}

#[test]
fn test_numeric_mode_without_language() {
    let mut mode = InputMode::new(ModeId::Numeric, ModeConfig::default(), None);
    mode.on_number(d(1), false, 0).unwrap();
    assert_eq!(mode.suggestions(), ["1"]);
}
