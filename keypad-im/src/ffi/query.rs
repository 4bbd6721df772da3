#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{CString, c_char, c_int, c_uint, c_ulonglong};
use std::ptr;

use super::{KeypadEngine, ffi_mut, ffi_ref};

/// Check if there's a preedit update pending
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_has_preedit(engine: *const KeypadEngine) -> c_int {
    let engine = ffi_ref!(engine, 0);
    if engine.preedit.dirty { 1 } else { 0 }
}

/// Get the current preedit text
/// Returns a pointer to a null-terminated UTF-8 string (valid until the next call)
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_preedit(engine: *const KeypadEngine) -> *const c_char {
    let engine = ffi_ref!(engine, ptr::null());
    engine.preedit.text.as_ptr()
}

/// Check if there's a commit pending
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_has_commit(engine: *const KeypadEngine) -> c_int {
    let engine = ffi_ref!(engine, 0);
    if engine.commit.dirty { 1 } else { 0 }
}

/// Get the commit text
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_commit(engine: *const KeypadEngine) -> *const c_char {
    let engine = ffi_ref!(engine, ptr::null());
    engine.commit.c_text.as_ptr()
}

/// Get the commit text length in bytes
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_commit_len(engine: *const KeypadEngine) -> c_uint {
    let engine = ffi_ref!(engine, 0);
    engine.commit.c_text.as_bytes().len() as c_uint
}

/// Check if there's a suggestion strip update pending
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_has_suggestions(engine: *const KeypadEngine) -> c_int {
    let engine = ffi_ref!(engine, 0);
    if engine.suggestions.dirty { 1 } else { 0 }
}

/// Check if the suggestion strip should be hidden
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_should_hide_suggestions(engine: *const KeypadEngine) -> c_int {
    let engine = ffi_ref!(engine, 0);
    if engine.suggestions.hide { 1 } else { 0 }
}

/// Get the number of suggestions
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_suggestion_count(engine: *const KeypadEngine) -> c_uint {
    let engine = ffi_ref!(engine, 0);
    engine.suggestions.texts.len() as c_uint
}

/// Get a suggestion by index
/// Returns a pointer to a null-terminated UTF-8 string, or null if index is out of range
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_suggestion(
    engine: *const KeypadEngine,
    index: c_uint,
) -> *const c_char {
    let engine = ffi_ref!(engine, ptr::null());
    engine
        .suggestions
        .texts
        .get(index as usize)
        .map(|s| s.as_ptr())
        .unwrap_or(ptr::null())
}

/// Get the selected suggestion index
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_suggestion_cursor(engine: *const KeypadEngine) -> c_uint {
    let engine = ffi_ref!(engine, 0);
    engine.suggestions.cursor as c_uint
}

/// Check if the timer must be re-armed or cancelled
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_has_timer(engine: *const KeypadEngine) -> c_int {
    let engine = ffi_ref!(engine, 0);
    if engine.timer.dirty { 1 } else { 0 }
}

/// Get the timer delay in milliseconds; 0 means cancel the timer
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_timer_ms(engine: *const KeypadEngine) -> c_ulonglong {
    let engine = ffi_ref!(engine, 0);
    engine.timer.ms as c_ulonglong
}

/// Check if the mode label changed
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_has_mode_label(engine: *const KeypadEngine) -> c_int {
    let engine = ffi_ref!(engine, 0);
    if engine.label.dirty { 1 } else { 0 }
}

/// Get the mode indicator label (e.g. `abc / us`, `123`)
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_get_mode_label(engine: *const KeypadEngine) -> *const c_char {
    let engine = ffi_ref!(engine, ptr::null());
    engine.label.text.as_ptr()
}

/// Check if a composition is pending.
/// Returns 1 if composing, 0 if idle.
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_is_composing(engine: *const KeypadEngine) -> c_int {
    let engine = ffi_ref!(engine, 0);
    if engine.engine.is_composing() { 1 } else { 0 }
}

/// Commit any pending input, e.g. when the text field loses focus.
/// Returns 1 if text was committed, 0 otherwise
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_commit(engine: *mut KeypadEngine) -> c_int {
    let engine = ffi_mut!(engine, 0);
    engine.clear_flags();
    let text = engine.engine.commit();

    if text.is_empty() {
        return 0;
    }

    engine.commit.c_text = CString::new(text.as_str()).unwrap_or_default();
    engine.commit.text = text;
    engine.commit.dirty = true;
    1
}
