#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{CStr, c_char, c_int, c_uint};

use crate::core::engine::EngineResult;
use crate::core::keycode::{Key, KeyEvent};

use super::{KeypadEngine, ffi_mut};

impl KeypadEngine {
    fn apply(&mut self, result: EngineResult) -> c_int {
        self.apply_actions(result.actions);
        if result.consumed { 1 } else { 0 }
    }
}

/// Process a key press. `code` is an ASCII digit, `*`, `#` or an XKB keysym
/// for Backspace/Return/Tab/Escape; `hold` is non-zero for a long press.
/// Returns 1 if the key was consumed, 0 if the host should handle it.
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_process_key(
    engine: *mut KeypadEngine,
    code: c_uint,
    hold: c_int,
) -> c_int {
    let engine = ffi_mut!(engine, 0);
    engine.clear_flags();

    let Some(key) = Key::from_code(code) else {
        tracing::trace!("Unhandled key code: {:#x}", code);
        return 0;
    };
    let result = engine.engine.process_key(&KeyEvent::new(key, hold != 0));
    engine.apply(result)
}

/// The auto-accept timer fired.
/// Returns 1 if a suggestion was accepted, 0 if nothing was pending.
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_on_timeout(engine: *mut KeypadEngine) -> c_int {
    let engine = ffi_mut!(engine, 0);
    engine.clear_flags();
    let result = engine.engine.on_timeout();
    engine.apply(result)
}

/// Reset the engine state, dropping any pending composition
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_reset(engine: *mut KeypadEngine) {
    let engine = ffi_mut!(engine);
    engine.engine.reset();
    engine.preedit = super::PreeditCache::default();
    engine.suggestions = super::SuggestionCache::default();
    engine.commit = super::CommitCache::default();
    engine.timer = super::TimerCache::default();
    engine.label.dirty = false;
}

/// Switch to an enabled language by id (UTF-8, null-terminated).
/// Returns 0 on success, -1 if the id is invalid or not enabled.
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_set_language(
    engine: *mut KeypadEngine,
    id: *const c_char,
) -> c_int {
    if id.is_null() {
        return -1;
    }
    let engine = ffi_mut!(engine, -1);
    // SAFETY: id is non-null (checked above) and expected to be a valid C string from the host
    let id = match unsafe { CStr::from_ptr(id) }.to_str() {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("set_language: invalid UTF-8: {}", e);
            return -1;
        }
    };

    engine.clear_flags();
    match engine.engine.set_language(id) {
        Ok(result) => {
            engine.apply(result);
            0
        }
        Err(e) => {
            tracing::warn!("set_language({}): {}", id, e);
            -1
        }
    }
}
