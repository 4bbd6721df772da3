#![allow(clippy::not_unsafe_ptr_arg_deref)]

use super::{KeypadEngine, init_logging};

/// Create a new engine instance from the user's settings.
/// Returns a pointer to the engine; free it with `keypad_engine_free`.
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_new() -> *mut KeypadEngine {
    init_logging();
    let engine = Box::new(KeypadEngine::new());
    tracing::info!(
        "Keypad engine ready: languages={:?}, mode={}",
        engine.engine.languages(),
        engine.engine.mode_label()
    );
    Box::into_raw(engine)
}

/// Destroy an engine instance
#[unsafe(no_mangle)]
pub extern "C" fn keypad_engine_free(engine: *mut KeypadEngine) {
    if !engine.is_null() {
        // SAFETY: Pointer is non-null (checked above) and was created by Box::into_raw in keypad_engine_new
        unsafe {
            drop(Box::from_raw(engine));
        }
    }
}
