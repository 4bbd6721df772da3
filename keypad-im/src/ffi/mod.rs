//! C FFI interface for native keyboard hosts
//!
//! The host owns the timer and the text field: after each call it checks the
//! `has_*` flags and applies what changed.

use std::ffi::CString;
use std::sync::Once;

mod input;
mod lifecycle;
mod query;


/// Null-check + deref for `*const` FFI pointers. Returns `$default` if null.
macro_rules! ffi_ref {
    ($ptr:expr, $default:expr) => {{
        if $ptr.is_null() {
            return $default;
        }
        unsafe { &*$ptr }
    }};
}

/// Null-check + deref for `*mut` FFI pointers. Returns `$default` if null.
/// Use without default for void functions.
macro_rules! ffi_mut {
    ($ptr:expr) => {{
        if $ptr.is_null() {
            return;
        }
        unsafe { &mut *$ptr }
    }};
    ($ptr:expr, $default:expr) => {{
        if $ptr.is_null() {
            return $default;
        }
        unsafe { &mut *$ptr }
    }};
}

pub(crate) use ffi_mut;
pub(crate) use ffi_ref;

use crate::config::Settings;
use crate::core::engine::{EngineAction, InputMethodEngine};

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Cached preedit text for FFI consumption.
#[derive(Default)]
struct PreeditCache {
    text: CString,
    dirty: bool,
}

/// Cached suggestion strip for FFI consumption.
#[derive(Default)]
struct SuggestionCache {
    texts: Vec<CString>,
    cursor: usize,
    dirty: bool,
    hide: bool,
}

/// Cached commit text for FFI consumption.
///
/// One key can commit more than once (previous letter, then a digit); the
/// texts are concatenated.
#[derive(Default)]
struct CommitCache {
    text: String,
    c_text: CString,
    dirty: bool,
}

/// Pending timer request: arm for `ms` milliseconds, or cancel when 0.
#[derive(Default)]
struct TimerCache {
    ms: u64,
    dirty: bool,
}

/// Cached mode indicator label.
#[derive(Default)]
struct LabelCache {
    text: CString,
    dirty: bool,
}

/// Opaque handle to an input engine instance
pub struct KeypadEngine {
    engine: InputMethodEngine,
    preedit: PreeditCache,
    suggestions: SuggestionCache,
    commit: CommitCache,
    timer: TimerCache,
    label: LabelCache,
}

impl KeypadEngine {
    fn new() -> Self {
        // Load user settings from config.toml, fall back to defaults
        let settings = Settings::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        });
        let engine = InputMethodEngine::from_settings(&settings).unwrap_or_else(|e| {
            tracing::warn!("Invalid language settings, using built-in English: {}", e);
            InputMethodEngine::with_config(settings.engine_config())
        });
        Self::with_engine(engine)
    }

    fn with_engine(engine: InputMethodEngine) -> Self {
        let label = LabelCache {
            text: CString::new(engine.mode_label()).unwrap_or_default(),
            dirty: true,
        };
        Self {
            engine,
            preedit: PreeditCache::default(),
            suggestions: SuggestionCache::default(),
            commit: CommitCache::default(),
            timer: TimerCache::default(),
            label,
        }
    }

    fn clear_flags(&mut self) {
        self.preedit.dirty = false;
        self.suggestions.dirty = false;
        self.suggestions.hide = false;
        self.commit.dirty = false;
        self.commit.text.clear();
        self.timer.dirty = false;
        self.label.dirty = false;
    }

    /// Process engine actions and cache results for FFI consumption.
    fn apply_actions(&mut self, actions: Vec<EngineAction>) {
        for action in actions {
            match action {
                EngineAction::UpdatePreedit(text) => {
                    self.preedit.text = CString::new(text).unwrap_or_default();
                    self.preedit.dirty = true;
                }
                EngineAction::ShowSuggestions(list) => {
                    self.suggestions.texts = list
                        .items()
                        .iter()
                        .map(|s| CString::new(s.as_str()).unwrap_or_default())
                        .collect();
                    self.suggestions.cursor = list.cursor();
                    self.suggestions.dirty = true;
                    self.suggestions.hide = false;
                }
                EngineAction::HideSuggestions => {
                    self.suggestions.texts.clear();
                    self.suggestions.cursor = 0;
                    self.suggestions.hide = true;
                    self.suggestions.dirty = true;
                }
                EngineAction::Commit(text) => {
                    self.commit.text.push_str(&text);
                    self.commit.c_text =
                        CString::new(self.commit.text.as_str()).unwrap_or_default();
                    self.commit.dirty = true;
                }
                EngineAction::UpdateModeLabel(text) => {
                    self.label.text = CString::new(text).unwrap_or_default();
                    self.label.dirty = true;
                }
                EngineAction::ArmTimer(ms) => {
                    self.timer.ms = ms;
                    self.timer.dirty = true;
                }
                EngineAction::CancelTimer => {
                    self.timer.ms = 0;
                    self.timer.dirty = true;
                }
            }
        }
    }
}
