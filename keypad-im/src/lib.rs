//! keypad-im: multi-tap text entry for numeric keypads
//!
//! This crate turns digit key presses into committed text. Each digit key
//! cycles through the letters of the active language (see `keypad-engine`);
//! a pause, a different key or an explicit accept commits the selection.

pub mod config;
pub mod core;
pub mod ffi;

pub use crate::core::engine::{EngineAction, EngineConfig, EngineResult, InputMethodEngine};
pub use crate::core::keycode::{Key, KeyCode, KeyEvent};
pub use crate::core::mode::{InputMode, ModeConfig, ModeError, ModeId};
pub use crate::core::state::Phase;
pub use crate::core::suggestion::SuggestionList;
