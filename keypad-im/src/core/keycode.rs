//! Key code definitions and key event handling

use std::fmt;

use keypad_engine::Digit;

/// Key code values accepted at the FFI boundary.
///
/// Digits and `*`/`#` use their ASCII values; the rest follow XKB keysyms.
pub struct KeyCode;

impl KeyCode {
    pub const KEY_0: u32 = 0x0030;
    pub const KEY_9: u32 = 0x0039;
    pub const STAR: u32 = 0x002a;
    pub const POUND: u32 = 0x0023;
    pub const BACKSPACE: u32 = 0xff08;
    pub const TAB: u32 = 0xff09;
    pub const RETURN: u32 = 0xff0d;
    pub const ESCAPE: u32 = 0xff1b;
}

/// A keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// One of the ten digit keys
    Digit(Digit),
    /// Erase: drops the pending composition, or the previous character
    Backspace,
    /// Accept the selected suggestion
    Ok,
    /// Next special characters on the punctuation key, otherwise next text case
    Star,
    /// Next input mode
    Pound,
    /// Next enabled language
    NextLanguage,
    /// Drop the pending composition
    Cancel,
}

impl Key {
    /// Decode a key code. Returns `None` for keys the engine does not handle.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            KeyCode::KEY_0..=KeyCode::KEY_9 => {
                Digit::try_from(code - KeyCode::KEY_0).ok().map(Key::Digit)
            }
            KeyCode::STAR => Some(Key::Star),
            KeyCode::POUND => Some(Key::Pound),
            KeyCode::BACKSPACE => Some(Key::Backspace),
            KeyCode::RETURN => Some(Key::Ok),
            KeyCode::TAB => Some(Key::NextLanguage),
            KeyCode::ESCAPE => Some(Key::Cancel),
            _ => None,
        }
    }

    /// Get the digit if this is a digit key
    pub fn digit(&self) -> Option<Digit> {
        match self {
            Key::Digit(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d),
            Key::Backspace => write!(f, "Backspace"),
            Key::Ok => write!(f, "Ok"),
            Key::Star => write!(f, "*"),
            Key::Pound => write!(f, "#"),
            Key::NextLanguage => write!(f, "NextLanguage"),
            Key::Cancel => write!(f, "Cancel"),
        }
    }
}

/// A key event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key
    pub key: Key,
    /// Whether the key was held down (long press)
    pub hold: bool,
}

impl KeyEvent {
    pub fn new(key: Key, hold: bool) -> Self {
        Self { key, hold }
    }

    /// Create a short press event
    pub fn press(key: Key) -> Self {
        Self::new(key, false)
    }

    /// Create a long press event
    pub fn hold(key: Key) -> Self {
        Self::new(key, true)
    }

    /// Short press of a digit key
    pub fn digit(digit: Digit) -> Self {
        Self::press(Key::Digit(digit))
    }
}
