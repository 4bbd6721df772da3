//! Digit keys of a numeric keypad

use std::fmt;

use crate::language::LanguageError;

/// One of the ten digit keys (0-9).
///
/// Values outside `0..=9` are rejected at construction, so everything
/// downstream can index key tables without bounds checks failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const ONE: Digit = Digit(1);

    /// All keys in keypad order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn new(value: u8) -> Result<Self, LanguageError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(LanguageError::InvalidDigit(u32::from(value)))
        }
    }

    /// Parse an ASCII digit character.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = LanguageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for Digit {
    type Error = LanguageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 9)
            .map(Self)
            .ok_or(LanguageError::InvalidDigit(value))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
