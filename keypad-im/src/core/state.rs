//! Composition phases
//!
//! A read-only view of where an input mode is in its composition.

use keypad_engine::Digit;

/// The current phase of an input mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No pending digit, no suggestions
    #[default]
    Idle,

    /// One digit pending, suggestions are its letters plus the digit itself
    Composing {
        /// The pending digit
        digit: Digit,
    },

    /// The special characters key is pending and cycling through punctuation groups
    SpecialChars {
        /// The pending digit (the language's special characters key)
        digit: Digit,
        /// Selected punctuation group, 1 or more
        group: usize,
    },
}

impl Phase {
    /// Check if the mode is idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the pending digit if any
    pub fn digit(&self) -> Option<Digit> {
        match self {
            Self::Idle => None,
            Self::Composing { digit } | Self::SpecialChars { digit, .. } => Some(*digit),
        }
    }
}
