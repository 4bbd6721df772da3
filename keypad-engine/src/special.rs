//! Special character cycling for the punctuation key

use crate::language::LanguageProfile;

/// Cursor over the special character groups of a language.
///
/// Group 0 is the special key's own letters; groups 1.. are the extra
/// punctuation sets. Advancing past the last group wraps back to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialCharCycler {
    group: usize,
}

impl SpecialCharCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected group
    pub fn group(&self) -> usize {
        self.group
    }

    pub fn reset(&mut self) {
        self.group = 0;
    }

    /// Advance to the next group and return its characters.
    ///
    /// Returns `None` (and stays on group 0) when the language has no extra groups.
    pub fn next(&mut self, profile: &LanguageProfile) -> Option<Vec<String>> {
        let count = profile.special_group_count();
        if count <= 1 {
            self.group = 0;
            return None;
        }
        self.group = (self.group + 1) % count;
        Some(profile.special_chars(self.group).to_vec())
    }
}
