//! Suggestion list management
//!
//! The host-side view of the candidates produced by an input mode: an owned
//! list plus the cursor the host advances on multi-tap repeats.

/// An ordered list of suggestions with a selection cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    /// All suggestions, first = default selection
    items: Vec<String>,
    /// Currently selected suggestion index
    cursor: usize,
}

impl SuggestionList {
    /// Create a new suggestion list with the cursor on the first item
    pub fn new(items: Vec<String>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Create a suggestion list from strings
    pub fn from_strings(strings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(strings.into_iter().map(Into::into).collect())
    }

    /// Get all suggestions
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the currently selected suggestion
    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    /// Move to the next suggestion, wrapping to the first
    pub fn move_next(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
        true
    }

    /// Move to the previous suggestion, wrapping to the last
    pub fn move_prev(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
        true
    }

    /// Select a suggestion by absolute index
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index < self.items.len() {
            self.cursor = index;
            self.selected()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
    }

    /// Replace the suggestions and move the cursor to the first one
    pub fn replace(&mut self, items: Vec<String>) {
        self.items = items;
        self.cursor = 0;
    }

    /// Replace the suggestions, keeping the cursor index when it still fits
    pub fn replace_keep_cursor(&mut self, items: Vec<String>) {
        let cursor = self.cursor;
        self.items = items;
        self.cursor = if self.items.is_empty() {
            0
        } else {
            cursor % self.items.len()
        };
    }

    /// Copy of this list with every item transformed, cursor preserved
    pub fn map_items(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            items: self.items.iter().map(|s| f(s)).collect(),
            cursor: self.cursor,
        }
    }
}
