//! Immutable per-language query surface

use serde::{Deserialize, Serialize};

use super::locale::{CaseConverter, Locale, locale_case};
use crate::digit::Digit;
use crate::text_case::TextCase;

/// Writing system of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Hebrew,
    Arabic,
    Other,
}

impl Script {
    /// Scripts shared by many languages, where the mode label needs a
    /// country or language suffix to tell enabled languages apart.
    pub fn is_shared_alphabet(self) -> bool {
        matches!(self, Script::Latin | Script::Cyrillic)
    }
}

/// A validated language: key layout, digit labels, locale and case support.
///
/// Build one from a [`LanguageDefinition`](super::LanguageDefinition).
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) locale: Locale,
    pub(super) abc_string: String,
    pub(super) script: Script,
    pub(super) has_upper_case: bool,
    /// Letters per key; always 10 entries, each possibly empty
    pub(super) keys: Vec<Vec<String>>,
    /// Digit fallback label per key; always 10 entries
    pub(super) digits: Vec<String>,
    pub(super) special_chars_key: Digit,
    /// Extra punctuation groups for the special key (group 1 onwards)
    pub(super) special_char_groups: Vec<Vec<String>>,
    pub(super) case_converter: CaseConverter,
}

impl LanguageProfile {
    /// Short identifier, e.g. `en`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, e.g. `English`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Mode label stem, e.g. `abc` or `абв`
    pub fn abc_string(&self) -> &str {
        &self.abc_string
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn has_upper_case(&self) -> bool {
        self.has_upper_case
    }

    /// Letters assigned to `key`, in cycle order. May be empty.
    pub fn key_letters(&self, key: Digit) -> &[String] {
        &self.keys[key.index()]
    }

    /// The candidate that stands for the digit itself.
    pub fn key_number(&self, key: Digit) -> String {
        self.digits[key.index()].clone()
    }

    pub fn special_chars_key(&self) -> Digit {
        self.special_chars_key
    }

    /// Extra punctuation groups of the special key, group 1 onwards
    pub fn special_char_groups(&self) -> &[Vec<String>] {
        &self.special_char_groups
    }

    /// Number of special character groups, counting the key's own letters as group 0.
    pub fn special_group_count(&self) -> usize {
        1 + self.special_char_groups.len()
    }

    /// Characters of a special group. Group 0 is the special key's own letters.
    pub fn special_chars(&self, group: usize) -> &[String] {
        match group {
            0 => self.key_letters(self.special_chars_key),
            n => self
                .special_char_groups
                .get(n - 1)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }

    /// Convert `text` to the given case using this language's locale.
    pub fn change_case(&self, text: &str, case: TextCase) -> String {
        (self.case_converter)(text, &self.locale, case)
    }

    pub fn to_upper(&self, text: &str) -> String {
        self.change_case(text, TextCase::Upper)
    }

    pub fn to_lower(&self, text: &str) -> String {
        self.change_case(text, TextCase::Lower)
    }

    /// Replace the case conversion function.
    pub fn with_case_converter(mut self, converter: CaseConverter) -> Self {
        self.case_converter = converter;
        self
    }

    pub(super) fn default_case_converter() -> CaseConverter {
        locale_case
    }
}
