//! Locale tags and locale-aware case conversion

use std::fmt;

use super::error::{LanguageError, Result};
use crate::text_case::TextCase;

/// Case conversion hook carried by a language profile.
///
/// Profiles default to [`locale_case`]; tests and hosts may inject their own.
pub type CaseConverter = fn(&str, &Locale, TextCase) -> String;

/// A language/country pair such as `en-US` or `bg-BG`.
///
/// Both parts may be empty (the root locale).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            country: country.into().to_ascii_uppercase(),
        }
    }

    /// Parse a tag like `en-US`, `en_US`, `he` or the empty string.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Self::default());
        }

        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(LanguageError::InvalidLocale(tag.to_string()));
        }

        let language_ok =
            (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
        let country_ok = country.is_empty()
            || (country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic()))
            || (country.len() == 3 && country.chars().all(|c| c.is_ascii_digit()));
        if !language_ok || !country_ok {
            return Err(LanguageError::InvalidLocale(tag.to_string()));
        }

        Ok(Self::new(language, country))
    }

    /// ISO 639 language code, lowercase (may be empty)
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 3166 country code, uppercase (may be empty)
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn to_upper(&self, text: &str) -> String {
        locale_case(text, self, TextCase::Upper)
    }

    pub fn to_lower(&self, text: &str) -> String {
        locale_case(text, self, TextCase::Lower)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.language)
        } else {
            write!(f, "{}-{}", self.language, self.country)
        }
    }
}

/// Default case conversion.
///
/// Turkish and Azerbaijani pair dotted and dotless i differently from the
/// Unicode default mapping; every other locale uses the default.
pub fn locale_case(text: &str, locale: &Locale, case: TextCase) -> String {
    let turkic = matches!(locale.language(), "tr" | "az");
    if !turkic {
        return match case {
            TextCase::Upper => text.to_uppercase(),
            TextCase::Lower => text.to_lowercase(),
        };
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match (case, c) {
            (TextCase::Upper, 'i') => out.push('İ'),
            (TextCase::Lower, 'I') => out.push('ı'),
            (TextCase::Lower, 'İ') => out.push('i'),
            (TextCase::Upper, c) => out.extend(c.to_uppercase()),
            (TextCase::Lower, c) => out.extend(c.to_lowercase()),
        }
    }
    out
}
