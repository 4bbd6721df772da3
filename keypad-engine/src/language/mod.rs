//! Language profiles
//!
//! A language profile maps each digit key to its ordered letters and carries
//! the locale used for case conversion. Profiles are immutable; switching
//! language replaces the whole profile.

mod definition;
mod error;
mod locale;
mod profile;
mod registry;

pub use definition::{KeyLayout, KeyPreset, LanguageDefinition};
pub use error::{LanguageError, Result};
pub use locale::{CaseConverter, Locale, locale_case};
pub use profile::{LanguageProfile, Script};
pub use registry::LanguageRegistry;
