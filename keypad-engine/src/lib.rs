pub mod digit;
pub mod language;
pub mod special;
pub mod text_case;

pub use digit::Digit;
pub use language::{
    CaseConverter, LanguageDefinition, LanguageError, LanguageProfile, LanguageRegistry, Locale,
    Script, locale_case,
};
pub use special::SpecialCharCycler;
pub use text_case::TextCase;
