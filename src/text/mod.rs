//! Script-aware text utilities shared by every extraction pipeline.

mod cleanup;
mod count;
mod language;

pub use cleanup::TextCleaner;
pub use count::{WordCount, WordCounter};
pub use language::{is_japanese_char, Language, LanguageDetector};
