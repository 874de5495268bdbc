//! Whitespace and newline normalization.

use regex::{Captures, Regex};
use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Collapses whitespace runs and excess blank lines.
///
/// A whitespace run without a newline becomes one space, a run with a single
/// newline becomes `\n`, and a run with two or more newlines becomes `\n\n`.
/// The result is trimmed. Applying `clean` twice yields the same text as once.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    whitespace: Regex,
    normalize_unicode: bool,
}

impl TextCleaner {
    /// Create a cleaner. With `normalize_unicode`, text is first converted to NFC.
    pub fn new(normalize_unicode: bool) -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("valid whitespace regex"),
            normalize_unicode,
        }
    }

    /// Apply Unicode NFC normalization if enabled, leaving whitespace alone.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.normalize_unicode || is_nfc_quick(text.chars()) == IsNormalized::Yes {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.nfc().collect())
    }

    /// Clean text.
    pub fn clean(&self, text: &str) -> String {
        let text = self.normalize(text);
        let collapsed = self.whitespace.replace_all(&text, |caps: &Captures| {
            match caps[0].matches('\n').count() {
                0 => " ",
                1 => "\n",
                _ => "\n\n",
            }
        });

        collapsed.trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(true)
    }
}
