//! Script-ratio language detection.

use serde::{Deserialize, Serialize};

/// Languages the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Japanese
    #[serde(rename = "ja")]
    Japanese,
    /// English (the fallback for everything else)
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO-639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Check for hiragana, katakana, or CJK unified ideographs.
pub fn is_japanese_char(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
}

/// Coarse language detector based on the share of Japanese script.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector {
    threshold: f64,
}

impl LanguageDetector {
    /// Create a detector reporting Japanese above `threshold` (share of non-whitespace chars).
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Ratio of Japanese-script characters to non-whitespace characters.
    pub fn japanese_ratio(&self, text: &str) -> f64 {
        let mut japanese = 0usize;
        let mut total = 0usize;

        for c in text.chars().filter(|c| !c.is_whitespace()) {
            total += 1;
            if is_japanese_char(c) {
                japanese += 1;
            }
        }

        if total == 0 {
            return 0.0;
        }
        japanese as f64 / total as f64
    }

    /// Detect the language of text.
    pub fn detect(&self, text: &str) -> Language {
        if self.japanese_ratio(text) > self.threshold {
            Language::Japanese
        } else {
            Language::English
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(0.10)
    }
}
