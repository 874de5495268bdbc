//! Parsing options and configuration.

use serde::{Deserialize, Serialize};

/// Options for structure extraction.
///
/// All heuristic thresholds live here. Defaults reproduce the standard
/// behavior; every field can be overridden from a JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Plain-text lines must be strictly longer than this (in characters) to become paragraphs
    pub min_paragraph_len: usize,

    /// Japanese-script share above which the language is reported as "ja"
    pub japanese_ratio_threshold: f64,

    /// Inferred titles longer than this (in characters) are truncated
    pub title_max_chars: usize,

    /// Marker appended to truncated titles
    pub title_ellipsis: String,

    /// Minimum line length (in characters) for header/footer de-duplication in PDF text
    pub header_footer_min_len: usize,

    /// Normalize text to Unicode NFC before cleaning
    pub normalize_unicode: bool,

    /// Use parallel processing for batch parsing
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph length threshold.
    pub fn with_min_paragraph_len(mut self, len: usize) -> Self {
        self.min_paragraph_len = len;
        self
    }

    /// Set the Japanese-script ratio threshold.
    pub fn with_japanese_ratio_threshold(mut self, threshold: f64) -> Self {
        self.japanese_ratio_threshold = threshold;
        self
    }

    /// Set the title truncation length.
    pub fn with_title_max_chars(mut self, max: usize) -> Self {
        self.title_max_chars = max;
        self
    }

    /// Set the truncation marker for titles.
    pub fn with_title_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.title_ellipsis = ellipsis.into();
        self
    }

    /// Set the minimum header/footer line length.
    pub fn with_header_footer_min_len(mut self, len: usize) -> Self {
        self.header_footer_min_len = len;
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_paragraph_len: 10,
            japanese_ratio_threshold: 0.10,
            title_max_chars: 100,
            title_ellipsis: "...".to_string(),
            header_footer_min_len: 10,
            normalize_unicode: true,
            parallel: true,
        }
    }
}
