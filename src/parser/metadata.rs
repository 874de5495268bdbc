//! Title, language and pass-through metadata.

use crate::model::{Metadata, PdfInfo};
use crate::text::LanguageDetector;
use regex::Regex;

/// Assembles `Metadata` from cleaned text and an optional PDF info dictionary.
#[derive(Debug, Clone)]
pub struct MetadataInferencer {
    heading_marker: Regex,
    detector: LanguageDetector,
    title_max_chars: usize,
    title_ellipsis: String,
}

impl MetadataInferencer {
    /// Create an inferencer.
    pub fn new(
        detector: LanguageDetector,
        title_max_chars: usize,
        title_ellipsis: impl Into<String>,
    ) -> Self {
        Self {
            heading_marker: Regex::new(r"^#+\s*").expect("valid heading marker regex"),
            detector,
            title_max_chars,
            title_ellipsis: title_ellipsis.into(),
        }
    }

    /// Build metadata. Supplied info fields win; the title falls back to the text.
    pub fn infer(&self, text: &str, info: Option<&PdfInfo>) -> Metadata {
        let supplied_title = info
            .and_then(|i| i.title.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Metadata {
            title: supplied_title.or_else(|| self.infer_title(text)),
            author: info.and_then(|i| i.author.clone()),
            created_date: info.and_then(|i| i.creation_date.clone()),
            modified_date: info.and_then(|i| i.mod_date.clone()),
            page_count: info.and_then(|i| i.page_count),
            language: Some(self.detector.detect(text).code().to_string()),
        }
    }

    /// First non-blank line without heading markers, truncated.
    pub fn infer_title(&self, text: &str) -> Option<String> {
        let first = text.lines().map(str::trim).find(|l| !l.is_empty())?;
        let title = self.heading_marker.replace(first, "");
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        if title.chars().count() > self.title_max_chars {
            let mut truncated: String = title.chars().take(self.title_max_chars).collect();
            truncated.push_str(&self.title_ellipsis);
            Some(truncated)
        } else {
            Some(title.to_string())
        }
    }
}

impl Default for MetadataInferencer {
    fn default() -> Self {
        Self::new(LanguageDetector::default(), 100, "...")
    }
}
