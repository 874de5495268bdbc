//! Normalization of PDF-extracted text before structural parsing.

use crate::text::TextCleaner;
use regex::Regex;
use std::collections::HashSet;

/// Strips page numbers and repeated header/footer lines from PDF text.
///
/// Page-number lines are bare numbers, optionally decorated (`- 3 -`,
/// `Page 3`, `3 / 12`, `3 of 12`). Any line of at least the configured
/// length that occurs more than once keeps only its first occurrence. Short
/// or varying headers and footers are not caught. Form feeds are treated as
/// page breaks. The result is cleaned like any other text.
#[derive(Debug, Clone)]
pub struct PdfTextNormalizer {
    page_number: Regex,
    min_repeat_len: usize,
    cleaner: TextCleaner,
}

impl PdfTextNormalizer {
    /// Create a normalizer treating lines of `min_repeat_len` chars or more as header/footer candidates.
    pub fn new(min_repeat_len: usize, cleaner: TextCleaner) -> Self {
        Self {
            page_number: Regex::new(
                r"(?i)^(?:page\s+)?[-–—]?\s*\d+\s*(?:(?:/|of)\s*\d+\s*)?[-–—]?$",
            )
            .expect("valid page number regex"),
            min_repeat_len,
            cleaner,
        }
    }

    /// Normalize extracted text.
    pub fn normalize(&self, text: &str) -> String {
        let paged = text.replace('\u{000C}', "\n\n");
        let mut seen: HashSet<&str> = HashSet::new();
        let mut kept: Vec<&str> = Vec::new();
        let mut page_numbers = 0usize;
        let mut repeats = 0usize;

        for raw in paged.lines() {
            let line = raw.trim();

            if self.page_number.is_match(line) {
                page_numbers += 1;
                continue;
            }

            if line.chars().count() >= self.min_repeat_len && !seen.insert(line) {
                repeats += 1;
                continue;
            }

            kept.push(raw);
        }

        log::debug!(
            "PDF text: removed {} page-number lines and {} repeated lines",
            page_numbers,
            repeats
        );

        self.cleaner.clean(&kept.join("\n"))
    }
}

impl Default for PdfTextNormalizer {
    fn default() -> Self {
        Self::new(10, TextCleaner::default())
    }
}
