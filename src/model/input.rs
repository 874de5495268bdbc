//! Raw inputs and collaborator outputs.

use crate::detect::InputFormat;
use serde::{Deserialize, Serialize};

/// One raw input: bytes, declared format, original filename.
#[derive(Debug, Clone)]
pub struct RawInput {
    /// Byte content (markup, extracted PDF text, or plain text)
    pub bytes: Vec<u8>,

    /// Original filename as uploaded
    pub filename: String,

    /// Declared format
    pub format: InputFormat,

    /// Document-info dictionary from an upstream PDF extractor
    pub pdf_info: Option<PdfInfo>,
}

impl RawInput {
    /// Create a new raw input.
    pub fn new(bytes: impl Into<Vec<u8>>, filename: impl Into<String>, format: InputFormat) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
            format,
            pdf_info: None,
        }
    }

    /// Attach a PDF info dictionary.
    pub fn with_pdf_info(mut self, info: PdfInfo) -> Self {
        self.pdf_info = Some(info);
        self
    }
}

/// PDF document-info dictionary as reported by a text extractor.
///
/// Accepts both camelCase keys and the PDF `Info` dictionary spelling
/// (`Title`, `Author`, `CreationDate`, `ModDate`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfInfo {
    /// Document title
    #[serde(alias = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author
    #[serde(alias = "Author", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Creation date, verbatim
    #[serde(alias = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    /// Modification date, verbatim
    #[serde(alias = "ModDate", skip_serializing_if = "Option::is_none")]
    pub mod_date: Option<String>,

    /// Number of pages
    #[serde(alias = "numpages", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

impl PdfInfo {
    /// Create an empty info dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the page count.
    pub fn with_page_count(mut self, pages: u32) -> Self {
        self.page_count = Some(pages);
        self
    }

    /// Fill fields missing here from `fallback`.
    pub fn or(self, fallback: PdfInfo) -> PdfInfo {
        PdfInfo {
            title: self.title.or(fallback.title),
            author: self.author.or(fallback.author),
            creation_date: self.creation_date.or(fallback.creation_date),
            mod_date: self.mod_date.or(fallback.mod_date),
            page_count: self.page_count.or(fallback.page_count),
        }
    }
}

/// Text and info produced by a PDF text extractor.
#[derive(Debug, Clone, Default)]
pub struct ExtractedPdf {
    /// Extracted text of the whole document
    pub text: String,

    /// Info dictionary
    pub info: PdfInfo,
}

impl ExtractedPdf {
    /// Create from text with an empty info dictionary.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            info: PdfInfo::default(),
        }
    }

    /// Attach an info dictionary.
    pub fn with_info(mut self, info: PdfInfo) -> Self {
        self.info = info;
        self
    }
}
