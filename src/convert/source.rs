//! Upstream collaborators that turn binary documents into text.
//!
//! Binary decoding is out of scope for this crate. Callers that hold a
//! `.docx` or a binary PDF plug in a `MarkupSource` or `PdfTextSource`;
//! the pass-through defaults expect the bytes to be converted already.

use crate::detect::{is_pdf_bytes, is_word_container_bytes};
use crate::error::BoxError;
use crate::model::{ExtractedPdf, PdfInfo};

/// Produces HTML-like markup from word-processor bytes.
pub trait MarkupSource: Send + Sync {
    /// Name used in error messages and logs.
    fn name(&self) -> &str;

    /// Convert input bytes to markup.
    fn to_markup(&self, bytes: &[u8]) -> Result<String, BoxError>;
}

/// Produces document text and an info dictionary from PDF bytes.
pub trait PdfTextSource: Send + Sync {
    /// Name used in error messages and logs.
    fn name(&self) -> &str;

    /// Extract text and info from input bytes.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedPdf, BoxError>;
}

/// Decode UTF-8 text, dropping a leading byte-order mark.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Result<&str, std::str::Utf8Error> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.strip_prefix('\u{FEFF}').unwrap_or(text))
}

/// Treats the input bytes as UTF-8 markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughMarkup;

impl MarkupSource for PassthroughMarkup {
    fn name(&self) -> &str {
        "markup"
    }

    fn to_markup(&self, bytes: &[u8]) -> Result<String, BoxError> {
        if is_word_container_bytes(bytes) {
            return Err("binary word-processor file; convert it to markup first".into());
        }
        Ok(decode_utf8(bytes)?.to_string())
    }
}

/// Treats the input bytes as UTF-8 text already extracted from a PDF.
///
/// Form feeds separate pages; when present, the page count is the number of
/// form-feed separated pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughPdfText;

impl PdfTextSource for PassthroughPdfText {
    fn name(&self) -> &str {
        "pdf-text"
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedPdf, BoxError> {
        if is_pdf_bytes(bytes) {
            return Err("binary PDF file; extract its text first".into());
        }
        let text = decode_utf8(bytes)?;

        let mut info = PdfInfo::default();
        if text.contains('\u{000C}') {
            let pages = text
                .trim_end_matches(['\u{000C}', '\n', '\r'])
                .split('\u{000C}')
                .count();
            info.page_count = Some(pages as u32);
        }

        Ok(ExtractedPdf::new(text).with_info(info))
    }
}
