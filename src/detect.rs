//! Input format tags and detection.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// The declared format of a raw input, selecting the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// HTML-like markup produced from a word-processor document
    WordMarkup,
    /// Text produced by a PDF text extractor
    PdfText,
    /// Raw plain text
    PlainText,
}

impl InputFormat {
    /// All supported formats.
    pub const ALL: [InputFormat; 3] = [
        InputFormat::WordMarkup,
        InputFormat::PdfText,
        InputFormat::PlainText,
    ];

    /// Canonical tag of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::WordMarkup => "word-markup",
            InputFormat::PdfText => "pdf-text",
            InputFormat::PlainText => "plain-text",
        }
    }

    /// Map a file extension (without the leading dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "docx" | "doc" | "html" | "htm" => Some(InputFormat::WordMarkup),
            "pdf" => Some(InputFormat::PdfText),
            "txt" | "text" | "md" => Some(InputFormat::PlainText),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    /// Parse a canonical tag or one of the MIME types used by upload front-ends.
    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_lowercase().as_str() {
            "word-markup"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "application/msword" => Ok(InputFormat::WordMarkup),
            "pdf-text" | "application/pdf" => Ok(InputFormat::PdfText),
            "plain-text" | "text/plain" => Ok(InputFormat::PlainText),
            _ => Err(Error::UnsupportedFormat(tag.to_string())),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// ZIP local file header, the container of .docx files
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// OLE2 compound file header, the container of legacy .doc files
const OLE_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";

/// Check if bytes are a binary PDF rather than extracted text.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Check if bytes are a binary word-processor container rather than markup.
pub fn is_word_container_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC) || data.starts_with(OLE_MAGIC)
}

/// Detect the input format from a file path's extension.
///
/// # Returns
/// * `Ok(InputFormat)` if the extension is known
/// * `Err(Error::UnsupportedFormat)` naming the extension (or the path if it has none)
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

    InputFormat::from_extension(ext).ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tags() {
        for format in InputFormat::ALL {
            assert_eq!(format.as_str().parse::<InputFormat>().unwrap(), format);
        }
        assert_eq!("PDF-Text".parse::<InputFormat>().unwrap(), InputFormat::PdfText);
    }

    #[test]
    fn test_parse_mime_types() {
        assert_eq!(
            "application/msword".parse::<InputFormat>().unwrap(),
            InputFormat::WordMarkup
        );
        assert_eq!(
            "application/pdf".parse::<InputFormat>().unwrap(),
            InputFormat::PdfText
        );
        assert_eq!(
            "text/plain".parse::<InputFormat>().unwrap(),
            InputFormat::PlainText
        );
    }

    #[test]
    fn test_unsupported_tag_is_named() {
        let result = "image/png".parse::<InputFormat>();
        match result {
            Err(Error::UnsupportedFormat(tag)) => assert_eq!(tag, "image/png"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_detect_from_path() {
        assert_eq!(
            detect_format_from_path("report.DOCX").unwrap(),
            InputFormat::WordMarkup
        );
        assert_eq!(
            detect_format_from_path("/tmp/scan.pdf").unwrap(),
            InputFormat::PdfText
        );
        assert_eq!(
            detect_format_from_path("notes.txt").unwrap(),
            InputFormat::PlainText
        );
        assert!(matches!(
            detect_format_from_path("archive.zip"),
            Err(Error::UnsupportedFormat(ext)) if ext == "zip"
        ));
        assert!(detect_format_from_path("README").is_err());
    }

    #[test]
    fn test_binary_magic() {
        assert!(is_pdf_bytes(b"%PDF-1.7\n%test"));
        assert!(!is_pdf_bytes(b"Extracted text"));
        assert!(is_word_container_bytes(b"PK\x03\x04\x14\x00"));
        assert!(!is_word_container_bytes(b"<p>markup</p>"));
        assert!(!is_word_container_bytes(b""));
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&InputFormat::PdfText).unwrap();
        assert_eq!(json, "\"pdf-text\"");
    }
}
