//! Format dispatch: raw input to finished `Document`.
//!
//! `DocumentParser` selects the pipeline for the declared format, runs
//! normalization (PDF text only) and structural extraction, then counts
//! words, detects language and infers metadata on the cleaned full text.
//! A call either returns a complete `Document` or a single `Error`.
//!
//! # Example
//!
//! ```
//! use docstruct::convert::DocumentParser;
//!
//! let parser = DocumentParser::new();
//! let doc = parser
//!     .parse(b"# Notes\n\n- milk\n- eggs\n", "notes.txt", "plain-text")
//!     .unwrap();
//! assert_eq!(doc.structure.lists[0].items, vec!["milk", "eggs"]);
//! ```

mod source;

pub use source::{MarkupSource, PassthroughMarkup, PassthroughPdfText, PdfTextSource};

use crate::detect::{detect_format_from_path, InputFormat};
use crate::error::{Error, Result};
use crate::model::{Document, PdfInfo, RawInput, StructuralModel};
use crate::parser::{
    MarkupStructureExtractor, MetadataInferencer, ParseOptions, PdfTextNormalizer,
    PlainTextStructureExtractor,
};
use crate::text::{LanguageDetector, TextCleaner, WordCounter};
use chrono::Utc;
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Text and structure produced by one format-specific pipeline.
struct Extraction {
    text: String,
    structure: StructuralModel,
    info: Option<PdfInfo>,
}

/// Selects the extraction pipeline by declared format and assembles documents.
///
/// A parser holds only immutable configuration and compiled patterns, so one
/// instance can serve concurrent calls.
pub struct DocumentParser {
    options: ParseOptions,
    cleaner: TextCleaner,
    counter: WordCounter,
    markup: MarkupStructureExtractor,
    plain: PlainTextStructureExtractor,
    pdf: PdfTextNormalizer,
    metadata: MetadataInferencer,
    markup_source: Arc<dyn MarkupSource>,
    pdf_source: Arc<dyn PdfTextSource>,
}

impl DocumentParser {
    /// Create a parser with default options and pass-through sources.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        let cleaner = TextCleaner::new(options.normalize_unicode);
        let detector = LanguageDetector::new(options.japanese_ratio_threshold);

        Self {
            cleaner: cleaner.clone(),
            counter: WordCounter::new(),
            markup: MarkupStructureExtractor::new(),
            plain: PlainTextStructureExtractor::new(options.min_paragraph_len),
            pdf: PdfTextNormalizer::new(options.header_footer_min_len, cleaner),
            metadata: MetadataInferencer::new(
                detector,
                options.title_max_chars,
                options.title_ellipsis.clone(),
            ),
            markup_source: Arc::new(PassthroughMarkup),
            pdf_source: Arc::new(PassthroughPdfText),
            options,
        }
    }

    /// Use a custom word-processor to markup converter.
    pub fn with_markup_source(mut self, source: Arc<dyn MarkupSource>) -> Self {
        self.markup_source = source;
        self
    }

    /// Use a custom PDF text extractor.
    pub fn with_pdf_source(mut self, source: Arc<dyn PdfTextSource>) -> Self {
        self.pdf_source = source;
        self
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse bytes with a declared format tag.
    ///
    /// Fails with `Error::UnsupportedFormat` naming `declared_format` if the tag
    /// is not recognized.
    pub fn parse(&self, bytes: &[u8], filename: &str, declared_format: &str) -> Result<Document> {
        let format: InputFormat = declared_format.parse()?;
        self.parse_bytes(bytes, filename, format, None)
    }

    /// Parse a typed raw input.
    pub fn parse_input(&self, input: RawInput) -> Result<Document> {
        self.parse_bytes(
            &input.bytes,
            &input.filename,
            input.format,
            input.pdf_info.as_ref(),
        )
    }

    /// Parse a file, detecting the format from its extension when not given.
    pub fn parse_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: Option<InputFormat>,
    ) -> Result<Document> {
        let path = path.as_ref();
        let format = match format {
            Some(format) => format,
            None => detect_format_from_path(path)?,
        };
        let bytes = std::fs::read(path)?;
        self.parse_bytes(&bytes, &file_name(path), format, None)
    }

    /// Parse a file asynchronously.
    #[cfg(feature = "async")]
    pub async fn parse_file_async<P: AsRef<Path>>(
        &self,
        path: P,
        format: Option<InputFormat>,
    ) -> Result<Document> {
        let path = path.as_ref();
        let format = match format {
            Some(format) => format,
            None => detect_format_from_path(path)?,
        };
        let bytes = tokio::fs::read(path).await?;
        self.parse_bytes(&bytes, &file_name(path), format, None)
    }

    /// Parse many independent inputs, in parallel unless the options say otherwise.
    ///
    /// Results are in input order; one failure does not affect the others.
    pub fn parse_many(&self, inputs: Vec<RawInput>) -> Vec<Result<Document>> {
        if self.options.parallel {
            inputs
                .into_par_iter()
                .map(|input| self.parse_input(input))
                .collect()
        } else {
            inputs
                .into_iter()
                .map(|input| self.parse_input(input))
                .collect()
        }
    }

    /// Parse bytes of a known format.
    pub fn parse_bytes(
        &self,
        bytes: &[u8],
        filename: &str,
        format: InputFormat,
        pdf_info: Option<&PdfInfo>,
    ) -> Result<Document> {
        log::debug!("Parsing {} ({}, {} bytes)", filename, format, bytes.len());

        let extraction = match format {
            InputFormat::WordMarkup => self.extract_markup(bytes)?,
            InputFormat::PdfText => self.extract_pdf(bytes, pdf_info)?,
            InputFormat::PlainText => self.extract_plain(bytes)?,
        };

        let text = self.cleaner.clean(&extraction.text);
        if text.is_empty() {
            return Err(Error::EmptyContent(format.to_string()));
        }

        let word_count = self.counter.count(&text);
        let metadata = self.metadata.infer(&text, extraction.info.as_ref());

        log::info!(
            "Parsed {}: {} words, {} headings, {} paragraphs, {} lists",
            filename,
            word_count,
            extraction.structure.headings.len(),
            extraction.structure.paragraphs.len(),
            extraction.structure.lists.len()
        );

        Ok(Document {
            text,
            original_filename: filename.to_string(),
            file_type: format,
            word_count,
            extracted_at: Utc::now(),
            structure: extraction.structure,
            metadata,
        })
    }

    fn extract_markup(&self, bytes: &[u8]) -> Result<Extraction> {
        let source = &self.markup_source;
        let markup = source
            .to_markup(bytes)
            .map_err(|e| {
                log::warn!("Markup source {} failed: {}", source.name(), e);
                Error::conversion(source.name(), e)
            })?;
        let markup = self.cleaner.normalize(&markup);

        Ok(Extraction {
            text: self.markup.to_text(&markup),
            structure: self.markup.extract(&markup),
            info: None,
        })
    }

    fn extract_pdf(&self, bytes: &[u8], supplied: Option<&PdfInfo>) -> Result<Extraction> {
        let source = &self.pdf_source;
        let extracted = source
            .extract(bytes)
            .map_err(|e| {
                log::warn!("PDF text source {} failed: {}", source.name(), e);
                Error::conversion(source.name(), e)
            })?;

        let info = match supplied {
            Some(info) => info.clone().or(extracted.info),
            None => extracted.info,
        };
        let text = self.pdf.normalize(&extracted.text);

        Ok(Extraction {
            structure: self.plain.extract(&text),
            text,
            info: Some(info),
        })
    }

    fn extract_plain(&self, bytes: &[u8]) -> Result<Extraction> {
        let text = source::decode_utf8(bytes)
            .map_err(|e| Error::conversion("plain-text", format!("invalid UTF-8: {}", e)))?;
        let text = self.cleaner.normalize(text);

        Ok(Extraction {
            structure: self.plain.extract(&text),
            text: text.into_owned(),
            info: None,
        })
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_unsupported_format_names_tag() {
        let parser = DocumentParser::new();
        let err = parser.parse(b"hello", "a.rtf", "rich-text").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref tag) if tag == "rich-text"));
    }

    #[test]
    fn test_empty_content() {
        let parser = DocumentParser::new();
        for format in InputFormat::ALL {
            let err = parser.parse_bytes(b"  \n\n ", "blank", format, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyContent, "format {}", format);
        }
        let err = parser.parse(b"<p> </p>", "blank.docx", "word-markup").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyContent);
    }

    #[test]
    fn test_invalid_utf8_is_conversion_failure() {
        let parser = DocumentParser::new();
        let err = parser.parse(&[0xFF, 0xFE, 0x41], "x.txt", "plain-text").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConversionFailure);
    }

    #[test]
    fn test_plain_text_document() {
        let parser = DocumentParser::new();
        let doc = parser
            .parse(b"# Weekly Update\n\nShipping went well this week.\n", "update.txt", "plain-text")
            .unwrap();

        assert_eq!(doc.text, "# Weekly Update\n\nShipping went well this week.");
        assert_eq!(doc.original_filename, "update.txt");
        assert_eq!(doc.file_type, InputFormat::PlainText);
        assert_eq!(doc.word_count, 7);
        assert_eq!(doc.title(), Some("Weekly Update"));
        assert_eq!(doc.language(), Some("en"));
        assert_eq!(doc.metadata.page_count, None);
    }

    #[test]
    fn test_word_markup_document() {
        let parser = DocumentParser::new();
        let markup = "<h1>議事録</h1><p>本日の会議では予算について話し合った。</p><ul><li>予算</li><li>日程</li></ul>";
        let doc = parser.parse(markup.as_bytes(), "minutes.docx", "word-markup").unwrap();

        assert_eq!(doc.title(), Some("議事録"));
        assert_eq!(doc.language(), Some("ja"));
        assert_eq!(doc.structure.headings.len(), 1);
        assert_eq!(doc.structure.lists[0].items, vec!["予算", "日程"]);
        assert!(!doc.text.contains('<'));
        assert_eq!(doc.metadata.author, None);
    }

    #[test]
    fn test_pdf_text_with_supplied_info() {
        let parser = DocumentParser::new();
        let info = PdfInfo::new().with_title("Board Minutes").with_author("Secretary");
        let input = RawInput::new(
            "Quarterly results were strong overall.\n1\n",
            "minutes.pdf",
            InputFormat::PdfText,
        )
        .with_pdf_info(info);
        let doc = parser.parse_input(input).unwrap();

        assert_eq!(doc.text, "Quarterly results were strong overall.");
        assert_eq!(doc.title(), Some("Board Minutes"));
        assert_eq!(doc.metadata.author.as_deref(), Some("Secretary"));
    }

    #[test]
    fn test_custom_options_flow_through() {
        let options = ParseOptions::new()
            .with_min_paragraph_len(3)
            .with_title_max_chars(5)
            .with_title_ellipsis("…");
        let parser = DocumentParser::with_options(options);
        let doc = parser.parse(b"Longer title line\nabcd", "t.txt", "plain-text").unwrap();

        assert_eq!(doc.title(), Some("Longe…"));
        assert_eq!(doc.structure.paragraphs, vec!["Longer title line", "abcd"]);
    }

    #[test]
    fn test_parse_many_preserves_order() {
        let parser = DocumentParser::new();
        let inputs = vec![
            RawInput::new("first document body", "1.txt", InputFormat::PlainText),
            RawInput::new("   ", "2.txt", InputFormat::PlainText),
            RawInput::new("third document body", "3.txt", InputFormat::PlainText),
        ];
        let results = parser.parse_many(inputs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().original_filename, "1.txt");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().original_filename, "3.txt");
    }
}
