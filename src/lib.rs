//! # docstruct
//!
//! Document structure extraction for Rust.
//!
//! This library converts word-processor markup, PDF-extracted text, and plain
//! text into one normalized model: ordered headings, paragraphs and lists,
//! plus inferred metadata (title, language, word count).
//!
//! ## Quick Start
//!
//! ```
//! use docstruct::parse;
//!
//! fn main() -> docstruct::Result<()> {
//!     let doc = parse(b"# Title\n\n- item1\n- item2\n", "notes.txt", "plain-text")?;
//!
//!     assert_eq!(doc.structure.headings[0].text, "Title");
//!     assert_eq!(doc.structure.lists[0].items, vec!["item1", "item2"]);
//!     assert_eq!(doc.metadata.language.as_deref(), Some("en"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Three input pipelines**: word markup, PDF text, plain text
//! - **Heuristic structure**: headings, paragraphs, bullet and numbered lists
//! - **PDF cleanup**: page numbers and repeated headers/footers removed
//! - **CJK support**: mixed-script word counts and Japanese detection
//! - **Pluggable converters**: bring your own `.docx` or PDF decoder
//! - **Parallel batches**: Uses Rayon for many independent documents

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use convert::{DocumentParser, MarkupSource, PassthroughMarkup, PassthroughPdfText, PdfTextSource};
pub use detect::{detect_format_from_path, InputFormat};
pub use error::{Error, ErrorKind, ParseFailure, Result};
pub use model::{
    Block, Document, ExtractedPdf, Heading, ListBlock, ListKind, Metadata, PdfInfo, RawInput,
    StructuralModel,
};
pub use parser::ParseOptions;
pub use render::JsonFormat;
pub use text::{Language, LanguageDetector, TextCleaner, WordCounter};

use std::path::Path;
use std::sync::Arc;

/// Parse bytes with a declared format tag using default options.
///
/// # Arguments
///
/// * `bytes` - Markup, extracted PDF text, or plain text
/// * `filename` - Original filename, carried into the document
/// * `declared_format` - `word-markup`, `pdf-text`, or `plain-text` (MIME types also accepted)
///
/// # Example
///
/// ```
/// use docstruct::{parse, Error};
///
/// let result = parse(b"data", "image.png", "image/png");
/// assert!(matches!(result, Err(Error::UnsupportedFormat(tag)) if tag == "image/png"));
/// ```
pub fn parse(bytes: &[u8], filename: &str, declared_format: &str) -> Result<Document> {
    DocumentParser::new().parse(bytes, filename, declared_format)
}

/// Parse a typed raw input using default options.
pub fn parse_input(input: RawInput) -> Result<Document> {
    DocumentParser::new().parse_input(input)
}

/// Parse a file, detecting the format from its extension.
///
/// # Example
///
/// ```no_run
/// use docstruct::parse_file;
///
/// let doc = parse_file("report.txt").unwrap();
/// println!("{} words", doc.word_count);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocumentParser::new().parse_file(path, None)
}

/// Parse a file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DocumentParser::with_options(options).parse_file(path, None)
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    render::to_json(doc, format)
}

/// Builder for configuring and running extraction.
///
/// # Example
///
/// ```
/// use docstruct::DocStruct;
///
/// let json = DocStruct::new()
///     .with_min_paragraph_len(5)
///     .sequential()
///     .parse_bytes(b"Short para\n", "a.txt", "plain-text")?
///     .to_json(docstruct::JsonFormat::Compact)?;
/// assert!(json.contains("\"paragraphs\":[\"Short para\"]"));
/// # Ok::<(), docstruct::Error>(())
/// ```
pub struct DocStruct {
    options: ParseOptions,
    markup_source: Option<Arc<dyn MarkupSource>>,
    pdf_source: Option<Arc<dyn PdfTextSource>>,
}

impl DocStruct {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
            markup_source: None,
            pdf_source: None,
        }
    }

    /// Replace all options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the paragraph length threshold.
    pub fn with_min_paragraph_len(mut self, len: usize) -> Self {
        self.options = self.options.with_min_paragraph_len(len);
        self
    }

    /// Set the Japanese-script ratio threshold.
    pub fn with_japanese_ratio_threshold(mut self, threshold: f64) -> Self {
        self.options = self.options.with_japanese_ratio_threshold(threshold);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Use a custom markup converter.
    pub fn with_markup_source(mut self, source: Arc<dyn MarkupSource>) -> Self {
        self.markup_source = Some(source);
        self
    }

    /// Use a custom PDF text extractor.
    pub fn with_pdf_source(mut self, source: Arc<dyn PdfTextSource>) -> Self {
        self.pdf_source = Some(source);
        self
    }

    /// Build the configured parser.
    pub fn build(self) -> DocumentParser {
        let mut parser = DocumentParser::with_options(self.options);
        if let Some(source) = self.markup_source {
            parser = parser.with_markup_source(source);
        }
        if let Some(source) = self.pdf_source {
            parser = parser.with_pdf_source(source);
        }
        parser
    }

    /// Parse a file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DocStructResult> {
        let document = self.build().parse_file(path, None)?;
        Ok(DocStructResult { document })
    }

    /// Parse bytes with a declared format tag.
    pub fn parse_bytes(
        self,
        bytes: &[u8],
        filename: &str,
        declared_format: &str,
    ) -> Result<DocStructResult> {
        let document = self.build().parse(bytes, filename, declared_format)?;
        Ok(DocStructResult { document })
    }
}

impl Default for DocStruct {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a document.
pub struct DocStructResult {
    /// The extracted document
    pub document: Document,
}

impl DocStructResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Render the ordered heading/list outline.
    pub fn to_outline(&self, frontmatter: bool) -> String {
        render::to_outline(&self.document, frontmatter)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options() {
        let builder = DocStruct::new()
            .with_min_paragraph_len(4)
            .with_japanese_ratio_threshold(0.5)
            .sequential();

        assert_eq!(builder.options.min_paragraph_len, 4);
        assert_eq!(builder.options.japanese_ratio_threshold, 0.5);
        assert!(!builder.options.parallel);
    }

    #[test]
    fn test_builder_default() {
        let builder = DocStruct::default();
        assert_eq!(builder.options, ParseOptions::default());
        assert!(builder.markup_source.is_none());
    }

    #[test]
    fn test_parse_unknown_format() {
        let result = parse(b"x", "x.bin", "octet-stream");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_empty_data() {
        let result = parse(b"", "empty.txt", "plain-text");
        assert!(matches!(result, Err(Error::EmptyContent(_))));
    }

    #[test]
    fn test_builder_parse_bytes() {
        let result = DocStruct::new()
            .parse_bytes(b"# Heading\n\nSome paragraph text here.", "a.txt", "plain-text")
            .unwrap();
        assert_eq!(result.document().structure.headings.len(), 1);
        assert_eq!(result.to_outline(false), "# Heading");
        assert_eq!(result.into_document().word_count, 5);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/path/for/docstruct.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
